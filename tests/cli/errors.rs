//! Exit codes and error messages.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_missing_config_file() {
    let t = Test::new();

    t.cmd()
        .args(["generate", "--config", "nope.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("✗ failed to read config"))
        .stderr(predicate::str::contains("--config"));
}

#[test]
fn test_config_flag_required() {
    let t = Test::new();

    t.cmd().arg("generate").assert().failure();
}

#[test]
fn test_parse_error() {
    let t = Test::with_config("[path\n");

    t.cmd()
        .args(["generate", "--config", "bind.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("config parse error"));
}

#[test]
fn test_invalid_record_type() {
    let t = Test::with_config(&SAMPLE_TOML.replace(
        "[zones.\"example.com\"]\n",
        "[zones.\"example.com\".dynamic-updates]\nlaptop = \"\"\n",
    ));

    let output = t.generate();
    assert_failure(&output);
    assert_stderr_contains(&output, "dynamic-updates.laptop");
    assert!(!t.path("build").exists());
}

#[test]
fn test_render_error_is_fatal() {
    let t = Test::with_config(SAMPLE_TOML);
    t.write("tpl/zone_file", "{{ zone.serial }}\n");

    let output = t.generate_with(&["--templates", "tpl"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "zone_file");
    // files rendered before the failure stay for inspection
    assert!(t.path("build/master-conf/etc/bind/named.conf").is_file());
    assert!(!t.path("build/master-conf.tar.gz").exists());
}

#[test]
fn test_log_level_debug_goes_to_stderr() {
    let t = Test::with_config(SAMPLE_TOML);

    t.cmd()
        .args(["--log-level", "debug", "generate", "--config", "bind.toml"])
        .assert()
        .success()
        .stderr(predicate::str::contains("loading config"));
}

#[test]
fn test_completions() {
    let t = Test::new();

    t.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bindsmith"));
}
