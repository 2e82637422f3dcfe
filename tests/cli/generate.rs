//! Tests for `bindsmith generate`.

use crate::support::*;

#[test]
fn test_generate_writes_bundles() {
    let t = Test::with_config(SAMPLE_TOML);

    let output = t.generate();
    assert_success(&output);
    assert_stdout_contains(&output, "master-conf");
    assert_stdout_contains(&output, "generated 1 zone for ns1.example.com and 2 slaves");

    for role in ["master-conf", "master-zones", "slave-conf"] {
        assert!(t.path(&format!("build/{}.tar.gz", role)).is_file());
        assert!(t.path(&format!("build/{}.tar.gz.sha256", role)).is_file());
    }
    assert!(t.path("build/install.sh").is_file());
}

#[test]
fn test_generate_custom_destination() {
    let t = Test::with_config(SAMPLE_TOML);

    let output = t.generate_with(&["--dest", "out/dns"]);
    assert_success(&output);
    assert!(t.path("out/dns/slave-conf.tar.gz").is_file());
    assert!(!t.path("build").exists());
}

#[test]
fn test_generate_reads_json() {
    let t = Test::new();
    t.write("bind.json", SAMPLE_JSON);

    let output = t
        .cmd()
        .args(["generate", "--config", "bind.json"])
        .output()
        .unwrap();
    assert_success(&output);
    assert!(t.path("build/master-zones.tar.gz").is_file());
}

#[test]
fn test_generate_config_from_env() {
    let t = Test::with_config(SAMPLE_TOML);

    let output = t
        .cmd()
        .env("BINDSMITH_CONFIG", "bind.toml")
        .arg("generate")
        .output()
        .unwrap();
    assert_success(&output);
}

#[test]
fn test_generate_reports_kept_files() {
    let t = Test::with_config(SAMPLE_TOML);
    assert_success(&t.generate());

    let output = t.generate();
    assert_success(&output);
    assert_stdout_contains(&output, "Kept");
    assert_stdout_contains(&output, "master-zones: var/cache/bind/db.example.com");
    assert_stderr_contains(&output, "--overwrite-keys");
}

#[cfg(unix)]
#[test]
fn test_install_script_is_executable() {
    let t = Test::with_config(SAMPLE_TOML);
    assert_success(&t.generate());

    assert_eq!(mode_of(&t.path("build/install.sh")), 0o755);
    let script = t.read("build/install.sh");
    assert!(script.starts_with("#!/bin/sh"));
    assert!(script.contains("push ns3.example.com slave-conf"));
}

#[test]
fn test_generate_with_template_dir() {
    let t = Test::with_config(SAMPLE_TOML);
    t.write("tpl/named.conf.options", "options { directory \"/{{ path.data_dir }}\"; };\n");

    let output = t.generate_with(&["--templates", "tpl"]);
    assert_success(&output);
    assert_eq!(
        t.read("build/master-conf/etc/bind/named.conf.options"),
        "options { directory \"/var/cache/bind\"; };\n"
    );
}
