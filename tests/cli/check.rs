//! Tests for `bindsmith check`.

use crate::support::*;

#[test]
fn test_check_valid_config() {
    let t = Test::with_config(&sample_with_laptop());

    let output = t.check();
    assert_success(&output);
    assert_stdout_contains(&output, "ns1.example.com (192.0.2.1, 2001:db8::1)");
    assert_stdout_contains(&output, "ns3.example.com");
    assert_stdout_contains(&output, "example.com");
    assert_stdout_contains(&output, "A AAAA");
    assert_stdout_contains(&output, "is valid");
}

#[test]
fn test_check_writes_nothing() {
    let t = Test::with_config(SAMPLE_TOML);

    assert_success(&t.check());
    assert!(!t.path("build").exists());
}

#[test]
fn test_check_names_missing_field() {
    let t = Test::with_config(&SAMPLE_TOML.replace("ipv6 = \"2001:db8::1\"\n", ""));

    let output = t.check();
    assert_failure(&output);
    assert_stderr_contains(&output, "✗ missing required field: master.ipv6");
}
