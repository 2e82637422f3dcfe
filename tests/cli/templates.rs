//! Tests for `bindsmith templates`.

use crate::support::*;

const NAMES: [&str; 9] = [
    "named.conf",
    "named.conf.options",
    "key",
    "named.conf.local.master",
    "named.conf.local.slave",
    "zone_file",
    "secure_permissions.sh",
    "ensure_dnssec_keys.sh",
    "install.sh",
];

#[test]
fn test_list_names_every_template() {
    let t = Test::new();

    let output = t.templates_list();
    assert_success(&output);
    let out = stdout(&output);
    let mut listed: Vec<&str> = out.lines().collect();
    listed.sort_unstable();
    let mut expected = NAMES.to_vec();
    expected.sort_unstable();
    assert_eq!(listed, expected);
}

#[test]
fn test_export_then_generate_with_exported_set() {
    let t = Test::with_config(SAMPLE_TOML);

    let output = t.templates_export("tpl", false);
    assert_success(&output);
    assert_stdout_contains(&output, "exported 9 templates");
    for name in NAMES {
        assert!(t.path(&format!("tpl/{}", name)).is_file(), "{} missing", name);
    }

    assert_success(&t.generate_with(&["--templates", "tpl"]));
}

#[test]
fn test_export_keeps_edits_without_force() {
    let t = Test::new();
    assert_success(&t.templates_export("tpl", false));
    t.write("tpl/key", "edited\n");

    let output = t.templates_export("tpl", false);
    assert_success(&output);
    assert_stdout_contains(&output, "kept");
    assert_eq!(t.read("tpl/key"), "edited\n");

    assert_success(&t.templates_export("tpl", true));
    assert_ne!(t.read("tpl/key"), "edited\n");
}

#[test]
fn test_unknown_template_file_rejected() {
    let t = Test::with_config(SAMPLE_TOML);
    t.write("tpl/named.conf.typo", "x\n");

    let output = t.generate_with(&["--templates", "tpl"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "unknown template: named.conf.typo");
}
