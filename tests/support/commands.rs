//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a bindsmith command running in the test directory.
    ///
    /// Color and log environment variables are cleared so output is stable.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("bindsmith").expect("failed to find bindsmith binary");
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("BINDSMITH_LOG");
        cmd.env_remove("BINDSMITH_CONFIG");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `bindsmith generate --config bind.toml`.
    pub fn generate(&self) -> Output {
        self.generate_with(&[])
    }

    /// `bindsmith generate --config bind.toml` with extra arguments.
    pub fn generate_with(&self, extra: &[&str]) -> Output {
        self.cmd()
            .args(["generate", "--config", "bind.toml"])
            .args(extra)
            .output()
            .expect("failed to run bindsmith generate")
    }

    /// Shortcut for `bindsmith check --config bind.toml`.
    pub fn check(&self) -> Output {
        self.cmd()
            .args(["check", "--config", "bind.toml"])
            .output()
            .expect("failed to run bindsmith check")
    }

    /// Shortcut for `bindsmith templates list`.
    pub fn templates_list(&self) -> Output {
        self.cmd()
            .args(["templates", "list"])
            .output()
            .expect("failed to run bindsmith templates list")
    }

    /// Shortcut for `bindsmith templates export <dir>`.
    pub fn templates_export(&self, dir: &str, force: bool) -> Output {
        let mut cmd = self.cmd();
        cmd.args(["templates", "export", dir]);
        if force {
            cmd.arg("--force");
        }
        cmd.output()
            .expect("failed to run bindsmith templates export")
    }
}
