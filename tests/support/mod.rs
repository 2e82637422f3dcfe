//! Test support utilities for bindsmith integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Test environment with an isolated temp directory.
///
/// Child processes run with `.current_dir()` set to the temp directory, so
/// tests can safely run in parallel.
pub struct Test {
    /// Temporary working directory
    pub dir: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a test environment with `bind.toml` written from `contents`.
    pub fn with_config(contents: &str) -> Self {
        let t = Self::new();
        t.write("bind.toml", contents);
        t
    }

    /// Write a file relative to the test directory.
    pub fn write(&self, relpath: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(relpath);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create parent dir");
        }
        std::fs::write(&path, contents).expect("failed to write file");
        path
    }

    /// Read a file relative to the test directory.
    pub fn read(&self, relpath: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(relpath))
            .unwrap_or_else(|e| panic!("failed to read {}: {}", relpath, e))
    }

    /// Absolute path of a file relative to the test directory.
    pub fn path(&self, relpath: &str) -> PathBuf {
        self.dir.path().join(relpath)
    }

    /// Destination directory used by `generate`.
    pub fn build(&self) -> PathBuf {
        self.dir.path().join("build")
    }
}

/// Unpack a `.tar.gz` into `(path, mode, content)` triples in archive order.
pub fn unpack(path: &Path) -> Vec<(String, u32, String)> {
    use std::io::Read;

    let file = std::fs::File::open(path).expect("failed to open archive");
    let mut archive = tar::Archive::new(flate2::read::GzDecoder::new(file));
    archive
        .entries()
        .expect("failed to read archive")
        .map(|entry| {
            let mut entry = entry.expect("bad entry");
            let name = entry.path().expect("bad path").to_string_lossy().to_string();
            let mode = entry.header().mode().expect("bad mode");
            let mut content = String::new();
            entry
                .read_to_string(&mut content)
                .expect("entry is not utf-8");
            (name, mode, content)
        })
        .collect()
}

/// Content of one archive entry.
pub fn entry<'a>(entries: &'a [(String, u32, String)], path: &str) -> &'a str {
    entries
        .iter()
        .find(|(name, _, _)| name == path)
        .map(|(_, _, content)| content.as_str())
        .unwrap_or_else(|| panic!("{} not in archive", path))
}

/// Permission bits of a file on disk.
#[cfg(unix)]
pub fn mode_of(path: &Path) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .expect("failed to stat")
        .permissions()
        .mode()
        & 0o7777
}
