//! Filesystem-based storage implementation.
//!
//! Writes artifacts under a root directory (e.g. `build/master-conf/`).

use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, info};

use super::{Store, WriteOutcome};
use crate::core::domain::Mode;
use crate::error::{Result, StoreError};

/// Storage rooted at a directory.
#[derive(Debug, Clone)]
pub struct Filesystem {
    root: PathBuf,
}

impl Filesystem {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a relative path, rejecting absolute paths and `..`.
    pub fn resolve(&self, relpath: &str) -> Result<PathBuf> {
        let rel = Path::new(relpath);
        let escapes = rel
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));

        if relpath.is_empty() || escapes {
            return Err(StoreError::InvalidPath(relpath.to_string()).into());
        }
        Ok(self.root.join(rel))
    }
}

impl Store for Filesystem {
    fn write(&self, relpath: &str, content: &str, overwrite: bool) -> Result<WriteOutcome> {
        let path = self.resolve(relpath)?;

        if !overwrite && path.is_file() {
            info!(path = %path.display(), "keeping existing file");
            return Ok(WriteOutcome::Kept);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        debug!(path = %path.display(), bytes = content.len(), "writing");
        fs::write(&path, content).map_err(|source| StoreError::Write {
            path: path.clone(),
            source,
        })?;

        Ok(WriteOutcome::Written)
    }

    fn set_permissions(&self, relpath: &str, mode: Mode) -> Result<()> {
        let path = self.resolve(relpath)?;

        // Restrict permissions (Unix only)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(mode.bits())).map_err(
                |source| StoreError::Permissions {
                    path: path.clone(),
                    source,
                },
            )?;
        }
        #[cfg(not(unix))]
        let _ = (path, mode);

        Ok(())
    }

    fn exists(&self, relpath: &str) -> Result<bool> {
        Ok(self.resolve(relpath)?.is_file())
    }

    fn read(&self, relpath: &str) -> Result<Vec<u8>> {
        let path = self.resolve(relpath)?;
        fs::read(&path).map_err(|source| StoreError::Read { path, source }.into())
    }

    fn root(&self) -> &Path {
        &self.root
    }
}
