//! Artifact storage.
//!
//! Provides the storage abstraction the archive builder writes through, with
//! a filesystem implementation.
//!
//! ## Overwrite semantics
//!
//! `write` with `overwrite = false` leaves an existing file untouched and
//! reports [`WriteOutcome::Kept`]. `set_permissions` is independent of the
//! write and always applies, so a preserved key file still ends up with the
//! secured mode.

use std::path::Path;

use crate::core::domain::Mode;
use crate::error::Result;

mod fs;

pub use fs::Filesystem;

/// What a write did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// New content was written.
    Written,
    /// A file already existed and overwrite was off; it was left as is.
    Kept,
}

/// Storage for rendered artifacts, addressed by relative path.
pub trait Store {
    /// Write `content` at `relpath`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidPath` for absolute or escaping paths, or
    /// `StoreError::Write` if the file cannot be written.
    fn write(&self, relpath: &str, content: &str, overwrite: bool) -> Result<WriteOutcome>;

    /// Apply permission bits to the file at `relpath`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Permissions` if the mode cannot be changed.
    fn set_permissions(&self, relpath: &str, mode: Mode) -> Result<()>;

    /// Whether a file already exists at `relpath`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidPath` for absolute or escaping paths.
    fn exists(&self, relpath: &str) -> Result<bool>;

    /// Read back the file at `relpath`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Read` if the file cannot be read.
    fn read(&self, relpath: &str) -> Result<Vec<u8>>;

    /// Root the relative paths resolve against.
    fn root(&self) -> &Path;
}
