//! Per-role archive builders.
//!
//! An [`Archive`] is an append-only manifest of files destined for one
//! server role. Each `store` goes through a [`Store`] rooted at
//! `<destination>/<role>/`; `finalize` packs the on-disk files, in insertion
//! order, into `<destination>/<role>.tar.gz`.
//!
//! Bundles are reproducible: entries carry mtime 0 and uid/gid 0, the gzip
//! header has no timestamp, and entry order is the manifest order. Two runs
//! that leave every file unchanged produce byte-identical archives.

use std::fs::File;
use std::path::{Path, PathBuf};

use flate2::{Compression, GzBuilder};
use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::core::domain::Mode;
use crate::core::store::{Filesystem, Store, WriteOutcome};
use crate::error::{Result, StoreError};

/// Deployment role, one bundle each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    /// Configuration for the master.
    MasterConf,
    /// Zone files for the master.
    MasterZones,
    /// Configuration shared by every slave.
    SlaveConf,
}

impl Role {
    /// Every role, in finalize order.
    pub const ALL: [Role; 3] = [Role::MasterConf, Role::MasterZones, Role::SlaveConf];

    pub fn name(self) -> &'static str {
        match self {
            Role::MasterConf => "master-conf",
            Role::MasterZones => "master-zones",
            Role::SlaveConf => "slave-conf",
        }
    }

    /// Position of this role in [`Role::ALL`].
    pub fn index(self) -> usize {
        match self {
            Role::MasterConf => 0,
            Role::MasterZones => 1,
            Role::SlaveConf => 2,
        }
    }

    /// Bundle file name, `<role>.tar.gz`.
    pub fn archive_name(self) -> String {
        format!("{}.tar.gz", self.name())
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One manifest entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    path: String,
    mode: Mode,
    outcome: WriteOutcome,
}

impl Entry {
    /// Path inside the archive (and under the role's staging root).
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Whether the last store wrote new content or kept the existing file.
    pub fn outcome(&self) -> WriteOutcome {
        self.outcome
    }
}

/// A finished bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    pub role: Role,
    /// Path of the `.tar.gz` file.
    pub path: PathBuf,
    /// Hex SHA-256 of the `.tar.gz` file.
    pub sha256: String,
    /// Number of files packed.
    pub files: usize,
}

/// Append-only collection of files for one role.
pub struct Archive {
    role: Role,
    store: Box<dyn Store>,
    entries: Vec<Entry>,
}

impl Archive {
    /// Create an archive writing through `store`.
    pub fn new(role: Role, store: impl Store + 'static) -> Self {
        Self {
            role,
            store: Box::new(store),
            entries: Vec::new(),
        }
    }

    /// Create an archive staged under `<destination>/<role>/`.
    pub fn in_dir(role: Role, destination: &Path) -> Self {
        Self::new(role, Filesystem::new(destination.join(role.name())))
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Manifest in insertion order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Staging root of this archive.
    pub fn root(&self) -> &Path {
        self.store.root()
    }

    /// Text already staged at `relpath`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Read` if the file exists but cannot be read as
    /// UTF-8 text.
    pub fn staged(&self, relpath: &str) -> Result<Option<String>> {
        if !self.store.exists(relpath)? {
            return Ok(None);
        }
        let bytes = self.store.read(relpath)?;
        String::from_utf8(bytes).map(Some).map_err(|e| {
            StoreError::Read {
                path: self.store.root().join(relpath),
                source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
            }
            .into()
        })
    }

    /// Write a file and record it in the manifest.
    ///
    /// The entry is recorded and the mode applied whether or not the write
    /// happened. Storing a path twice keeps its original position.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write or the permission change fails.
    pub fn store(
        &mut self,
        relpath: &str,
        content: &str,
        mode: Mode,
        overwrite: bool,
    ) -> Result<WriteOutcome> {
        let outcome = self.store.write(relpath, content, overwrite)?;
        self.store.set_permissions(relpath, mode)?;

        debug!(archive = self.role.name(), path = relpath, mode = %mode, ?outcome, "stored");

        match self.entries.iter_mut().find(|e| e.path == relpath) {
            Some(entry) => {
                entry.mode = mode;
                entry.outcome = outcome;
            }
            None => self.entries.push(Entry {
                path: relpath.to_string(),
                mode,
                outcome,
            }),
        }

        Ok(outcome)
    }

    /// Pack the manifest into `<out_dir>/<role>.tar.gz` and write its
    /// checksum next to it as `<role>.tar.gz.sha256`.
    ///
    /// Content is read back from storage, so a kept file is bundled with its
    /// preserved bytes.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Read` for a missing staged file, or
    /// `StoreError::Archive` if the bundle cannot be written.
    pub fn finalize(self, out_dir: &Path) -> Result<Bundle> {
        let path = out_dir.join(self.role.archive_name());
        let archive_err = |source| StoreError::Archive {
            path: path.clone(),
            source,
        };

        std::fs::create_dir_all(out_dir).map_err(archive_err)?;
        let file = File::create(&path).map_err(archive_err)?;
        let encoder = GzBuilder::new().mtime(0).write(file, Compression::default());
        let mut builder = tar::Builder::new(encoder);

        for entry in &self.entries {
            let data = self.store.read(&entry.path)?;

            let mut header = tar::Header::new_gnu();
            header.set_entry_type(tar::EntryType::Regular);
            header.set_size(data.len() as u64);
            header.set_mode(entry.mode.bits());
            header.set_mtime(0);
            header.set_uid(0);
            header.set_gid(0);

            builder
                .append_data(&mut header, &entry.path, data.as_slice())
                .map_err(archive_err)?;
        }

        builder
            .into_inner()
            .and_then(|encoder| encoder.finish())
            .map_err(archive_err)?;

        let bytes = std::fs::read(&path).map_err(archive_err)?;
        let sha256 = format!("{:x}", Sha256::digest(&bytes));
        std::fs::write(
            out_dir.join(format!("{}.sha256", self.role.archive_name())),
            format!("{}  {}\n", sha256, self.role.archive_name()),
        )
        .map_err(archive_err)?;

        info!(
            archive = %path.display(),
            files = self.entries.len(),
            bytes = bytes.len(),
            "archive written"
        );

        Ok(Bundle {
            role: self.role,
            path,
            sha256,
            files: self.entries.len(),
        })
    }
}
