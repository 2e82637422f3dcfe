//! Root directories for configuration and zone data.

use serde::Serialize;

use crate::core::config::Section;
use crate::core::validation::{validate_relative_dir, Validated};

/// Relative roots embedded under the destination directory.
///
/// Both are relative (no leading separator); templates prefix them with `/`
/// when they need the absolute path on the target server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paths {
    config_dir: String,
    data_dir: String,
}

impl Paths {
    /// Create validated paths.
    pub fn new(config_dir: &str, data_dir: &str) -> Validated<Self> {
        Self::checked(("path.config_dir", config_dir), ("path.data_dir", data_dir))
    }

    pub(crate) fn from_section(section: &Section<'_>) -> Validated<Self> {
        let config_dir = section.string(&["config_dir", "config"])?;
        let data_dir = section.string(&["data_dir", "data"])?;
        Self::checked(
            (&section.field("config_dir"), config_dir),
            (&section.field("data_dir"), data_dir),
        )
    }

    fn checked(config_dir: (&str, &str), data_dir: (&str, &str)) -> Validated<Self> {
        let (config_field, config_dir) = config_dir;
        let (data_field, data_dir) = data_dir;
        validate_relative_dir(config_field, config_dir)?;
        validate_relative_dir(data_field, data_dir)?;
        Ok(Self {
            config_dir: config_dir.trim_end_matches('/').to_string(),
            data_dir: data_dir.trim_end_matches('/').to_string(),
        })
    }

    /// Configuration root, e.g. `etc/bind`.
    pub fn config_dir(&self) -> &str {
        &self.config_dir
    }

    /// Zone data root, e.g. `var/cache/bind`.
    pub fn data_dir(&self) -> &str {
        &self.data_dir
    }

    /// `relpath` under the configuration root.
    pub fn config_file(&self, relpath: &str) -> String {
        format!("{}/{}", self.config_dir, relpath)
    }

    /// `relpath` under the zone data root.
    pub fn data_file(&self, relpath: &str) -> String {
        format!("{}/{}", self.data_dir, relpath)
    }
}
