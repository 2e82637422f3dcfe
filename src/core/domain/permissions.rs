//! Ownership and permission profiles.

use serde::{Serialize, Serializer};

use crate::core::config::Section;
use crate::core::validation::{parse_octal_mode, Validated};

/// Unix permission bits, written and rendered as octal (`640`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mode(u32);

impl Mode {
    pub const fn new(bits: u32) -> Self {
        Self(bits & 0o7777)
    }

    pub fn bits(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:o}", self.0)
    }
}

impl Serialize for Mode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Which permission profile an artifact gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// TSIG keys and other secret material.
    Secured,
    /// Configuration fragments and zone files.
    Standard,
    /// Helper scripts.
    Shell,
}

/// Owners and the three permission profiles applied to generated files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecuredPermissions {
    root_user: String,
    bind_user: String,
    bind_group: String,
    secured_flags: Mode,
    standard_flags: Mode,
    shell_flags: Mode,
}

impl SecuredPermissions {
    pub(crate) fn from_section(section: &Section<'_>) -> Validated<Self> {
        let name = |keys: &[&str]| -> Validated<String> {
            let value = section.string(keys)?;
            if value.trim().is_empty() {
                return Err(crate::error::ConfigError::InvalidValue {
                    field: section.field(keys[0]),
                    reason: "cannot be empty".to_string(),
                });
            }
            Ok(value.to_string())
        };
        let mode = |keys: &[&str]| -> Validated<Mode> {
            let value = section.string(keys)?;
            Ok(Mode(parse_octal_mode(&section.field(keys[0]), value)?))
        };

        Ok(Self {
            root_user: name(&["root_user", "root-user"])?,
            bind_user: name(&["bind_user", "bind-user"])?,
            bind_group: name(&["bind_group", "bind-group"])?,
            secured_flags: mode(&["secured_flags", "secured-flags"])?,
            standard_flags: mode(&["standard_flags", "standard-flags"])?,
            shell_flags: mode(&["shell_flags", "shell-flags"])?,
        })
    }

    pub fn root_user(&self) -> &str {
        &self.root_user
    }

    pub fn bind_user(&self) -> &str {
        &self.bind_user
    }

    pub fn bind_group(&self) -> &str {
        &self.bind_group
    }

    /// Mode bits for a profile.
    pub fn mode(&self, profile: Profile) -> Mode {
        match profile {
            Profile::Secured => self.secured_flags,
            Profile::Standard => self.standard_flags,
            Profile::Shell => self.shell_flags,
        }
    }
}
