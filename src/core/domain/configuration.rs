//! Configuration aggregate.
//!
//! Built once from a raw source and read-only afterwards. Loading is
//! all-or-nothing: the first missing or malformed field aborts with a
//! `ConfigError` naming it, and nothing is defaulted.

use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::{Parameters, Paths, SecuredPermissions, Server, Zone};
use crate::core::config::{self, Format, Section};
use crate::core::validation::Validated;
use crate::error::{ConfigError, Result};

/// A validated deployment: one master, its slaves, and the zones they serve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Configuration {
    path: Paths,
    master: Server,
    slaves: Vec<Server>,
    zones: Vec<Zone>,
    parameters: Parameters,
    secured_permissions: SecuredPermissions,
}

impl Configuration {
    /// Load and validate a configuration file (`.toml` or `.json`).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile`, `ConfigError::Parse`, or the first
    /// validation failure.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading config");

        let value = config::read_source(path)?;
        let config = Self::from_value(&value)?;

        debug!(
            slaves = config.slaves.len(),
            zones = config.zones.len(),
            "config loaded"
        );
        Ok(config)
    }

    /// Parse and validate TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let value = config::parse_source(contents, Format::Toml)?;
        Ok(Self::from_value(&value)?)
    }

    /// Parse and validate JSON text.
    pub fn from_json_str(contents: &str) -> Result<Self> {
        let value = config::parse_source(contents, Format::Json)?;
        Ok(Self::from_value(&value)?)
    }

    /// Build the model from a raw value tree.
    ///
    /// Sections are read in a fixed order (`path`, `master`, `slaves`,
    /// `zones`, `parameters`, `secured_permissions`) so the reported field is
    /// deterministic when several are wrong.
    pub fn from_value(value: &Value) -> Validated<Self> {
        let root = Section::root(value)?;

        let path = Paths::from_section(&root.section("path")?)?;
        let master = Server::master(&root.section("master")?)?;

        let slaves_section = root.section("slaves")?;
        let mut slaves: Vec<Server> = Vec::with_capacity(slaves_section.len());
        for (fqdn, entry) in slaves_section.entries() {
            let slave = Server::slave(&slaves_section.child(fqdn, entry)?, fqdn)?;
            if slaves.iter().any(|s| s.fqdn().eq_ignore_ascii_case(slave.fqdn())) {
                return Err(ConfigError::Duplicate {
                    field: "slaves".to_string(),
                    name: fqdn.to_string(),
                });
            }
            slaves.push(slave);
        }

        let zones_section = root.section("zones")?;
        let mut zones: Vec<Zone> = Vec::with_capacity(zones_section.len());
        for (name, entry) in zones_section.entries() {
            let zone = Zone::from_entry(&zones_section, name, entry)?;
            if zones.iter().any(|z| z.name().eq_ignore_ascii_case(zone.name())) {
                return Err(ConfigError::Duplicate {
                    field: "zones".to_string(),
                    name: name.to_string(),
                });
            }
            zones.push(zone);
        }

        let parameters = Parameters::from_section(&root.section("parameters")?)?;
        let secured_permissions =
            SecuredPermissions::from_section(&root.section("secured_permissions")?)?;

        Ok(Self {
            path,
            master,
            slaves,
            zones,
            parameters,
            secured_permissions,
        })
    }

    pub fn paths(&self) -> &Paths {
        &self.path
    }

    pub fn master(&self) -> &Server {
        &self.master
    }

    /// Slaves in source order.
    pub fn slaves(&self) -> &[Server] {
        &self.slaves
    }

    /// Look up a slave by fqdn, ignoring ASCII case.
    pub fn slave(&self, fqdn: &str) -> Option<&Server> {
        self.slaves.iter().find(|s| s.fqdn().eq_ignore_ascii_case(fqdn))
    }

    /// Zones in source order.
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Look up a zone by name, ignoring ASCII case.
    pub fn zone(&self, name: &str) -> Option<&Zone> {
        self.zones.iter().find(|z| z.name().eq_ignore_ascii_case(name))
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn permissions(&self) -> &SecuredPermissions {
        &self.secured_permissions
    }
}
