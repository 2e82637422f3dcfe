//! Zone and dynamic-update grant types.

use serde::Serialize;
use serde_json::Value;

use crate::core::config::Section;
use crate::core::types::{RecordType, RequesterName, ZoneName};
use crate::core::validation::{parse_record_types, validate_domain_name, Validated};
use crate::error::ConfigError;

/// Permission for one requester to update records in a zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grant {
    requester: RequesterName,
    record_types: Vec<RecordType>,
}

impl Grant {
    /// Create a grant; `record_types` is a space-separated list or `ANY`.
    pub fn new(requester: &str, record_types: &str) -> Validated<Self> {
        validate_domain_name("dynamic-updates", requester)?;
        Ok(Self {
            requester: requester.to_string(),
            record_types: parse_record_types("dynamic-updates", record_types)?,
        })
    }

    pub fn requester(&self) -> &str {
        &self.requester
    }

    pub fn record_types(&self) -> &[RecordType] {
        &self.record_types
    }

    /// TSIG key name scoped to the zone, `<requester>.<zone>`.
    pub fn key_name(&self, zone: &str) -> String {
        format!("{}.{}", self.requester, zone)
    }
}

/// A zone served by the master and transferred to every slave.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Zone {
    name: ZoneName,
    dynamic_updates: Vec<Grant>,
}

impl Zone {
    /// Create a zone without dynamic updates.
    pub fn new(name: &str) -> Validated<Self> {
        validate_domain_name("zones", name)?;
        Ok(Self {
            name: name.trim_end_matches('.').to_string(),
            dynamic_updates: Vec::new(),
        })
    }

    /// Add a grant, rejecting a requester already present.
    pub fn with_grant(mut self, grant: Grant) -> Validated<Self> {
        if self.grant(grant.requester()).is_some() {
            return Err(ConfigError::Duplicate {
                field: format!("zones[\"{}\"].dynamic-updates", self.name),
                name: grant.requester,
            });
        }
        self.dynamic_updates.push(grant);
        Ok(self)
    }

    /// Parse a `zones` entry. `dynamic-updates` is optional; absent and
    /// empty both mean the zone accepts no updates.
    pub(crate) fn from_entry(zones: &Section<'_>, name: &str, value: &Value) -> Validated<Self> {
        validate_domain_name(&zones.child_path(name), name)?;
        let section = zones.child(name, value)?;

        let mut zone = Self {
            name: name.trim_end_matches('.').to_string(),
            dynamic_updates: Vec::new(),
        };

        let Some(updates) = section.optional_section(&["dynamic-updates", "dynamic_updates"])?
        else {
            return Ok(zone);
        };

        for (requester, types) in updates.entries() {
            let field = updates.field(requester);
            validate_domain_name(&field, requester)?;

            let Value::String(types) = types else {
                return Err(ConfigError::InvalidType {
                    field,
                    expected: "string of record types",
                });
            };

            if zone.grant(requester).is_some() {
                return Err(ConfigError::Duplicate {
                    field: updates.path().to_string(),
                    name: requester.to_string(),
                });
            }
            zone.dynamic_updates.push(Grant {
                requester: requester.to_string(),
                record_types: parse_record_types(&field, types)?,
            });
        }

        Ok(zone)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Grants in source order; empty when the zone is static.
    pub fn dynamic_updates(&self) -> &[Grant] {
        &self.dynamic_updates
    }

    /// Look up the grant for a requester. Key names are case-insensitive,
    /// so the match ignores ASCII case.
    pub fn grant(&self, requester: &str) -> Option<&Grant> {
        self.dynamic_updates
            .iter()
            .find(|g| g.requester.eq_ignore_ascii_case(requester))
    }

    /// Whether the zone accepts dynamic updates.
    pub fn is_dynamic(&self) -> bool {
        !self.dynamic_updates.is_empty()
    }

    /// Zone file name, `db.<zone>`.
    pub fn file_name(&self) -> String {
        format!("db.{}", self.name)
    }
}
