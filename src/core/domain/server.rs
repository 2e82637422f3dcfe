//! Nameserver type.

use std::net::{Ipv4Addr, Ipv6Addr};

use serde::Serialize;

use crate::core::config::Section;
use crate::core::types::Fqdn;
use crate::core::validation::{validate_domain_name, Validated};
use crate::error::ConfigError;

/// A master or slave nameserver with both address families.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Server {
    fqdn: Fqdn,
    #[serde(serialize_with = "crate::core::types::as_display")]
    ipv4: Ipv4Addr,
    #[serde(serialize_with = "crate::core::types::as_display")]
    ipv6: Ipv6Addr,
}

impl Server {
    /// Create a server from already-parsed parts.
    pub fn new(fqdn: impl Into<Fqdn>, ipv4: Ipv4Addr, ipv6: Ipv6Addr) -> Self {
        Self {
            fqdn: fqdn.into(),
            ipv4,
            ipv6,
        }
    }

    /// Parse the `master` table, which names its own fqdn.
    pub(crate) fn master(section: &Section<'_>) -> Validated<Self> {
        let fqdn = section.string(&["fqdn"])?;
        Self::with_fqdn(section, &section.field("fqdn"), fqdn)
    }

    /// Parse a `slaves` entry, whose fqdn is the table key.
    pub(crate) fn slave(section: &Section<'_>, fqdn: &str) -> Validated<Self> {
        Self::with_fqdn(section, section.path(), fqdn)
    }

    fn with_fqdn(section: &Section<'_>, fqdn_field: &str, fqdn: &str) -> Validated<Self> {
        validate_domain_name(fqdn_field, fqdn)?;

        let ipv4 = section.string(&["ipv4"])?;
        let ipv4 = ipv4.parse().map_err(|_| ConfigError::InvalidValue {
            field: section.field("ipv4"),
            reason: format!("'{}' is not an IPv4 address", ipv4),
        })?;

        let ipv6 = section.string(&["ipv6"])?;
        let ipv6 = ipv6.parse().map_err(|_| ConfigError::InvalidValue {
            field: section.field("ipv6"),
            reason: format!("'{}' is not an IPv6 address", ipv6),
        })?;

        Ok(Self {
            fqdn: fqdn.trim_end_matches('.').to_string(),
            ipv4,
            ipv6,
        })
    }

    /// Fully qualified host name, without trailing dot.
    pub fn fqdn(&self) -> &str {
        &self.fqdn
    }

    pub fn ipv4(&self) -> Ipv4Addr {
        self.ipv4
    }

    pub fn ipv6(&self) -> Ipv6Addr {
        self.ipv6
    }
}

impl std::fmt::Display for Server {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.fqdn, self.ipv4, self.ipv6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_master_parse() {
        let value = json!({"master": {
            "fqdn": "ns1.example.com",
            "ipv4": "192.0.2.1",
            "ipv6": "2001:db8::1",
        }});
        let root = Section::root(&value).unwrap();
        let master = Server::master(&root.section("master").unwrap()).unwrap();

        assert_eq!(master.fqdn(), "ns1.example.com");
        assert_eq!(master.ipv4(), Ipv4Addr::new(192, 0, 2, 1));
        assert_eq!(master.ipv6().to_string(), "2001:db8::1");
    }

    #[test]
    fn test_wrong_family_rejected() {
        let value = json!({"master": {
            "fqdn": "ns1.example.com",
            "ipv4": "2001:db8::1",
            "ipv6": "2001:db8::1",
        }});
        let root = Section::root(&value).unwrap();
        let err = Server::master(&root.section("master").unwrap()).unwrap_err();
        assert!(err.to_string().contains("master.ipv4"));
    }

    #[test]
    fn test_display() {
        let server = Server::new(
            "ns2.example.com",
            Ipv4Addr::new(198, 51, 100, 1),
            "2001:db8:0:2::1".parse().unwrap(),
        );
        assert_eq!(
            server.to_string(),
            "ns2.example.com (198.51.100.1, 2001:db8:0:2::1)"
        );
    }
}
