//! SOA parameters.

use serde::Serialize;

use crate::core::config::Section;
use crate::core::validation::{validate_duration, validate_email, Validated};

/// SOA contact and timers shared by every zone file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameters {
    email: String,
    ttl: String,
    refresh: String,
    retry: String,
    expire: String,
    minimum: String,
}

impl Parameters {
    pub(crate) fn from_section(section: &Section<'_>) -> Validated<Self> {
        let email = section.string(&["email"])?;
        validate_email(&section.field("email"), email)?;

        let timer = |key: &str| -> Validated<String> {
            let value = section.scalar(&[key])?;
            validate_duration(&section.field(key), &value)?;
            Ok(value)
        };

        Ok(Self {
            email: email.to_string(),
            ttl: timer("ttl")?,
            refresh: timer("refresh")?,
            retry: timer("retry")?,
            expire: timer("expire")?,
            minimum: timer("minimum")?,
        })
    }

    /// Contact address as configured (`hostmaster@example.com`).
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Contact address in zone-file label form (`hostmaster.example.com`).
    pub fn rname(&self) -> String {
        to_rname(&self.email)
    }

    pub fn ttl(&self) -> &str {
        &self.ttl
    }

    pub fn refresh(&self) -> &str {
        &self.refresh
    }

    pub fn retry(&self) -> &str {
        &self.retry
    }

    pub fn expire(&self) -> &str {
        &self.expire
    }

    pub fn minimum(&self) -> &str {
        &self.minimum
    }
}

/// Rewrite an email address into SOA RNAME syntax.
pub fn to_rname(email: &str) -> String {
    email.replace('@', ".")
}
