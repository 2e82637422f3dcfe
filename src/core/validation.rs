//! Input validation for configuration values.
//!
//! Syntactic checks only: a name that passes here is well formed, not
//! necessarily delegated or resolvable.

use std::path::{Component, Path};

use crate::error::ConfigError;

/// Result type for validation helpers.
pub type Validated<T> = std::result::Result<T, ConfigError>;

const MAX_NAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

fn invalid(field: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.into(),
    }
}

/// Validate a domain name (zone name, host fqdn, update requester).
///
/// Rules:
/// - 1 to 253 characters, an optional single trailing dot is ignored
/// - labels of 1 to 63 characters from A-Z, a-z, 0-9, `-` and `_`
/// - labels cannot start or end with `-`
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` naming `field` if the name is invalid.
pub fn validate_domain_name(field: &str, name: &str) -> Validated<()> {
    let trimmed = name.strip_suffix('.').unwrap_or(name);

    if trimmed.is_empty() {
        return Err(invalid(field, "domain name cannot be empty"));
    }
    if trimmed.len() > MAX_NAME_LEN {
        return Err(invalid(
            field,
            format!("'{}' is longer than {} characters", name, MAX_NAME_LEN),
        ));
    }

    for label in trimmed.split('.') {
        if label.is_empty() {
            return Err(invalid(field, format!("'{}' contains an empty label", name)));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(invalid(
                field,
                format!("label '{}' is longer than {} characters", label, MAX_LABEL_LEN),
            ));
        }
        if label.starts_with('-') || label.ends_with('-') {
            return Err(invalid(
                field,
                format!("label '{}' cannot start or end with '-'", label),
            ));
        }
        if let Some(ch) = label
            .chars()
            .find(|c| !c.is_ascii_alphanumeric() && *c != '-' && *c != '_')
        {
            return Err(invalid(
                field,
                format!("invalid character '{}' in '{}'", ch, name),
            ));
        }
    }

    Ok(())
}

/// Split and validate a space-separated list of resource-record types.
///
/// Each token must be alphanumeric (`A`, `AAAA`, `TXT`, `TYPE65534`) or the
/// wildcard `ANY`. Tokens are returned in source order.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if the list is empty or a token is
/// malformed.
pub fn parse_record_types(field: &str, value: &str) -> Validated<Vec<String>> {
    let types: Vec<String> = value.split_whitespace().map(str::to_string).collect();

    if types.is_empty() {
        return Err(invalid(field, "at least one record type is required"));
    }
    for rr in &types {
        if !rr.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(invalid(field, format!("invalid record type '{}'", rr)));
        }
    }

    Ok(types)
}

/// Validate a BIND duration such as `300`, `5m`, `1w` or `1w2d`.
///
/// A duration is one or more groups of digits, each optionally followed by a
/// unit (`s`, `m`, `h`, `d`, `w`, case-insensitive). Only the last group may
/// omit the unit.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if the string is not a duration.
pub fn validate_duration(field: &str, value: &str) -> Validated<()> {
    let reject = || invalid(field, format!("'{}' is not a duration (e.g. 300, 5m, 1w)", value));

    if value.is_empty() {
        return Err(reject());
    }

    // a unit must follow at least one digit
    let mut digits = 0;
    for ch in value.chars() {
        if ch.is_ascii_digit() {
            digits += 1;
        } else if matches!(ch.to_ascii_lowercase(), 's' | 'm' | 'h' | 'd' | 'w') && digits > 0 {
            digits = 0;
        } else {
            return Err(reject());
        }
    }

    Ok(())
}

/// Validate an email address of the form `local@domain`.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if the address has no single `@`, an
/// empty local part, or an invalid domain.
pub fn validate_email(field: &str, value: &str) -> Validated<()> {
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = match parts.next() {
        Some(d) if !d.contains('@') => d,
        _ => return Err(invalid(field, format!("'{}' is not an email address", value))),
    };

    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return Err(invalid(field, format!("'{}' is not an email address", value)));
    }
    validate_domain_name(field, domain)
}

/// Parse an octal permission string (`"640"`, `"0755"`) into mode bits.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if the string is not octal or exceeds
/// `7777`.
pub fn parse_octal_mode(field: &str, value: &str) -> Validated<u32> {
    let reject = || invalid(field, format!("'{}' is not an octal mode", value));
    let digits = value.strip_prefix("0o").unwrap_or(value);

    if digits.is_empty() || !digits.bytes().all(|b| matches!(b, b'0'..=b'7')) {
        return Err(reject());
    }
    // leading zeros carry no bits
    let significant = digits.trim_start_matches('0');
    if significant.len() > 4 {
        return Err(reject());
    }
    if significant.is_empty() {
        return Ok(0);
    }
    u32::from_str_radix(significant, 8).map_err(|_| reject())
}

/// Validate a root directory that is later embedded under a destination.
///
/// Must be non-empty, relative, and free of `..` components.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` otherwise.
pub fn validate_relative_dir(field: &str, value: &str) -> Validated<()> {
    if value.trim().is_empty() {
        return Err(invalid(field, "path cannot be empty"));
    }
    if value.starts_with('/') || value.starts_with('\\') {
        return Err(invalid(
            field,
            format!("'{}' must be relative (no leading separator)", value),
        ));
    }
    if Path::new(value)
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
    {
        return Err(invalid(
            field,
            format!("'{}' cannot contain '..' or a root", value),
        ));
    }

    Ok(())
}
