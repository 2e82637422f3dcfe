//! Configuration source loading.
//!
//! Reads a TOML or JSON file into an insertion-ordered `serde_json::Value`
//! and exposes [`Section`], a cursor over the raw tree that reports missing or
//! mistyped keys with their full dotted path.

use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use crate::core::validation::Validated;
use crate::error::ConfigError;

/// Source format of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Json,
}

impl Format {
    /// Pick a format from a file extension; anything but `.json` is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Toml,
        }
    }
}

/// Read a configuration file into a raw value tree.
///
/// # Errors
///
/// Returns `ConfigError::ReadFile` if the file cannot be read, or
/// `ConfigError::Parse` if it is not valid TOML/JSON.
pub fn read_source(path: &Path) -> Validated<Value> {
    debug!(path = %path.display(), "reading config source");

    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_source(&contents, Format::from_path(path))
}

/// Parse configuration text in the given format.
///
/// # Errors
///
/// Returns `ConfigError::Parse` on syntax errors.
pub fn parse_source(contents: &str, format: Format) -> Validated<Value> {
    match format {
        Format::Toml => toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string())),
        Format::Json => {
            serde_json::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
        }
    }
}

/// A table in the raw configuration tree, tagged with its path.
#[derive(Debug, Clone)]
pub struct Section<'a> {
    path: String,
    map: &'a Map<String, Value>,
}

impl<'a> Section<'a> {
    /// Wrap the document root, which must be a table.
    pub fn root(value: &'a Value) -> Validated<Self> {
        match value {
            Value::Object(map) => Ok(Self {
                path: String::new(),
                map,
            }),
            _ => Err(ConfigError::InvalidType {
                field: "<root>".to_string(),
                expected: "table",
            }),
        }
    }

    /// Dotted path of `key` inside this section.
    pub fn field(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    /// Path of this section.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// First present key among `keys` (aliases), skipping explicit nulls.
    fn lookup<'k>(&self, keys: &[&'k str]) -> Option<(&'k str, &'a Value)> {
        keys.iter().find_map(|k| match self.map.get(*k) {
            None | Some(Value::Null) => None,
            Some(v) => Some((*k, v)),
        })
    }

    fn missing(&self, keys: &[&str]) -> ConfigError {
        ConfigError::MissingField {
            field: self.field(keys.first().copied().unwrap_or_default()),
        }
    }

    /// Required string value under any of `keys`.
    pub fn string(&self, keys: &[&str]) -> Validated<&'a str> {
        match self.lookup(keys) {
            Some((_, Value::String(s))) => Ok(s.as_str()),
            Some((k, _)) => Err(ConfigError::InvalidType {
                field: self.field(k),
                expected: "string",
            }),
            None => Err(self.missing(keys)),
        }
    }

    /// Required scalar that may be written as a string or a non-negative
    /// integer (`ttl = 300` or `ttl = "5m"`), normalized to a string.
    pub fn scalar(&self, keys: &[&str]) -> Validated<String> {
        match self.lookup(keys) {
            Some((_, Value::String(s))) => Ok(s.clone()),
            Some((_, Value::Number(n))) if n.is_u64() => Ok(n.to_string()),
            Some((k, _)) => Err(ConfigError::InvalidType {
                field: self.field(k),
                expected: "string or non-negative integer",
            }),
            None => Err(self.missing(keys)),
        }
    }

    /// Required nested table.
    pub fn section(&self, key: &str) -> Validated<Section<'a>> {
        self.optional_section(&[key])?
            .ok_or_else(|| self.missing(&[key]))
    }

    /// Optional nested table under any of `keys`; absent or null is `None`.
    pub fn optional_section(&self, keys: &[&str]) -> Validated<Option<Section<'a>>> {
        match self.lookup(keys) {
            Some((k, Value::Object(map))) => Ok(Some(Section {
                path: self.field(k),
                map,
            })),
            Some((k, _)) => Err(ConfigError::InvalidType {
                field: self.field(k),
                expected: "table",
            }),
            None => Ok(None),
        }
    }

    /// Entries in source order.
    pub fn entries(&self) -> impl Iterator<Item = (&'a str, &'a Value)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Path used for a named child, e.g. `slaves["ns2.example.com"]`.
    pub fn child_path(&self, name: &str) -> String {
        format!("{}[\"{}\"]", self.path, name)
    }

    /// Treat a keyed entry of this table as a table itself.
    pub fn child(&self, name: &str, value: &'a Value) -> Validated<Section<'a>> {
        match value {
            Value::Object(map) => Ok(Section {
                path: self.child_path(name),
                map,
            }),
            _ => Err(ConfigError::InvalidType {
                field: self.child_path(name),
                expected: "table",
            }),
        }
    }
}
