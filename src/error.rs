use std::path::PathBuf;

use thiserror::Error;

/// Top-level error for bindsmith operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Configuration loading and validation errors.
///
/// `field` values are dotted paths into the raw source, e.g. `master.ipv6` or
/// `slaves["ns2.example.com"].ipv4`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config parse error: {0}")]
    Parse(String),

    #[error("missing required field: {field}")]
    MissingField { field: String },

    #[error("invalid type for {field}: expected {expected}")]
    InvalidType {
        field: String,
        expected: &'static str,
    },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("duplicate entry in {field}: {name}")]
    Duplicate { field: String, name: String },
}

/// Template lookup and rendering errors.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to render template {template}: {source}")]
    Template {
        template: &'static str,
        #[source]
        source: minijinja::Error,
    },

    #[error("unknown template: {0}")]
    UnknownTemplate(String),

    #[error("failed to read template {}: {source}", path.display())]
    ReadTemplate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Storage and archive errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("invalid relative path: {0}")]
    InvalidPath(String),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to set permissions on {}: {source}", path.display())]
    Permissions {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to build archive {}: {source}", path.display())]
    Archive {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
