//! Bindsmith - render a BIND master/slave deployment into per-role bundles.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── generate      # Render and package a deployment
//! │   ├── check         # Validate a configuration
//! │   ├── templates     # List/export built-in templates
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # Configuration source loading (TOML/JSON)
//!     ├── domain/       # Typed configuration model
//!     ├── validation    # Syntactic checks for names, modes, durations
//!     ├── keys          # TSIG key generation
//!     ├── template      # Template identifiers, template set, renderer
//!     ├── store/        # Storage trait and filesystem implementation
//!     ├── archive       # Per-role manifests and tar.gz bundles
//!     └── pipeline      # The render-and-route run
//! ```
//!
//! # Example
//!
//! ```no_run
//! use bindsmith::core::domain::Configuration;
//! use bindsmith::core::pipeline::{self, Options};
//! use bindsmith::core::template::{Renderer, TemplateSet};
//!
//! # fn main() -> bindsmith::error::Result<()> {
//! let config = Configuration::load("bind.toml")?;
//! let renderer = Renderer::new(TemplateSet::builtin())?;
//! let report = pipeline::run(&config, &renderer, &Options::new("build"))?;
//! println!("{} archives", report.archives.len());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod core;
pub mod error;
