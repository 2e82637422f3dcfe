//! Command-line interface.

pub mod check;
pub mod completions;
pub mod generate;
pub mod output;
pub mod templates;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::constants;
use crate::core::pipeline::Overwrite;

/// Bindsmith - render a BIND master/slave deployment into per-role bundles.
#[derive(Parser)]
#[command(
    name = "bindsmith",
    about = "Render a BIND master/slave deployment into per-role bundles",
    version
)]
pub struct Cli {
    /// Log level (overridden by BINDSMITH_LOG)
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Render configuration, keys and zone files, and package them per role
    Generate {
        /// Deployment configuration (.toml or .json)
        #[arg(short, long, env = constants::CONFIG_ENV)]
        config: PathBuf,
        /// Destination directory
        #[arg(short, long, default_value = constants::DEFAULT_DESTINATION)]
        dest: PathBuf,
        /// Directory of templates overriding the built-in ones
        #[arg(short, long)]
        templates: Option<PathBuf>,
        /// Replace existing TSIG key files with new secrets
        #[arg(long)]
        overwrite_keys: bool,
        /// Replace existing zone files (resets their serials)
        #[arg(long)]
        overwrite_zones: bool,
    },

    /// Validate a configuration without rendering anything
    Check {
        /// Deployment configuration (.toml or .json)
        #[arg(short, long, env = constants::CONFIG_ENV)]
        config: PathBuf,
    },

    /// Inspect the built-in templates
    Templates {
        #[command(subcommand)]
        action: TemplatesAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Template subcommands.
#[derive(Subcommand)]
pub enum TemplatesAction {
    /// List template names
    List,

    /// Write the built-in templates to a directory for customization
    Export {
        /// Target directory
        dir: PathBuf,
        /// Overwrite files that already exist
        #[arg(short, long)]
        force: bool,
    },
}

/// Log verbosity.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Directive form used in an `EnvFilter`.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Generate {
            config,
            dest,
            templates,
            overwrite_keys,
            overwrite_zones,
        } => generate::execute(
            &config,
            &dest,
            templates.as_deref(),
            Overwrite {
                keys: overwrite_keys,
                zones: overwrite_zones,
            },
        ),
        Check { config } => check::execute(&config),
        Templates { action } => match action {
            TemplatesAction::List => templates::list(),
            TemplatesAction::Export { dir, force } => templates::export(&dir, force),
        },
        Completions { shell } => completions::execute(shell),
    }
}
