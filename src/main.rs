//! Bindsmith - render a BIND master/slave deployment into per-role bundles.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use bindsmith::cli::output;
use bindsmith::cli::{execute, Cli};
use bindsmith::core::constants;
use bindsmith::error::{ConfigError, Error};

fn main() {
    let cli = Cli::parse();

    // environment filter wins over --log-level
    let filter = EnvFilter::try_from_env(constants::LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("bindsmith={}", cli.log_level.as_str())));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.command) {
        let suggestion = match &e {
            Error::Config(ConfigError::ReadFile { .. }) => Some("pass the file with --config"),
            Error::Config(_) => Some("run: bindsmith check --config <FILE>"),
            Error::Render(_) => Some("run: bindsmith templates export <DIR> to compare"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
