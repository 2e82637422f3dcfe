//! Check command.
//!
//! Validates a configuration and prints what a run would produce, without
//! touching the filesystem.

use std::path::Path;

use crate::cli::output;
use crate::core::domain::Configuration;
use crate::error::Result;

/// Validate a configuration and print an overview.
pub fn execute(config_path: &Path) -> Result<()> {
    let config = Configuration::load(config_path)?;

    output::section("Servers");
    let master = config.master();
    output::kv(
        "master",
        format!("{} ({}, {})", master.fqdn(), master.ipv4(), master.ipv6()),
    );
    for slave in config.slaves() {
        output::kv(
            "slave",
            format!("{} ({}, {})", slave.fqdn(), slave.ipv4(), slave.ipv6()),
        );
    }

    output::section("Zones");
    for zone in config.zones() {
        output::list_item(zone.name());
        if zone.is_dynamic() {
            for grant in zone.dynamic_updates() {
                output::kv(
                    &format!("  {}", grant.requester()),
                    grant.record_types().join(" "),
                );
            }
        } else {
            output::dimmed("    no dynamic updates");
        }
    }

    output::section("Paths");
    let paths = config.paths();
    output::kv("config", paths.config_dir());
    output::kv("data", paths.data_dir());

    println!();
    output::success(&format!(
        "{} is valid",
        output::path(&config_path.display().to_string())
    ));

    Ok(())
}
