//! Generate command.
//!
//! Loads the configuration, renders every artifact, and prints a summary of
//! the bundles and of anything the overwrite guard preserved.

use std::path::Path;

use crate::cli::output;
use crate::core::domain::Configuration;
use crate::core::pipeline::{self, Options, Overwrite};
use crate::core::template::{Renderer, TemplateSet};
use crate::error::Result;

/// Render and package a deployment into `dest`.
pub fn execute(
    config_path: &Path,
    dest: &Path,
    templates: Option<&Path>,
    overwrite: Overwrite,
) -> Result<()> {
    let config = Configuration::load(config_path)?;

    let set = match templates {
        Some(dir) => TemplateSet::from_dir(dir)?,
        None => TemplateSet::builtin(),
    };
    let renderer = Renderer::new(set)?;

    let options = Options::new(dest).with_overwrite(overwrite);
    let report = pipeline::run(&config, &renderer, &options)?;

    output::section("Archives");
    for bundle in &report.archives {
        output::kv(
            bundle.role.name(),
            format!(
                "{} ({} file{})",
                output::path(&bundle.path.display().to_string()),
                bundle.files,
                if bundle.files == 1 { "" } else { "s" }
            ),
        );
    }
    output::kv(
        "install",
        output::path(&report.install_script.display().to_string()),
    );

    if !report.kept.is_empty() {
        output::section("Kept");
        for kept in &report.kept {
            output::list_item(&format!("{}: {}", kept.role, kept.path));
        }
        println!();
        output::warn(&format!(
            "{} existing file{} left untouched",
            report.kept.len(),
            if report.kept.len() == 1 { "" } else { "s" }
        ));
        output::hint("pass --overwrite-keys or --overwrite-zones to regenerate them");
    }

    println!();
    output::success(&format!(
        "generated {} zone{} for {} and {} slave{}",
        config.zones().len(),
        if config.zones().len() == 1 { "" } else { "s" },
        config.master().fqdn(),
        config.slaves().len(),
        if config.slaves().len() == 1 { "" } else { "s" }
    ));

    Ok(())
}
