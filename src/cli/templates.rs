//! Template commands.
//!
//! Lists the built-in templates and exports them so they can be customized
//! and passed back with `generate --templates`.

use std::path::Path;

use crate::cli::output;
use crate::core::store::{Filesystem, Store, WriteOutcome};
use crate::core::template::Template;
use crate::error::Result;

/// Print every template name.
pub fn list() -> Result<()> {
    for template in Template::ALL {
        println!("{}", template.name());
    }
    Ok(())
}

/// Write the built-in templates into `dir`.
///
/// Existing files are kept unless `force` is set.
pub fn export(dir: &Path, force: bool) -> Result<()> {
    let store = Filesystem::new(dir);
    let mut written = 0;

    for template in Template::ALL {
        match store.write(template.name(), template.builtin_source(), force)? {
            WriteOutcome::Written => written += 1,
            WriteOutcome::Kept => output::warn(&format!(
                "kept {}",
                output::path(&store.root().join(template.name()).display().to_string())
            )),
        }
    }

    output::success(&format!(
        "exported {} template{} to {}",
        written,
        if written == 1 { "" } else { "s" },
        output::path(&dir.display().to_string())
    ));
    if written < Template::ALL.len() {
        output::hint("use --force to overwrite existing templates");
    }

    Ok(())
}
