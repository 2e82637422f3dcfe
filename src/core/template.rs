//! Template identifiers, template sets and rendering.
//!
//! The set of templates is closed: every template the pipeline renders is a
//! [`Template`] variant, and each variant is rendered against one
//! [`Bindings`] shape. Built-in sources are compiled into the binary and can
//! be overridden file-by-file from a directory.
//!
//! Rendering is strict. A reference to a binding that was not supplied fails
//! with `RenderError::Template` instead of rendering as an empty string.

use std::collections::HashMap;
use std::path::Path;

use minijinja::{context, AutoEscape, Environment, UndefinedBehavior, Value};
use serde::Serialize;
use tracing::debug;

use crate::core::domain::{to_rname, Configuration, Paths, Zone};
use crate::core::keys::RandomKey;
use crate::error::{RenderError, Result};

/// A named template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    /// `named.conf`; bound to [`Bindings::Paths`].
    NamedConf,
    /// `named.conf.options`; bound to [`Bindings::Paths`].
    NamedConfOptions,
    /// `key`; bound to [`Bindings::Key`].
    Key,
    /// `named.conf.local.master`; bound to [`Bindings::Config`].
    LocalMaster,
    /// `named.conf.local.slave`; bound to [`Bindings::Config`].
    LocalSlave,
    /// `secure_permissions.sh`; bound to [`Bindings::Config`].
    SecurePermissions,
    /// `ensure_dnssec_keys.sh`; bound to [`Bindings::Config`].
    EnsureDnssecKeys,
    /// `zone_file`; bound to [`Bindings::Zone`].
    ZoneFile,
    /// `install.sh`; bound to [`Bindings::Config`].
    Install,
}

impl Template {
    /// Every template, in rendering order.
    pub const ALL: [Template; 9] = [
        Template::NamedConf,
        Template::NamedConfOptions,
        Template::Key,
        Template::LocalMaster,
        Template::LocalSlave,
        Template::SecurePermissions,
        Template::EnsureDnssecKeys,
        Template::ZoneFile,
        Template::Install,
    ];

    /// Template name, also its file name in a template directory.
    pub fn name(self) -> &'static str {
        match self {
            Template::NamedConf => "named.conf",
            Template::NamedConfOptions => "named.conf.options",
            Template::Key => "key",
            Template::LocalMaster => "named.conf.local.master",
            Template::LocalSlave => "named.conf.local.slave",
            Template::SecurePermissions => "secure_permissions.sh",
            Template::EnsureDnssecKeys => "ensure_dnssec_keys.sh",
            Template::ZoneFile => "zone_file",
            Template::Install => "install.sh",
        }
    }

    /// Look up a template by name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    /// Source compiled into the binary.
    pub fn builtin_source(self) -> &'static str {
        match self {
            Template::NamedConf => include_str!("../../templates/named.conf"),
            Template::NamedConfOptions => include_str!("../../templates/named.conf.options"),
            Template::Key => include_str!("../../templates/key"),
            Template::LocalMaster => include_str!("../../templates/named.conf.local.master"),
            Template::LocalSlave => include_str!("../../templates/named.conf.local.slave"),
            Template::SecurePermissions => include_str!("../../templates/secure_permissions.sh"),
            Template::EnsureDnssecKeys => include_str!("../../templates/ensure_dnssec_keys.sh"),
            Template::ZoneFile => include_str!("../../templates/zone_file"),
            Template::Install => include_str!("../../templates/install.sh"),
        }
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Template {
    type Err = RenderError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| RenderError::UnknownTemplate(s.to_string()))
    }
}

/// Sources for every template.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    sources: HashMap<Template, String>,
}

impl TemplateSet {
    /// Templates compiled into the binary.
    pub fn builtin() -> Self {
        let sources = Template::ALL
            .into_iter()
            .map(|t| (t, t.builtin_source().to_string()))
            .collect();
        Self { sources }
    }

    /// Built-in templates overridden by files in `dir`.
    ///
    /// Each regular file must be named after a template; anything else is
    /// rejected so a typo cannot silently fall back to a built-in.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::ReadTemplate` if the directory or a file cannot
    /// be read, or `RenderError::UnknownTemplate` for a stray file.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        debug!(dir = %dir.display(), "loading templates");

        let read_err = |source| RenderError::ReadTemplate {
            path: dir.to_path_buf(),
            source,
        };

        let mut set = Self::builtin();
        let mut entries: Vec<_> = std::fs::read_dir(dir)
            .map_err(read_err)?
            .collect::<std::io::Result<_>>()
            .map_err(read_err)?;
        entries.sort_by_key(|e| e.file_name());

        for entry in entries {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().to_string();
            if name.starts_with('.') {
                continue;
            }
            let template: Template = name.parse()?;
            let source = std::fs::read_to_string(&path)
                .map_err(|source| RenderError::ReadTemplate { path, source })?;

            debug!(template = template.name(), "template overridden");
            set.sources.insert(template, source);
        }

        Ok(set)
    }

    /// Replace one template's source.
    pub fn with_source(mut self, template: Template, source: impl Into<String>) -> Self {
        self.sources.insert(template, source.into());
        self
    }

    /// Source text for a template.
    pub fn source(&self, template: Template) -> &str {
        self.sources
            .get(&template)
            .map(String::as_str)
            .unwrap_or_else(|| template.builtin_source())
    }
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Values a template is rendered against.
#[derive(Debug, Clone, Copy)]
pub enum Bindings<'a> {
    /// Exposes `path`.
    Paths(&'a Paths),
    /// Exposes `key` (`name`, `algorithm`, `secret`).
    Key(&'a RandomKey),
    /// Exposes `path`, `master`, `slaves`, `zones`, `parameters`,
    /// `secured_permissions`.
    Config(&'a Configuration),
    /// Everything in `Config` plus `zone`.
    Zone(&'a Configuration, &'a Zone),
}

#[derive(Serialize)]
struct ZoneScope<'a> {
    #[serde(flatten)]
    config: &'a Configuration,
    zone: &'a Zone,
}

impl Bindings<'_> {
    fn to_value(self) -> Value {
        match self {
            Bindings::Paths(paths) => context! { path => paths },
            Bindings::Key(key) => context! { key => key },
            Bindings::Config(config) => Value::from_serialize(config),
            Bindings::Zone(config, zone) => Value::from_serialize(ZoneScope { config, zone }),
        }
    }
}

/// Strict renderer over a compiled template set.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// Compile every template in the set.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::Template` on the first syntax error.
    pub fn new(set: TemplateSet) -> Result<Self> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        env.add_filter("rname", |email: String| to_rname(&email));

        let TemplateSet { mut sources } = set;
        for template in Template::ALL {
            let source = sources
                .remove(&template)
                .unwrap_or_else(|| template.builtin_source().to_string());
            env.add_template_owned(template.name(), source)
                .map_err(|source| RenderError::Template {
                    template: template.name(),
                    source,
                })?;
        }

        Ok(Self { env })
    }

    /// Render a template against its bindings.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::Template` if the template references anything
    /// the bindings do not provide.
    pub fn render(&self, template: Template, bindings: Bindings<'_>) -> Result<String> {
        debug!(template = template.name(), "rendering");

        let wrap = |source| RenderError::Template {
            template: template.name(),
            source,
        };
        let tmpl = self.env.get_template(template.name()).map_err(wrap)?;
        Ok(tmpl.render(bindings.to_value()).map_err(wrap)?)
    }
}
