//! The render-and-route run.
//!
//! One linear pass over a loaded [`Configuration`]: render each template,
//! route the result to its archive(s) with the right profile and overwrite
//! policy, then finalize every archive. Any failure aborts the remaining
//! steps; files written before the failure stay on disk for inspection.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::core::archive::{Archive, Bundle, Role};
use crate::core::constants;
use crate::core::domain::{Configuration, Profile};
use crate::core::keys::RandomKey;
use crate::core::store::{Filesystem, Store, WriteOutcome};
use crate::core::template::{Bindings, Renderer, Template};
use crate::error::Result;

/// Whether stateful artifacts may be replaced on a re-run.
///
/// Both default to `false`: existing key files keep their secrets and
/// existing zone files keep their (possibly bumped) serials. The two toggles
/// are independent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overwrite {
    /// Replace existing TSIG key files.
    pub keys: bool,
    /// Replace existing zone files.
    pub zones: bool,
}

/// Options for one run.
#[derive(Debug, Clone)]
pub struct Options {
    /// Destination root; staging trees, bundles and `install.sh` go here.
    pub destination: PathBuf,
    pub overwrite: Overwrite,
}

impl Options {
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
            overwrite: Overwrite::default(),
        }
    }

    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }
}

/// A file left untouched by the overwrite guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeptFile {
    pub role: Role,
    pub path: String,
}

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct Report {
    /// Bundles in finalize order: master-conf, master-zones, slave-conf.
    pub archives: Vec<Bundle>,
    /// Path of the generated install script.
    pub install_script: PathBuf,
    /// Files preserved because overwrite was off.
    pub kept: Vec<KeptFile>,
    /// Number of TSIG keys generated during the run.
    pub keys_generated: usize,
}

impl Report {
    /// Bundle for a role.
    pub fn archive(&self, role: Role) -> Option<&Bundle> {
        self.archives.iter().find(|b| b.role == role)
    }
}

/// Render and package a deployment.
///
/// # Errors
///
/// Returns the first `RenderError` or `StoreError` encountered.
pub fn run(config: &Configuration, renderer: &Renderer, options: &Options) -> Result<Report> {
    info!(
        destination = %options.destination.display(),
        zones = config.zones().len(),
        slaves = config.slaves().len(),
        "generating deployment"
    );
    Pipeline::new(config, renderer, options).run()
}

struct Pipeline<'a> {
    config: &'a Configuration,
    renderer: &'a Renderer,
    options: &'a Options,
    archives: [Archive; 3],
    kept: Vec<KeptFile>,
    keys_generated: usize,
}

impl<'a> Pipeline<'a> {
    fn new(config: &'a Configuration, renderer: &'a Renderer, options: &'a Options) -> Self {
        let archives = Role::ALL.map(|role| Archive::in_dir(role, &options.destination));

        Self {
            config,
            renderer,
            options,
            archives,
            kept: Vec::new(),
            keys_generated: 0,
        }
    }

    fn run(mut self) -> Result<Report> {
        let config = self.config;
        let paths = config.paths();
        let overwrite = self.options.overwrite;
        let both = [Role::MasterConf, Role::SlaveConf];

        // shared server configuration
        for (template, file) in [
            (Template::NamedConf, constants::NAMED_CONF),
            (Template::NamedConfOptions, constants::NAMED_CONF_OPTIONS),
        ] {
            let text = self.renderer.render(template, Bindings::Paths(paths))?;
            self.route(&both, &paths.config_file(file), &text, Profile::Standard, true)?;
        }

        // master <-> slave transfer key, identical in both archives
        let key_file = paths.config_file(constants::MASTER_SLAVE_KEY_FILE);
        let (text, replace) = self.shared_key(&both, &key_file)?;
        self.route(&both, &key_file, &text, Profile::Secured, replace)?;

        // role-specific zone declarations
        let text = self
            .renderer
            .render(Template::LocalMaster, Bindings::Config(config))?;
        self.route(
            &[Role::MasterConf],
            &paths.config_file(constants::NAMED_CONF_LOCAL),
            &text,
            Profile::Standard,
            true,
        )?;

        let text = self
            .renderer
            .render(Template::LocalSlave, Bindings::Config(config))?;
        self.route(
            &[Role::SlaveConf],
            &paths.config_file(constants::NAMED_CONF_LOCAL),
            &text,
            Profile::Standard,
            true,
        )?;

        // helper scripts
        let text = self
            .renderer
            .render(Template::SecurePermissions, Bindings::Config(config))?;
        self.route(
            &both,
            &paths.config_file(constants::SECURE_PERMISSIONS_SCRIPT),
            &text,
            Profile::Shell,
            true,
        )?;

        let text = self
            .renderer
            .render(Template::EnsureDnssecKeys, Bindings::Config(config))?;
        self.route(
            &[Role::MasterConf],
            &paths.config_file(constants::DNSSEC_KEYS_SCRIPT),
            &text,
            Profile::Shell,
            true,
        )?;

        // per zone: zone file, then one key per dynamic-update grant
        for zone in config.zones() {
            debug!(zone = zone.name(), grants = zone.dynamic_updates().len(), "zone");

            let text = self
                .renderer
                .render(Template::ZoneFile, Bindings::Zone(config, zone))?;
            self.route(
                &[Role::MasterZones],
                &paths.data_file(&zone.file_name()),
                &text,
                Profile::Standard,
                overwrite.zones,
            )?;

            for grant in zone.dynamic_updates() {
                let key_name = grant.key_name(zone.name());
                let text = self.render_key(&key_name)?;
                let file = format!(
                    "{}/{}/{}.key",
                    constants::NSUPDATE_KEY_DIR,
                    zone.name(),
                    key_name
                );
                self.route(
                    &[Role::MasterConf],
                    &paths.config_file(&file),
                    &text,
                    Profile::Secured,
                    overwrite.keys,
                )?;
            }
        }

        // install helper lives outside every archive
        let install_script = self.write_install_script()?;

        let out_dir = self.options.destination.clone();
        let archives = self
            .archives
            .into_iter()
            .map(|archive| archive.finalize(&out_dir))
            .collect::<Result<Vec<_>>>()?;

        info!(
            archives = archives.len(),
            kept = self.kept.len(),
            keys = self.keys_generated,
            "deployment generated"
        );

        Ok(Report {
            archives,
            install_script,
            kept: self.kept,
            keys_generated: self.keys_generated,
        })
    }

    /// Generate a fresh key and render it. The key is dropped (and wiped)
    /// as soon as the text exists.
    fn render_key(&mut self, name: &str) -> Result<String> {
        let key = RandomKey::generate(name);
        self.keys_generated += 1;
        self.renderer.render(Template::Key, Bindings::Key(&key))
    }

    /// Text of the shared key and whether copies must be replaced.
    ///
    /// Without the key toggle an already staged copy is reused (master-conf
    /// first), so an archive missing the file receives the same secret. Copies
    /// that disagree are all rewritten with the reused one.
    fn shared_key(&mut self, roles: &[Role], relpath: &str) -> Result<(String, bool)> {
        if self.options.overwrite.keys {
            return Ok((self.render_key(constants::MASTER_SLAVE_KEY)?, true));
        }

        let staged = roles
            .iter()
            .map(|role| self.archives[role.index()].staged(relpath))
            .collect::<Result<Vec<_>>>()?;

        let Some(existing) = staged.iter().flatten().next().cloned() else {
            return Ok((self.render_key(constants::MASTER_SLAVE_KEY)?, false));
        };

        let diverged = staged.iter().flatten().any(|text| *text != existing);
        if diverged {
            warn!(path = relpath, "shared key differs between archives, keeping master copy");
        } else {
            debug!(path = relpath, "reusing staged shared key");
        }
        Ok((existing, diverged))
    }

    fn route(
        &mut self,
        roles: &[Role],
        relpath: &str,
        content: &str,
        profile: Profile,
        overwrite: bool,
    ) -> Result<()> {
        let mode = self.config.permissions().mode(profile);

        for role in roles {
            let archive = &mut self.archives[role.index()];

            if archive.store(relpath, content, mode, overwrite)? == WriteOutcome::Kept {
                self.kept.push(KeptFile {
                    role: *role,
                    path: relpath.to_string(),
                });
            }
        }

        Ok(())
    }

    fn write_install_script(&self) -> Result<PathBuf> {
        let text = self
            .renderer
            .render(Template::Install, Bindings::Config(self.config))?;

        let root = Filesystem::new(&self.options.destination);
        root.write(constants::INSTALL_SCRIPT, &text, true)?;
        root.set_permissions(
            constants::INSTALL_SCRIPT,
            self.config.permissions().mode(Profile::Shell),
        )?;

        Ok(root.root().join(constants::INSTALL_SCRIPT))
    }
}

/// Staging directory of a role under `destination`.
pub fn staging_dir(destination: &Path, role: Role) -> PathBuf {
    destination.join(role.name())
}
