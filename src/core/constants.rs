//! Constants used throughout bindsmith.
//!
//! Centralizes file names, key parameters, and environment variables.

/// TSIG algorithm for every generated key.
pub const KEY_ALGORITHM: &str = "hmac-sha256";

/// Random bytes per TSIG secret.
pub const KEY_LENGTH: usize = 32;

/// Name of the key shared by the master and all slaves.
pub const MASTER_SLAVE_KEY: &str = "master-slave";

/// Key file for the master/slave key, relative to the config root.
pub const MASTER_SLAVE_KEY_FILE: &str = "auth-master-slave.key";

/// Directory holding dynamic-update keys, relative to the config root.
pub const NSUPDATE_KEY_DIR: &str = "nsupdate-keys";

/// Main server configuration file.
pub const NAMED_CONF: &str = "named.conf";

/// Server options file.
pub const NAMED_CONF_OPTIONS: &str = "named.conf.options";

/// Role-specific zone declarations.
pub const NAMED_CONF_LOCAL: &str = "named.conf.local";

/// Permission fixup helper.
pub const SECURE_PERMISSIONS_SCRIPT: &str = "secure_permissions.sh";

/// DNSSEC key bootstrap helper.
pub const DNSSEC_KEYS_SCRIPT: &str = "ensure_dnssec_keys.sh";

/// Install helper written at the destination root.
pub const INSTALL_SCRIPT: &str = "install.sh";

/// Default destination directory.
pub const DEFAULT_DESTINATION: &str = "build";

/// Environment variable for the log filter.
pub const LOG_ENV: &str = "BINDSMITH_LOG";

/// Environment variable for the configuration file.
pub const CONFIG_ENV: &str = "BINDSMITH_CONFIG";
