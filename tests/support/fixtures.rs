//! Test fixtures and constants.

/// One master, two slaves, one static zone.
pub const SAMPLE_TOML: &str = r#"
[path]
config = "etc/bind"
data = "var/cache/bind"

[master]
fqdn = "ns1.example.com"
ipv4 = "192.0.2.1"
ipv6 = "2001:db8::1"

[slaves."ns2.example.com"]
ipv4 = "198.51.100.1"
ipv6 = "2001:db8:0:2::1"

[slaves."ns3.example.com"]
ipv4 = "203.0.113.1"
ipv6 = "2001:db8:0:3::1"

[zones."example.com"]

[parameters]
email = "hostmaster@example.com"
ttl = "5m"
refresh = "4h"
retry = "1h"
expire = "1w"
minimum = "3h"

[secured_permissions]
root-user = "root"
bind-user = "bind"
bind-group = "bind"
secured_flags = "640"
standard_flags = "644"
shell_flags = "755"
"#;

/// [`SAMPLE_TOML`] as JSON.
pub const SAMPLE_JSON: &str = r#"{
  "path": {"config": "etc/bind", "data": "var/cache/bind"},
  "master": {"fqdn": "ns1.example.com", "ipv4": "192.0.2.1", "ipv6": "2001:db8::1"},
  "slaves": {
    "ns2.example.com": {"ipv4": "198.51.100.1", "ipv6": "2001:db8:0:2::1"},
    "ns3.example.com": {"ipv4": "203.0.113.1", "ipv6": "2001:db8:0:3::1"}
  },
  "zones": {"example.com": {}},
  "parameters": {
    "email": "hostmaster@example.com",
    "ttl": "5m", "refresh": "4h", "retry": "1h", "expire": "1w", "minimum": "3h"
  },
  "secured_permissions": {
    "root-user": "root", "bind-user": "bind", "bind-group": "bind",
    "secured_flags": "640", "standard_flags": "644", "shell_flags": "755"
  }
}"#;

/// Dynamic-update table granting `laptop` A and AAAA records in example.com.
pub const LAPTOP_GRANT: &str = r#"
[zones."example.com".dynamic-updates]
laptop = "A AAAA"
"#;

/// [`SAMPLE_TOML`] with the laptop grant on example.com.
pub fn sample_with_laptop() -> String {
    SAMPLE_TOML.replace("[zones.\"example.com\"]\n", LAPTOP_GRANT)
}

/// Master-conf path of the laptop's nsupdate key.
pub const LAPTOP_KEY: &str = "etc/bind/nsupdate-keys/example.com/laptop.example.com.key";

/// Path of the master/slave key inside the conf archives.
pub const MASTER_SLAVE_KEY: &str = "etc/bind/auth-master-slave.key";

/// Path of the example.com zone file inside master-zones.
pub const EXAMPLE_ZONE: &str = "var/cache/bind/db.example.com";
