use super::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Connection and mapping settings for the UniFi controller inventory.
#[derive(Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryConfig {
    #[serde(default)]
    pub enabled: bool,

    /// Controller base URL, e.g. `https://10.0.1.1`
    #[serde(default)]
    pub hostname: String,

    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,

    #[serde(default = "default_site")]
    pub site: String,

    /// UniFi OS consoles (UDM, UCG) prefix the network API with `/proxy/network`
    #[serde(default)]
    pub unifi_os: bool,

    /// Accept the self-signed certificate most controllers ship with
    #[serde(default)]
    pub insecure: bool,

    /// Domain discovered hosts are published under (default: "home")
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub domain: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ignore_macs: Vec<String>,
}

impl InventoryConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let missing = |field| ConfigError::MissingField {
            section: "unifiConfig",
            field,
        };

        if self.hostname.is_empty() {
            return Err(missing("hostname"));
        }
        if self.username.is_empty() {
            return Err(missing("username"));
        }
        if self.password.is_empty() {
            return Err(missing("password"));
        }
        Ok(())
    }

    /// True when `mac` is in the ignore list (case-insensitive).
    pub fn ignores_mac(&self, mac: &str) -> bool {
        self.ignore_macs.iter().any(|m| m.eq_ignore_ascii_case(mac))
    }

    pub fn add_ignore_macs<I, S>(&mut self, macs: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_macs.extend(macs.into_iter().map(Into::into));
        self
    }
}

impl fmt::Debug for InventoryConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InventoryConfig")
            .field("enabled", &self.enabled)
            .field("hostname", &self.hostname)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("site", &self.site)
            .field("unifi_os", &self.unifi_os)
            .field("insecure", &self.insecure)
            .field("domain", &self.domain)
            .field("ignore_macs", &self.ignore_macs)
            .finish()
    }
}

fn default_site() -> String {
    "default".to_string()
}
