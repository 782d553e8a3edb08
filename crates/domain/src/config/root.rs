use super::errors::ConfigError;
use super::inventory::InventoryConfig;
use super::local_records::StaticConfig;
use super::logging::LoggingConfig;
use super::server::{EndpointConfig, EndpointRole};
use crate::endpoint::Endpoint;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings supplied on the command line that take precedence over the file.
#[derive(Debug, Clone, Copy, Default)]
pub struct CliOverrides {
    pub debug: bool,
}

/// Serialization formats understood by `load` and `render`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    PrettyJson,
    Yaml,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(ConfigFormat::Json),
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            "toml" => Some(ConfigFormat::Toml),
            _ => None,
        }
    }
}

/// Main user level config
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,

    #[serde(default)]
    pub listeners: Vec<EndpointConfig>,

    #[serde(default)]
    pub nameservers: Vec<EndpointConfig>,

    #[serde(default, rename = "static", skip_serializing_if = "Option::is_none")]
    pub static_records: Option<StaticConfig>,

    #[serde(default, rename = "unifiConfig", skip_serializing_if = "Option::is_none")]
    pub inventory: Option<InventoryConfig>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Reads and parses `path`, then applies CLI overrides.
    ///
    /// The format follows the file extension; without a known extension JSON,
    /// YAML and TOML are tried in that order.
    pub fn load(path: impl AsRef<Path>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let mut config = match ConfigFormat::from_path(path) {
            Some(format) => Self::parse(&content, format),
            None => Self::parse_any(&content),
        }
        .map_err(|reason| ConfigError::Parse {
            path: path.display().to_string(),
            reason,
        })?;

        if overrides.debug {
            config.logging.debug = true;
        }

        Ok(config)
    }

    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self, String> {
        match format {
            ConfigFormat::Json | ConfigFormat::PrettyJson => {
                serde_json::from_str(content).map_err(|e| e.to_string())
            }
            ConfigFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        }
    }

    fn parse_any(content: &str) -> Result<Self, String> {
        let mut errors = Vec::new();
        for format in [ConfigFormat::Json, ConfigFormat::Yaml, ConfigFormat::Toml] {
            match Self::parse(content, format) {
                Ok(config) => return Ok(config),
                Err(e) => errors.push(format!("{format:?}: {e}")),
            }
        }
        Err(errors.join("; "))
    }

    pub fn render(&self, format: ConfigFormat) -> Result<String, ConfigError> {
        let rendered = match format {
            ConfigFormat::Json => serde_json::to_string(self).map_err(|e| e.to_string()),
            ConfigFormat::PrettyJson => {
                serde_json::to_string_pretty(self).map_err(|e| e.to_string())
            }
            ConfigFormat::Yaml => serde_yaml::to_string(self).map_err(|e| e.to_string()),
            ConfigFormat::Toml => toml::to_string_pretty(self).map_err(|e| e.to_string()),
        };
        rendered.map_err(ConfigError::Serialize)
    }

    /// Checks everything that must hold before the server may start.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.listen_endpoints()?;
        self.upstream_endpoints()?;

        if let Some(inventory) = self.inventory.as_ref().filter(|i| i.enabled) {
            inventory.validate()?;
        }

        Ok(())
    }

    /// Normalized listeners; a single UDP listener on `0.0.0.0:53` when none are set.
    pub fn listen_endpoints(&self) -> Result<Vec<Endpoint>, ConfigError> {
        if self.listeners.is_empty() {
            return Ok(vec![EndpointConfig::default().normalize(EndpointRole::Listener)?]);
        }
        self.listeners
            .iter()
            .map(|l| l.normalize(EndpointRole::Listener))
            .collect()
    }

    /// Normalized upstream nameservers, in configured order.
    pub fn upstream_endpoints(&self) -> Result<Vec<Endpoint>, ConfigError> {
        self.nameservers
            .iter()
            .map(|n| n.normalize(EndpointRole::Nameserver))
            .collect()
    }

    pub fn enabled_static(&self) -> Option<&StaticConfig> {
        self.static_records.as_ref().filter(|s| s.enabled)
    }

    pub fn enabled_inventory(&self) -> Option<&InventoryConfig> {
        self.inventory.as_ref().filter(|i| i.enabled)
    }

    pub fn add_nameservers(&mut self, nameservers: impl IntoIterator<Item = EndpointConfig>) -> &mut Self {
        self.nameservers.extend(nameservers);
        self
    }

    pub fn add_listeners(&mut self, listeners: impl IntoIterator<Item = EndpointConfig>) -> &mut Self {
        self.listeners.extend(listeners);
        self
    }
}
