use super::client::{InventorySource, UnifiClient};
use async_trait::async_trait;
use home_dns_application::ports::RecordProvider;
use home_dns_domain::config::{ARecordEntry, InventoryConfig, DEFAULT_DOMAIN};
use home_dns_domain::dns_record::reverse_name;
use home_dns_domain::{ConfigError, Domain, DomainBuilder, DomainError, SourceTag};
use std::sync::Arc;
use tracing::{debug, info};

/// Provider label for records discovered on the UniFi controller.
pub const UNIFI_PROVIDER: &str = "unifi";

/// Network that every controller has; it never gets an interface record.
const DEFAULT_NETWORK: &str = "default";

/// Publishes clients, router interfaces and adopted devices as A records.
///
/// Entries that cannot become a valid record are skipped with a `debug!`
/// line; only API failures make `produce` fail.
pub struct UnifiProvider {
    source: Arc<dyn InventorySource>,
    domain: String,
    config: InventoryConfig,
}

impl UnifiProvider {
    pub fn new(config: &InventoryConfig) -> Result<Self, ConfigError> {
        let client = UnifiClient::new(config)?;
        Self::with_source(config, Arc::new(client))
    }

    pub fn with_source(
        config: &InventoryConfig,
        source: Arc<dyn InventorySource>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let domain = if config.domain.is_empty() {
            DEFAULT_DOMAIN.to_string()
        } else {
            config.domain.clone()
        };

        Ok(Self {
            source,
            domain,
            config: config.clone(),
        })
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }
}

fn reversible(ip: &str) -> bool {
    reverse_name(ip).is_ok()
}

#[async_trait]
impl RecordProvider for UnifiProvider {
    fn name(&self) -> &str {
        UNIFI_PROVIDER
    }

    async fn produce(&self) -> Result<Domain, DomainError> {
        let clients = self.source.clients().await?;
        let networks = self.source.networks().await?;
        let devices = self.source.devices().await?;

        let mut builder = DomainBuilder::new(self.domain.clone(), UNIFI_PROVIDER);
        let mut published = 0usize;

        for client in &clients {
            let name = client.display_name();
            if name.is_empty() {
                debug!(mac = %client.mac, ip = %client.ip, "Client has no name");
                continue;
            }
            if client.ip.is_empty() {
                debug!(client = %name, "Client has no IP");
                continue;
            }
            if self.config.ignores_mac(&client.mac) {
                debug!(client = %name, mac = %client.mac, "Ignoring client by MAC");
                continue;
            }
            if !reversible(&client.ip) {
                debug!(client = %name, ip = %client.ip, "Client has an invalid IP");
                continue;
            }

            builder.a_record(ARecordEntry::new(name, client.ip.as_str()), SourceTag::Client);
            published += 1;
        }

        for network in &networks {
            let name = network.name.to_lowercase();
            let ip = network.gateway_ip();

            if name.is_empty() {
                debug!("Interface is missing its name");
                continue;
            }
            if name == DEFAULT_NETWORK {
                debug!("Skipping default interface");
                continue;
            }
            if ip.is_empty() {
                debug!(interface = %network.name, "Interface is missing its IP");
                continue;
            }
            if !reversible(ip) {
                debug!(interface = %name, %ip, "Interface has an invalid IP");
                continue;
            }

            let hostname = format!("inf-{}-{}", name, ip.replace('.', "-"));
            builder.a_record(ARecordEntry::new(hostname, ip), SourceTag::Interface);
            published += 1;
        }

        for device in &devices {
            if device.name.is_empty() {
                debug!(mac = %device.mac, "Device is missing its name");
                continue;
            }
            if device.ip.is_empty() {
                debug!(device = %device.name, "Device is missing its IP");
                continue;
            }
            if self.config.ignores_mac(&device.mac) {
                debug!(device = %device.name, mac = %device.mac, "Ignoring device by MAC");
                continue;
            }
            if !reversible(&device.ip) {
                debug!(device = %device.name, ip = %device.ip, "Device has an invalid IP");
                continue;
            }

            builder.a_record(
                ARecordEntry::new(device.name.as_str(), device.ip.as_str()),
                SourceTag::Device,
            );
            published += 1;
        }

        info!(
            domain = %self.domain,
            clients = clients.len(),
            networks = networks.len(),
            devices = devices.len(),
            published,
            "UniFi inventory collected"
        );

        builder.build()
    }
}
