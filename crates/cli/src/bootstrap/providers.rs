use home_dns_application::ports::RecordProvider;
use home_dns_application::use_cases::BuildZoneUseCase;
use home_dns_domain::{Config, Zone};
use home_dns_infrastructure::providers::{StaticRecordProvider, UnifiProvider};
use std::sync::Arc;
use tracing::{debug, info};

/// Providers in merge order: UniFi inventory first, then each static domain
/// in file order, so static entries override discovered ones.
pub fn build_providers(config: &Config) -> anyhow::Result<Vec<Arc<dyn RecordProvider>>> {
    let mut providers: Vec<Arc<dyn RecordProvider>> = Vec::new();

    match config.enabled_inventory() {
        Some(inventory) => {
            info!(controller = %inventory.hostname, site = %inventory.site, "UniFi inventory enabled");
            providers.push(Arc::new(UnifiProvider::new(inventory)?));
        }
        None => debug!("UniFi inventory not enabled"),
    }

    match config.enabled_static() {
        Some(static_config) => {
            let domains = StaticRecordProvider::from_config(static_config);
            info!(domains = domains.len(), "Static records enabled");
            providers.extend(
                domains
                    .into_iter()
                    .map(|p| Arc::new(p) as Arc<dyn RecordProvider>),
            );
        }
        None => debug!("Static records not enabled"),
    }

    Ok(providers)
}

pub async fn build_zone(config: &Config) -> anyhow::Result<Arc<Zone>> {
    let providers = build_providers(config)?;
    let zone = BuildZoneUseCase::new(providers).execute().await?;
    Ok(Arc::new(zone))
}
