use crate::ports::RecordProvider;
use home_dns_domain::{DomainError, Zone, ZoneBuilder};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Use case: ask every provider for its records, in order, and merge them
/// into the zone served for the lifetime of the process.
pub struct BuildZoneUseCase {
    providers: Vec<Arc<dyn RecordProvider>>,
}

impl BuildZoneUseCase {
    pub fn new(providers: Vec<Arc<dyn RecordProvider>>) -> Self {
        Self { providers }
    }

    pub async fn execute(&self) -> Result<Zone, DomainError> {
        let mut builder = ZoneBuilder::new();

        for provider in &self.providers {
            debug!(provider = provider.name(), "Producing records");

            let domain = provider.produce().await.map_err(|e| {
                error!(provider = provider.name(), error = %e, "Provider failed");
                e
            })?;

            info!(
                provider = provider.name(),
                domain = domain.name(),
                a = domain.a_records().len(),
                cname = domain.cname_records().len(),
                ptr = domain.ptr_records().len(),
                "Records loaded"
            );

            builder.merge(domain);
        }

        let zone = builder.finish();
        info!(
            domains = zone.domains().len(),
            a = zone.tables().a_len(),
            cname = zone.tables().cname_len(),
            ptr = zone.tables().ptr_len(),
            "Zone built"
        );

        Ok(zone)
    }
}
