use async_trait::async_trait;
use home_dns_domain::{Domain, DomainError};

/// A source of records for one DNS domain.
///
/// `produce` is called exactly once at startup. An error means none of the
/// provider's records are loaded and startup stops.
#[async_trait]
pub trait RecordProvider: Send + Sync {
    /// Label used in logs and provenance, e.g. `config` or `unifi`.
    fn name(&self) -> &str;

    async fn produce(&self) -> Result<Domain, DomainError>;
}
