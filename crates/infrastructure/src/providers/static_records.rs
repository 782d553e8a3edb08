use async_trait::async_trait;
use home_dns_application::ports::RecordProvider;
use home_dns_domain::config::{StaticConfig, StaticDomain};
use home_dns_domain::{Domain, DomainBuilder, DomainError, SourceTag};
use tracing::debug;

/// Provider label for records listed in the config file.
pub const STATIC_PROVIDER: &str = "config";

/// Serves one statically configured domain.
pub struct StaticRecordProvider {
    domain: StaticDomain,
}

impl StaticRecordProvider {
    pub fn new(domain: StaticDomain) -> Self {
        Self { domain }
    }

    /// One provider per configured domain, in file order.
    pub fn from_config(config: &StaticConfig) -> Vec<Self> {
        config.domains.iter().cloned().map(Self::new).collect()
    }
}

#[async_trait]
impl RecordProvider for StaticRecordProvider {
    fn name(&self) -> &str {
        STATIC_PROVIDER
    }

    async fn produce(&self) -> Result<Domain, DomainError> {
        let mut builder = DomainBuilder::new(self.domain.domain.clone(), STATIC_PROVIDER);

        for entry in &self.domain.a_records {
            builder.a_record(entry.clone(), SourceTag::Explicit);
        }
        for entry in &self.domain.cname_records {
            builder.cname_record(entry.clone());
        }
        for entry in &self.domain.ptr_records {
            builder.ptr_record(entry.clone());
        }

        debug!(
            domain = builder.name(),
            a = self.domain.a_records.len(),
            cname = self.domain.cname_records.len(),
            ptr = self.domain.ptr_records.len(),
            "Building static domain"
        );

        builder.build()
    }
}
