//! home-dns domain layer
pub mod config;
pub mod dns_record;
pub mod endpoint;
pub mod errors;
pub mod zone;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_record::{ARecord, CnameRecord, PtrRecord, RecordSource, SourceTag};
pub use endpoint::{Endpoint, Protocol, DEFAULT_DNS_PORT};
pub use errors::DomainError;
pub use zone::{AuthoritativeZones, Domain, DomainBuilder, ResolutionTables, Zone, ZoneBuilder};
