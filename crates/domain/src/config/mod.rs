//! Configuration module for home-dns
//!
//! - `root`: Main configuration, loading and CLI overrides
//! - `server`: Listener and nameserver endpoints
//! - `local_records`: Statically configured domains and records
//! - `inventory`: UniFi controller inventory
//! - `logging`: Logging settings
//! - `example`: Sample configuration
//! - `errors`: Configuration errors

pub mod errors;
pub mod example;
pub mod inventory;
pub mod local_records;
pub mod logging;
pub mod root;
pub mod server;

pub use errors::ConfigError;
pub use example::DEFAULT_DOMAIN;
pub use inventory::InventoryConfig;
pub use local_records::{ARecordEntry, CnameEntry, PtrEntry, StaticConfig, StaticDomain};
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config, ConfigFormat};
pub use server::{EndpointConfig, EndpointRole};
