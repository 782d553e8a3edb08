//! UniFi controller inventory as a record provider.

pub mod client;
pub mod models;
pub mod provider;

pub use client::{InventorySource, UnifiClient};
pub use models::{UnifiDevice, UnifiNetwork, UnifiStation};
pub use provider::{UnifiProvider, UNIFI_PROVIDER};
