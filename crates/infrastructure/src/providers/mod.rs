pub mod static_records;
pub mod unifi;

pub use static_records::{StaticRecordProvider, STATIC_PROVIDER};
pub use unifi::{InventorySource, UnifiClient, UnifiProvider};
