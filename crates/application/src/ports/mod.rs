pub mod record_provider;

pub use record_provider::RecordProvider;
