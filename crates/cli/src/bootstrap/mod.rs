pub mod config;
pub mod logging;
pub mod providers;

pub use config::load_config;
pub use logging::init_logging;
pub use providers::build_zone;
