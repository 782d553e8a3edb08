use home_dns_domain::{CliOverrides, Config};
use std::path::Path;

/// Reads and validates the configuration before anything else starts.
///
/// Runs ahead of logging setup, so problems surface only through the error.
pub fn load_config(path: &Path, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}
