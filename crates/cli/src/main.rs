//! # home-dns
//!
//! Authoritative answers for the home network, forwarding for everything else.

mod bootstrap;
mod server;

use clap::{Parser, Subcommand, ValueEnum};
use home_dns_domain::config::ConfigFormat;
use home_dns_domain::{CliOverrides, Config};
use std::path::PathBuf;

const DEBUG_ENV_VAR: &str = "DEBUG";

#[derive(Parser)]
#[command(name = "home-dns")]
#[command(version)]
#[command(about = "DNS server for the home network: local records from config and UniFi, forwarding for the rest")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the zone and serve DNS until interrupted
    Run {
        /// Configuration file (JSON, YAML or TOML)
        #[arg(short = 'c', long, env = "CONFIG")]
        config: Option<PathBuf>,

        /// Per-query diagnostics; also enabled by DEBUG=enabled
        #[arg(short = 'd', long)]
        debug: bool,
    },

    /// Print an example configuration
    GenerateConfig {
        #[arg(value_enum)]
        format: OutputFormat,
    },

    /// Print the version
    Version,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    PrettyJson,
    Yaml,
    Toml,
}

impl From<OutputFormat> for ConfigFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => ConfigFormat::Json,
            OutputFormat::PrettyJson => ConfigFormat::PrettyJson,
            OutputFormat::Yaml => ConfigFormat::Yaml,
            OutputFormat::Toml => ConfigFormat::Toml,
        }
    }
}

fn debug_from_env() -> bool {
    std::env::var(DEBUG_ENV_VAR).is_ok_and(|v| v.eq_ignore_ascii_case("enabled"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Run { config, debug } => {
            let path = config.ok_or_else(|| {
                anyhow::anyhow!("a configuration file is required; pass --config or set CONFIG")
            })?;
            let overrides = CliOverrides {
                debug: debug || debug_from_env(),
            };
            run(path, overrides).await
        }
        Command::GenerateConfig { format } => {
            println!("{}", Config::example().render(format.into())?);
            Ok(())
        }
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

async fn run(path: PathBuf, overrides: CliOverrides) -> anyhow::Result<()> {
    let config = bootstrap::load_config(&path, overrides)?;
    bootstrap::init_logging(&config);

    tracing::info!(config_file = %path.display(), "Starting home-dns");

    let zone = bootstrap::build_zone(&config).await?;
    server::start_dns_server(&config, zone).await
}
