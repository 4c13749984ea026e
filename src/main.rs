use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mapbridge::{
    sdk::config::MapConfig,
    sdk::maps::{Coordinate, MapProvider, ProviderSelector},
    sdk::util::log::init_logging,
};
use std::sync::Arc;

/// Driving distance and geocoding through Google, Tencent or Baidu maps
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// [Optional] Provider to use instead of MAP_PROVIDER (google, tencent, baidu)
    #[arg(short, long, global = true)]
    provider: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Driving distance in meters between two points
    Distance {
        /// Origin as "lat,lng" (e.g., "39.915,116.404")
        #[arg(long, allow_hyphen_values = true)]
        from: Coordinate,

        /// Destination as "lat,lng"
        #[arg(long, allow_hyphen_values = true)]
        to: Coordinate,
    },
    /// Resolve an address to coordinates and structured components
    Geocode {
        /// Free-form address (e.g., "北京市海淀区上地十街10号")
        address: String,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_logging();

    let cli = Cli::parse();

    let config = MapConfig::from_env().context("Failed to load map configuration")?;
    let selector = ProviderSelector::from_config(&config).context("Failed to build HTTP client")?;

    let provider: Arc<dyn MapProvider> = match &cli.provider {
        Some(name) => selector.select(name)?,
        None => selector.active()?,
    };
    log::info!("Using {} maps", provider.provider());

    match cli.command {
        Command::Distance { from, to } => {
            let meters = provider
                .driving_distance(from, to)
                .with_context(|| format!("Driving distance {} -> {} failed", from, to))?;
            log::info!("Driving distance {} -> {}: {} m", from, to, meters);
            println!("{}", meters);
        }
        Command::Geocode { address } => {
            let results = provider
                .geocode(&address)
                .with_context(|| format!("Geocoding \"{}\" failed", address))?;
            if results.is_empty() {
                log::warn!("No match found for \"{}\"", address);
            }
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
    }

    Ok(())
}
