//! hotel-merger - command-line entry point
//!
//! Fetches every supplier, merges the records per hotel id, filters them by
//! hotel and destination ids, and prints (or saves) the result as JSON.
//! Logs go to stderr so stdout carries nothing but the JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use hotel_common::config::{ConfigResolver, ConfigSource, LoadedConfig, TomlConfig};
use hotel_merger::{
    build_client, default_suppliers, fetch_all, filter_hotels, render_json, write_output,
    Aggregator, IdFilter, RecordMerger,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Command-line arguments for hotel-merger
#[derive(Parser, Debug)]
#[command(name = "hotel-merger")]
#[command(about = "Merge hotel data from multiple suppliers")]
#[command(version)]
struct Args {
    /// Comma-separated hotel ids, or "none" for all hotels
    hotel_ids: String,

    /// Comma-separated destination ids, or "none" for all destinations
    destination_ids: String,

    /// Write the JSON to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Config file (overrides HOTEL_MERGER_CONFIG and the user config file)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Config is resolved before logging exists; report the outcome afterwards
    let resolved = ConfigResolver::new(args.config.clone()).load();
    let level = match &resolved {
        Ok(loaded) => loaded.config.logging.level.clone(),
        Err(_) => "info".to_string(),
    };
    init_tracing(&level, args.verbose);

    info!("Starting hotel-merger {}", build_id());

    let config = resolve_config(resolved)?;

    let client = build_client(&config.suppliers).context("Failed to build HTTP client")?;
    let suppliers = default_suppliers(&config.suppliers);
    let records = fetch_all(&suppliers, &client).await;

    if records.is_empty() {
        eprintln!("No hotel data fetched from suppliers.");
        return Ok(ExitCode::FAILURE);
    }
    info!(records = records.len(), "Fetched raw records");

    let aggregator = Aggregator::new(RecordMerger::with_cutoff(config.merge.cutoff()));
    let merged = aggregator.aggregate(records);

    let hotel_ids = IdFilter::parse(&args.hotel_ids);
    let destination_ids = IdFilter::parse(&args.destination_ids);
    let hotels = filter_hotels(&merged, &hotel_ids, &destination_ids);

    if hotels.is_empty() {
        println!("No hotels matched the provided filters.");
        return Ok(ExitCode::SUCCESS);
    }

    let json = render_json(&hotels).context("Failed to serialize hotels")?;

    match args.output {
        Some(path) => {
            write_output(&path, &json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Data successfully saved to {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(ExitCode::SUCCESS)
}

/// Version plus the identification captured by build.rs
fn build_id() -> String {
    format!(
        "v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    )
}

/// stderr subscriber; `--verbose` wins over RUST_LOG, which wins over config
fn init_tracing(level: &str, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Log where the config came from; unreadable files fall back to defaults
fn resolve_config(resolved: hotel_common::Result<LoadedConfig>) -> Result<TomlConfig> {
    let loaded = match resolved {
        Ok(loaded) => loaded,
        Err(hotel_common::Error::Io(e)) => {
            warn!("Config file unreadable ({}); using built-in defaults", e);
            return Ok(TomlConfig::default());
        }
        Err(e) => return Err(e).context("Invalid configuration"),
    };

    match &loaded.source {
        ConfigSource::CommandLine(path) => info!("Config: {} (--config)", path.display()),
        ConfigSource::Environment(path) => info!("Config: {} (environment)", path.display()),
        ConfigSource::UserConfig(path) => info!("Config: {}", path.display()),
        ConfigSource::Defaults { missing: Some(path) } => {
            warn!("Config file {} not found; using built-in defaults", path.display())
        }
        ConfigSource::Defaults { missing: None } => info!("Config: built-in defaults"),
    }

    Ok(loaded.config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_id_has_every_part() {
        let id = build_id();
        assert!(id.starts_with(&format!("v{} [", env!("CARGO_PKG_VERSION"))));
        assert!(!env!("GIT_HASH").is_empty());
        assert!(!env!("BUILD_TIMESTAMP").is_empty());
        assert!(id.ends_with(&format!("({})", env!("BUILD_PROFILE"))));
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from(["hotel-merger", "iJhz,SjyX", "none", "-o", "out.json", "-v"])
            .unwrap();
        assert_eq!(args.hotel_ids, "iJhz,SjyX");
        assert_eq!(args.destination_ids, "none");
        assert_eq!(args.output, Some(PathBuf::from("out.json")));
        assert!(args.verbose);
        assert!(args.config.is_none());
    }
}
