//! poprank — Daily popularity ranking aggregator.
//! Entry point for the command-line binary.

mod cli;
mod config;
mod io;

use anyhow::Context;
use clap::Parser;
use poprank_ranker::{aggregate, latest_leaderboard};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::{Config, ConfigOrigin};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    let (config, origin) = Config::load(args.config.as_deref())?;

    // Initialise structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .init();

    info!("poprank starting up...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    match &origin {
        ConfigOrigin::File(path) => info!("Configuration loaded from {}", path.display()),
        ConfigOrigin::Defaults(path) => {
            warn!("No config at {}; using built-in defaults.", path.display());
            warn!("Copy poprank.example.toml to poprank.toml to customise.");
        }
    }

    let settings = cli::Settings::resolve(&args, &config);

    let doc = io::load_document(&settings.input)
        .await
        .with_context(|| format!("loading input document {}", settings.input.display()))?;
    info!(
        "Input loaded: {} day records, {} configured weights",
        doc.days().len(),
        doc.source_weights().len()
    );

    let collator = settings.collation.collator();
    let output = aggregate(&doc, collator.as_ref(), io::timestamp_now());

    io::write_snapshot(&settings.output, &output, settings.pretty)
        .await
        .with_context(|| format!("writing snapshot {}", settings.output.display()))?;
    info!(
        "Snapshot written to {} ({} days, {} people)",
        settings.output.display(),
        output.days.len(),
        output.people.len()
    );

    if let Some(latest) = output.latest_day() {
        info!("Leaderboard for {latest}:");
        for row in latest_leaderboard(&output, collator.as_ref(), settings.top) {
            info!("  {row}");
        }
    }

    Ok(())
}
