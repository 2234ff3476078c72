//! Command-line arguments and their merge with the config file.

use std::path::PathBuf;

use clap::Parser;
use poprank_ranker::Collation;

use crate::config::Config;

/// poprank - aggregate daily popularity sources into a ranked time series
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Input document (overrides io.input)
    #[arg(short, long, env = "POPRANK_INPUT")]
    pub input: Option<PathBuf>,

    /// Output snapshot path (overrides io.output)
    #[arg(short, long, env = "POPRANK_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Path to config file (default: ./poprank.toml if present)
    #[arg(short, long, env = "POPRANK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,

    /// Number of leaderboard rows to log after the run
    #[arg(long)]
    pub top: Option<usize>,
}

/// Effective run settings: CLI flag > env var > config file > default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub pretty: bool,
    pub collation: Collation,
    pub top: usize,
}

impl Settings {
    pub fn resolve(args: &Args, config: &Config) -> Self {
        Self {
            input: args.input.clone().unwrap_or_else(|| config.io.input.clone()),
            output: args.output.clone().unwrap_or_else(|| config.io.output.clone()),
            pretty: config.io.pretty && !args.compact,
            collation: config.ranking.collation,
            top: args.top.unwrap_or(config.ranking.leaderboard_size),
        }
    }
}
