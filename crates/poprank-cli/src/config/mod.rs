//! Configuration loading for poprank.
//! Reads poprank.toml from the path given by --config / POPRANK_CONFIG, or the current directory.

use std::path::{Path, PathBuf};

use poprank_common::PoprankError;
use poprank_ranker::Collation;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE: &str = "poprank.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub io: IoConfig,
    #[serde(default)]
    pub ranking: RankingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IoConfig {
    #[serde(default = "default_input")]
    pub input: PathBuf,
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default = "bool_true")]
    pub pretty: bool,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            pretty: bool_true(),
        }
    }
}

fn default_input()  -> PathBuf { PathBuf::from("data/popularity.json") }
fn default_output() -> PathBuf { PathBuf::from("public/data/aggregate.json") }
fn bool_true()      -> bool    { true }

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingConfig {
    #[serde(default)]
    pub collation: Collation,
    #[serde(default = "default_leaderboard_size")]
    pub leaderboard_size: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            collation: Collation::default(),
            leaderboard_size: default_leaderboard_size(),
        }
    }
}

fn default_leaderboard_size() -> usize { 5 }

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: default_log_filter() }
    }
}

fn default_log_filter() -> String { "poprank=info,warn".to_string() }

/// Where the loaded configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    File(PathBuf),
    /// No file at the default location; built-in defaults are in use.
    Defaults(PathBuf),
}


impl Config {
    /// Load configuration.
    ///
    /// An explicitly requested file must exist. When no path is given,
    /// `./poprank.toml` is used if present, otherwise the defaults.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<(Self, ConfigOrigin)> {
        let Some(path) = explicit else {
            let path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !path.exists() {
                return Ok((Self::default(), ConfigOrigin::Defaults(path)));
            }
            let config = Self::from_file(&path)?;
            return Ok((config, ConfigOrigin::File(path)));
        };

        if !path.exists() {
            anyhow::bail!(
                "Config file not found: {}\n\
                 Copy poprank.example.toml to poprank.toml and edit it.",
                path.display()
            );
        }
        let config = Self::from_file(path)?;
        Ok((config, ConfigOrigin::File(path.to_path_buf())))
    }

    pub fn from_file(path: &Path) -> poprank_common::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PoprankError::io(path, e))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> poprank_common::Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> poprank_common::Result<()> {
        if self.io.input.as_os_str().is_empty() {
            return Err(PoprankError::Config("io.input must not be empty".to_string()));
        }
        if self.io.output.as_os_str().is_empty() {
            return Err(PoprankError::Config("io.output must not be empty".to_string()));
        }
        Ok(())
    }
}
