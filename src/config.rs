use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::utils::paths::{DEFAULT_DESCRIPTOR, DEFAULT_OUTPUT_DIR, get_config_path};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Generated-resources root used when no output directory is given
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Descriptor used when none is given on the command line
    #[serde(default = "default_descriptor")]
    pub descriptor: PathBuf,

    /// Log filter used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_descriptor() -> PathBuf {
    PathBuf::from(DEFAULT_DESCRIPTOR)
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            descriptor: default_descriptor(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load from `~/.ideaxml/config.toml`, falling back to defaults.
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Load from an explicit path. A missing file yields the defaults.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config: {}", config_path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config: {}", config_path.display()))?;

        Ok(config)
    }
}
