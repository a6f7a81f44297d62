use config::{Config as ConfigLoader, File};
use serde::Deserialize;
use std::error::Error;

/// File name (without extension) looked up when no path is given.
pub const DEFAULT_CONFIG_NAME: &str = "sched";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub cli: CliConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub prompt: String,
    pub greeting: String,
    pub color: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            prompt: ">> ".to_string(),
            greeting: "Welcome to the course schedule system!".to_string(),
            color: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, Box<dyn Error>> {
        Self::load_from(DEFAULT_CONFIG_NAME)
    }

    /// Load from `path`; a missing file falls back to the defaults.
    pub fn load_from(path: &str) -> Result<Self, Box<dyn Error>> {
        let path = shellexpand::tilde(path);
        let builder =
            ConfigLoader::builder().add_source(File::with_name(path.as_ref()).required(false));
        let config = builder.build()?.try_deserialize()?;
        Ok(config)
    }
}
