// src/infrastructure/config.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::DEFAULT_ENDPOINT;

/// TOML configuration for ankiload
///
/// Every field has a default so a partial file (or no file at all) works.
/// CLI arguments override whatever is loaded from here.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub anki: AnkiConfig,
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub import: ImportConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct AnkiConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Defaults {
    #[serde(default = "default_deck")]
    pub deck: String,
    #[serde(default = "default_folder")]
    pub folder: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ImportConfig {
    /// Worker threads for concurrent import; 0 means available parallelism.
    #[serde(default)]
    pub jobs: usize,
    #[serde(default)]
    pub sequential: bool,
}

// Default value functions
fn default_endpoint() -> String { DEFAULT_ENDPOINT.to_string() }
fn default_deck() -> String { "Default".to_string() }
fn default_folder() -> String { String::new() }

impl Default for AnkiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            deck: default_deck(),
            folder: default_folder(),
        }
    }
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            jobs: 0,
            sequential: false,
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse TOML config")?;

        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Create default configuration file at path
    pub fn create_default(path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::default();
        config.save(path)?;
        Ok(config)
    }
}
