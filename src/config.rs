//! Configuration management for sendnote.
//!
//! This module defines the main `Config` struct, responsible for holding all
//! application settings. It uses the `figment` crate to layer configuration
//! from defaults, a `sendnote.toml` file, environment variables, and
//! command-line arguments.

use crate::cli::Cli;
use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// The default config file, consulted when `--config` is not given.
const DEFAULT_CONFIG_FILE: &str = "sendnote.toml";

/// The main configuration struct for the application.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    /// The logging level for the application.
    pub log_level: String,
    /// Optional pre-supplied delivery parameters.
    pub delivery: DeliveryConfig,
}

/// Pre-supplied delivery parameters. Any field left unset is read
/// interactively from stdin at run time.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct DeliveryConfig {
    /// The channel discriminator (1 = Email, 2 = SMS, 3 = Telegram).
    pub channel: Option<u8>,
    /// The message to deliver.
    pub message: Option<String>,
}

impl Config {
    /// Loads the application configuration by layering sources: defaults,
    /// file, environment, and CLI arguments (highest precedence last).
    pub fn load(cli: &Cli) -> Result<Self> {
        let figment = Figment::new().merge(Serialized::defaults(Config::default()));

        let figment = match &cli.config {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!(
                        "Config file not found at specified path: {}",
                        path.display()
                    );
                }
                figment.merge(Toml::file(path))
            }
            None => figment.merge(Toml::file(DEFAULT_CONFIG_FILE)),
        };

        let config: Config = figment
            // Allow overriding with environment variables, e.g., SENDNOTE_LOG_LEVEL=debug.
            // Nested keys use a double underscore: SENDNOTE_DELIVERY__CHANNEL=2.
            .merge(Env::prefixed("SENDNOTE_").split("__"))
            .merge(cli.clone())
            .extract()?;
        Ok(config)
    }
}

// Provide a default implementation for tests and easy setup.
impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            delivery: DeliveryConfig::default(),
        }
    }
}
