//! Command-Line Interface (CLI) argument parsing.
//!
//! This module defines the command-line arguments for the application using
//! the `clap` crate. These arguments are parsed at startup and then merged
//! with the configuration from the `sendnote.toml` file and environment
//! variables.

use clap::Parser;
use figment::{
    value::{Dict, Map, Value},
    Error, Metadata, Profile, Provider,
};
use std::path::PathBuf;

/// A single-shot notification dispatch demo.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Channel selector (1 = Email, 2 = SMS, 3 = Telegram); skips the prompt.
    #[arg(long, value_name = "N")]
    pub channel: Option<u8>,

    /// Message to deliver; skips the prompt.
    #[arg(long, value_name = "TEXT")]
    pub message: Option<String>,
}

impl Provider for Cli {
    fn metadata(&self) -> Metadata {
        Metadata::named("Command-Line Arguments")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        let mut dict = Dict::new();

        if let Some(channel) = self.channel {
            dict.insert("delivery.channel".into(), Value::from(u64::from(channel)));
        }

        if let Some(message) = &self.message {
            dict.insert("delivery.message".into(), Value::from(message.clone()));
        }

        let mut map = Map::new();
        map.insert(Profile::Default, dict);
        Ok(map)
    }
}
