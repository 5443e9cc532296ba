//! sendnote - notification dispatch CLI.
//!
//! Selects a notification channel, forwards one message through it, and
//! exits. Delivery output goes to stdout; logs go to stderr.

use clap::Parser;
use sendnote::{app, cli::Cli, config::Config};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Load configuration by layering sources: defaults, file, environment, and CLI args.
    let config = Config::load(&cli).unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        // Exit if configuration fails, as it's a critical step.
        std::process::exit(1);
    });

    // Initialize logging. Logs go to stderr so delivery output on stdout
    // stays clean.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("sendnote starting up...");
    info!("-------------------- Configuration --------------------");
    info!("Log Level: {}", config.log_level);
    info!(
        "Channel Override: {}",
        config
            .delivery
            .channel
            .map_or_else(|| "None".to_string(), |c| c.to_string())
    );
    info!(
        "Message Override: {}",
        if config.delivery.message.is_some() {
            "Set"
        } else {
            "None"
        }
    );
    info!("-------------------------------------------------------");

    if let Err(err) = app::run(&config) {
        error!("{err:#}");
        std::process::exit(1);
    }
}
