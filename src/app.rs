//! The main application logic, decoupled from the entry point.
//!
//! One run performs one selection and one notify call: resolve the channel,
//! build the notification service, forward a single message, and return.
//! Selection happens before the message is read, so an invalid selector
//! terminates the run without any delivery output.

use crate::{
    channel::{ChannelKind, ConsoleChannel},
    config::Config,
    dispatcher::NotificationService,
    selection,
};
use anyhow::Result;
use std::io::BufRead;
use tracing::info;

/// Runs one notification dispatch using `config` overrides where present
/// and interactive prompts otherwise.
pub fn run(config: &Config) -> Result<()> {
    let kind = select_channel(config)?;
    info!(channel = kind.name(), "channel selected");

    let service = NotificationService::builder()
        .channel(ConsoleChannel::new(kind))
        .build()?;

    let message = read_message(config)?;
    service.notify(&message)?;

    info!(channel = kind.name(), "notification dispatched");
    Ok(())
}

fn select_channel(config: &Config) -> Result<ChannelKind> {
    let kind = match config.delivery.channel {
        Some(discriminator) => selection::channel_for(discriminator)?,
        None => {
            println!("Choose notification method: 1. Email, 2. SMS, 3. Telegram");
            selection::parse_selection(&read_line()?)?
        }
    };
    Ok(kind)
}

fn read_message(config: &Config) -> Result<String> {
    match &config.delivery.message {
        Some(message) => Ok(message.clone()),
        None => {
            println!("Enter your message:");
            read_line()
        }
    }
}

/// Reads one line from stdin. EOF yields an empty string; an absent message
/// is permitted and forwarded as-is.
fn read_line() -> Result<String> {
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
