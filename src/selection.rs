//! Maps the user-supplied discriminator to a notification channel.
//!
//! The original design resolved channels out of a service container; here a
//! plain mapping from discriminator to `ChannelKind` is enough.

use crate::channel::ChannelKind;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("invalid channel selection {input:?} (expected 1 = Email, 2 = SMS, or 3 = Telegram)")]
    InvalidSelection { input: String },
}

/// Returns the channel for a discriminator in {1, 2, 3}.
pub fn channel_for(discriminator: u8) -> Result<ChannelKind, SelectionError> {
    match discriminator {
        1 => Ok(ChannelKind::Email),
        2 => Ok(ChannelKind::Sms),
        3 => Ok(ChannelKind::Telegram),
        other => Err(SelectionError::InvalidSelection {
            input: other.to_string(),
        }),
    }
}

/// Parses a raw input line into a channel selection.
///
/// Non-numeric input is not a distinct failure mode; it maps to the same
/// `InvalidSelection` error as an out-of-range number.
pub fn parse_selection(raw: &str) -> Result<ChannelKind, SelectionError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<u8>()
        .map_err(|_| SelectionError::InvalidSelection {
            input: trimmed.to_string(),
        })
        .and_then(channel_for)
}
