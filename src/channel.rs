//! Notification channel variants and the console-backed implementation.
//!
//! The three delivery methods (Email, SMS, Telegram) differ only in the tag
//! prefixed to the output line, so they collapse into a single `ChannelKind`
//! enum with one formatting function instead of three near-identical types.

use crate::core::Channel;
use anyhow::Result;
use std::io::Write;

/// The available notification delivery methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    Email,
    Sms,
    Telegram,
}

impl ChannelKind {
    /// A short lowercase name, used for logging.
    pub fn name(&self) -> &'static str {
        match self {
            ChannelKind::Email => "email",
            ChannelKind::Sms => "sms",
            ChannelKind::Telegram => "telegram",
        }
    }

    /// The tag that prefixes a delivery line.
    fn tag(&self) -> &'static str {
        match self {
            ChannelKind::Email => "Email",
            ChannelKind::Sms => "SMS",
            ChannelKind::Telegram => "Telegram message",
        }
    }

    /// Formats the delivery line emitted when a message goes out on this
    /// channel. The message is included unchanged.
    pub fn delivery_line(&self, message: &str) -> String {
        format!("{} sent: {}", self.tag(), message)
    }
}

/// A [`Channel`] that "delivers" by printing the tagged line to stdout.
/// This is the only concrete channel; there is no real transport.
pub struct ConsoleChannel {
    kind: ChannelKind,
}

impl ConsoleChannel {
    pub fn new(kind: ChannelKind) -> Self {
        Self { kind }
    }
}

impl Channel for ConsoleChannel {
    fn name(&self) -> &str {
        self.kind.name()
    }

    fn deliver(&self, message: &str) -> Result<()> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{}", self.kind.delivery_line(message))?;
        Ok(())
    }
}
