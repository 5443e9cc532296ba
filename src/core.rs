//! Core service traits for sendnote.
//!
//! This module defines the trait contracts that govern component
//! interactions throughout the application.

use anyhow::Result;

/// Delivers notifications to a destination.
pub trait Channel {
    /// A unique, descriptive name for the channel (e.g., "email", "sms").
    /// Used for logging.
    fn name(&self) -> &str;

    /// Delivers a message through this channel.
    ///
    /// # Arguments
    /// * `message` - The message text, forwarded unchanged
    ///
    /// # Returns
    /// * `Ok(())` if the message was emitted to the channel's sink
    /// * `Err` if writing to the sink failed
    fn deliver(&self, message: &str) -> Result<()>;
}
