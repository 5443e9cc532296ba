//! The notification service: owns one channel and forwards messages to it.

use crate::core::Channel;
use anyhow::Result;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("no notification channel configured")]
    NoChannel,
}

/// Forwards notifications to its single configured [`Channel`].
///
/// The channel is set once at construction and never replaced. `notify`
/// performs exactly one synchronous `deliver` call per invocation, with the
/// message unchanged.
pub struct NotificationService<C: Channel> {
    channel: C,
}

impl<C: Channel> NotificationService<C> {
    pub fn builder() -> NotificationServiceBuilder<C> {
        NotificationServiceBuilder { channel: None }
    }

    /// Sends a message through the held channel.
    pub fn notify(&self, message: &str) -> Result<()> {
        debug!(channel = self.channel.name(), "dispatching notification");
        self.channel.deliver(message)
    }
}

/// Builds a [`NotificationService`]. Construction fails when no channel has
/// been supplied, so a built service always holds one.
pub struct NotificationServiceBuilder<C: Channel> {
    channel: Option<C>,
}

impl<C: Channel> NotificationServiceBuilder<C> {
    pub fn channel(mut self, channel: C) -> Self {
        self.channel = Some(channel);
        self
    }

    pub fn build(self) -> Result<NotificationService<C>, DispatchError> {
        let channel = self.channel.ok_or(DispatchError::NoChannel)?;
        Ok(NotificationService { channel })
    }
}
