//! sendnote - a single-shot notification dispatch demo.
//!
//! This library provides the core functionality for selecting a notification
//! channel (Email, SMS, Telegram) and dispatching one text message through it.
//! Delivery is simulated: each channel prints a tagged line to stdout.

pub mod app;
pub mod channel;
pub mod cli;
pub mod config;
pub mod core;
pub mod dispatcher;
pub mod selection;

// Re-export core types for convenience
pub use channel::{ChannelKind, ConsoleChannel};
pub use crate::core::Channel;
pub use dispatcher::{DispatchError, NotificationService};
pub use selection::SelectionError;
