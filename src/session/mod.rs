//! Interactive CLI session transport.
//!
//! The driver only ever consumes the string result of [`CliSession::send_command`];
//! it knows nothing about the underlying protocol. The trait is the seam that
//! lets tests drive the normalizer with canned responses.

mod buffer;
mod config;
mod ssh;

pub use buffer::PromptBuffer;
pub use config::{AuthMethod, SessionConfig};
pub use ssh::SshSession;

use std::future::Future;

use crate::error::Result;

/// An interactive command-line session with a device.
pub trait CliSession: Send {
    /// Connect and authenticate, leaving the session at a command prompt.
    fn open(&mut self) -> impl Future<Output = Result<()>> + Send;

    /// Disconnect from the device.
    fn close(&mut self) -> impl Future<Output = Result<()>> + Send;

    /// Send one command and return the full text response, with the command
    /// echo and trailing prompt stripped.
    fn send_command(&mut self, command: &str) -> impl Future<Output = Result<String>> + Send;

    /// Whether the session is currently connected.
    fn is_open(&self) -> bool;
}
