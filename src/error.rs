//! Error types for the SMBStaX driver.

use std::io;
use std::time::Duration;

use thiserror::Error;

/// Main error type for driver operations.
#[derive(Error, Debug)]
pub enum Error {
    /// SSH transport-level errors
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Driver-level errors
    #[error("Driver error: {0}")]
    Driver(#[from] DriverError),

    /// Response parsing errors
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Extraction-engine errors
    #[error("Extract error: {0}")]
    Extract(#[from] ExtractError),
}

impl Error {
    /// Typed "not supported on this device family" error for plugin ABI
    /// capabilities the driver does not implement.
    pub fn unsupported(capability: &'static str) -> Self {
        DriverError::Unsupported { capability }.into()
    }
}

/// Transport layer errors (SSH connection, authentication, prompt reads).
#[derive(Error, Debug)]
pub enum TransportError {
    /// SSH handshake or protocol error
    #[error("SSH error: {0}")]
    Ssh(#[from] russh::Error),

    /// Authentication failed
    #[error("Authentication failed for user '{user}'")]
    AuthenticationFailed { user: String },

    /// SSH key error
    #[error("SSH key error: {0}")]
    Key(String),

    /// Operation timed out
    #[error("Operation timed out after {0:?}")]
    Timeout(Duration),

    /// Prompt pattern was not seen within the timeout
    #[error("Prompt not found within {0:?}")]
    PatternTimeout(Duration),

    /// Channel closed unexpectedly
    #[error("Channel closed")]
    ChannelClosed,

    /// Invalid prompt regex pattern
    #[error("Invalid prompt pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Driver layer errors (session lifecycle, command execution, capability gaps).
#[derive(Error, Debug)]
pub enum DriverError {
    /// Any transport failure during open() collapses into this, naming the
    /// switch that could not be reached. No retry is attempted.
    #[error("Cannot connect to switch {host}:{port}")]
    ConnectionFailed {
        host: String,
        port: u16,
        #[source]
        source: Box<Error>,
    },

    /// Driver not connected
    #[error("Driver not connected - call open() first")]
    NotConnected,

    /// Driver already connected
    #[error("Driver already connected")]
    AlreadyConnected,

    /// The device rejected a command as invalid or incomplete
    #[error("Unable to execute command '{command}' ({indicator})")]
    CommandRejected { command: String, indicator: String },

    /// Capability exists on the plugin ABI but is not implemented for this
    /// device family.
    #[error("Capability '{capability}' is not supported on SMBStaX")]
    Unsupported { capability: &'static str },
}

/// Response parsing errors.
///
/// Out-of-shape lines are skipped silently by contract; only malformed MAC
/// address tokens fail loudly.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Token is not a valid 6-byte hex MAC address
    #[error("Invalid MAC address: '{token}'")]
    InvalidMac { token: String },
}

/// Extraction-engine errors (template compile or parse failures).
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Template failed to compile or apply
    #[error("Template '{name}' failed: {message}")]
    Template { name: &'static str, message: String },
}

/// Result type alias using the driver's Error.
pub type Result<T> = std::result::Result<T, Error>;
