//! Session connection configuration.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;

/// Connection settings for a device session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Target host (hostname or IP address).
    pub host: String,

    /// SSH port (default: 22).
    pub port: u16,

    /// Username for authentication.
    pub username: String,

    /// Authentication method.
    pub auth: AuthMethod,

    /// Timeout for connecting and for each command/prompt read.
    pub timeout: Duration,

    /// Prompt regex matched against the tail of the accumulated output.
    pub prompt_pattern: String,

    /// How many bytes from the end of the buffer to search for the prompt.
    pub search_depth: usize,

    /// Terminal width for the PTY.
    pub terminal_width: u32,

    /// Terminal height for the PTY.
    pub terminal_height: u32,
}

impl SessionConfig {
    /// Configuration with defaults for an SMBStaX switch at `host`.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: 22,
            username: String::new(),
            auth: AuthMethod::None,
            timeout: Duration::from_secs(60),
            // SMBStaX presents a Cisco-style "hostname#" / "hostname>" prompt.
            prompt_pattern: r"[#>]\s*$".to_string(),
            search_depth: 1000,
            terminal_width: 511,
            terminal_height: 24,
        }
    }

    /// Socket address string for connection.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Authentication method for the session.
#[derive(Debug, Clone)]
pub enum AuthMethod {
    /// No authentication (lab devices only).
    None,

    /// Password authentication.
    Password(SecretString),

    /// Private key authentication.
    PrivateKey {
        /// Path to the private key file.
        path: PathBuf,
        /// Optional passphrase for encrypted keys.
        passphrase: Option<SecretString>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::new("sw1.lab");
        assert_eq!(config.port, 22);
        assert_eq!(config.socket_addr(), "sw1.lab:22");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert!(matches!(config.auth, AuthMethod::None));
    }

    #[test]
    fn test_password_is_redacted_in_debug() {
        let config = SessionConfig {
            auth: AuthMethod::Password(String::from("hunter2").into()),
            ..SessionConfig::new("sw1.lab")
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("hunter2"));
    }
}
