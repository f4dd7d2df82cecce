//! Builder for constructing SMBStaX drivers.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::Result;
use crate::extract::TextFsmExtractor;
use crate::session::{AuthMethod, SessionConfig, SshSession};

use super::smbstax::SmbstaxDriver;

/// Builder producing a driver wired to SSH transport and TextFSM extraction.
///
/// # Example
///
/// ```rust,no_run
/// use smbstax::{DriverBuilder, NetworkDriver};
///
/// # async fn example() -> Result<(), smbstax::Error> {
/// let mut driver = DriverBuilder::new("192.168.1.1")
///     .username("admin")
///     .password("secret")
///     .build()?;
///
/// driver.open().await?;
/// let arp = driver.get_arp_table().await?;
/// driver.close().await?;
/// # Ok(())
/// # }
/// ```
pub struct DriverBuilder {
    config: SessionConfig,
}

impl DriverBuilder {
    /// Create a builder for the switch at `host`.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            config: SessionConfig::new(host),
        }
    }

    /// Set the SSH port (default: 22).
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Set the username for authentication.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.config.username = username.into();
        self
    }

    /// Set password authentication.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.config.auth = AuthMethod::Password(password.into().into());
        self
    }

    /// Set private key authentication.
    pub fn private_key(mut self, key_path: impl Into<PathBuf>) -> Self {
        self.config.auth = AuthMethod::PrivateKey {
            path: key_path.into(),
            passphrase: None,
        };
        self
    }

    /// Set the connection and per-command timeout (default: 60s).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Override the prompt pattern matched at the end of command output.
    pub fn prompt_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.config.prompt_pattern = pattern.into();
        self
    }

    /// Build the driver. Does not connect; call `open()` on the result.
    pub fn build(self) -> Result<SmbstaxDriver<SshSession, TextFsmExtractor>> {
        let host = self.config.host.clone();
        let port = self.config.port;
        let session = SshSession::new(self.config)?;
        Ok(SmbstaxDriver::new(
            session,
            TextFsmExtractor::new(),
            host,
            port,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::NetworkDriver;

    #[test]
    fn test_build_with_password() {
        let driver = DriverBuilder::new("sw1.lab")
            .username("admin")
            .password("secret")
            .port(2222)
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap();
        assert!(!driver.is_alive());
    }

    #[test]
    fn test_build_rejects_bad_prompt_pattern() {
        let result = DriverBuilder::new("sw1.lab").prompt_pattern("[").build();
        assert!(result.is_err());
    }
}
