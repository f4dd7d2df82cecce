//! SSH session implementation using russh.

use std::sync::Arc;
use std::time::Instant;

use log::{debug, trace};
use regex::bytes::Regex;
use russh::client::{self, Handle, Msg};
use russh::keys::{PrivateKeyWithHashAlg, PublicKey, load_secret_key};
use russh::{Channel, ChannelMsg};
use secrecy::ExposeSecret;

use crate::error::{DriverError, Result, TransportError};

use super::buffer::PromptBuffer;
use super::config::{AuthMethod, SessionConfig};
use super::CliSession;

/// Interactive SSH session with a PTY and shell, scraping responses up to
/// the device prompt.
pub struct SshSession {
    config: SessionConfig,
    prompt: Regex,
    session: Option<Handle<SshHandler>>,
    channel: Option<Channel<Msg>>,
}

impl SshSession {
    /// Create a session for the given configuration. Does not connect.
    pub fn new(config: SessionConfig) -> Result<Self> {
        let prompt =
            Regex::new(&config.prompt_pattern).map_err(TransportError::InvalidPattern)?;
        Ok(Self {
            config,
            prompt,
            session: None,
            channel: None,
        })
    }

    /// Authenticate with the server.
    async fn authenticate(session: &mut Handle<SshHandler>, config: &SessionConfig) -> Result<()> {
        let success = match &config.auth {
            AuthMethod::None => session
                .authenticate_none(&config.username)
                .await
                .map_err(TransportError::Ssh)?
                .success(),
            AuthMethod::Password(password) => session
                .authenticate_password(&config.username, password.expose_secret())
                .await
                .map_err(TransportError::Ssh)?
                .success(),
            AuthMethod::PrivateKey { path, passphrase } => {
                let key = load_secret_key(path, passphrase.as_ref().map(|p| p.expose_secret()))
                    .map_err(|e| TransportError::Key(e.to_string()))?;

                let hash_alg = session
                    .best_supported_rsa_hash()
                    .await
                    .map_err(TransportError::Ssh)?
                    .flatten();

                session
                    .authenticate_publickey(
                        &config.username,
                        PrivateKeyWithHashAlg::new(Arc::new(key), hash_alg),
                    )
                    .await
                    .map_err(TransportError::Ssh)?
                    .success()
            }
        };

        if !success {
            return Err(TransportError::AuthenticationFailed {
                user: config.username.clone(),
            }
            .into());
        }

        Ok(())
    }

    /// Accumulate channel output until the prompt appears in the tail.
    async fn read_until_prompt(&mut self) -> Result<String> {
        let channel = self.channel.as_mut().ok_or(DriverError::NotConnected)?;

        let mut buffer = PromptBuffer::new(self.config.search_depth);
        let deadline = Instant::now() + self.config.timeout;

        loop {
            let remaining = deadline
                .checked_duration_since(Instant::now())
                .ok_or(TransportError::PatternTimeout(self.config.timeout))?;

            match tokio::time::timeout(remaining, channel.wait()).await {
                Err(_) => {
                    return Err(TransportError::PatternTimeout(self.config.timeout).into());
                }
                Ok(None) => return Err(TransportError::ChannelClosed.into()),
                Ok(Some(ChannelMsg::Data { ref data })) => {
                    buffer.extend(data);
                    if buffer.tail_matches(&self.prompt) {
                        break;
                    }
                }
                Ok(Some(msg)) => trace!("ignoring channel message: {msg:?}"),
            }
        }

        trace!("prompt matched after {} bytes", buffer.len());
        Ok(String::from_utf8_lossy(&buffer.take()).to_string())
    }

    /// Strip the command echo and the trailing prompt line from raw output.
    fn normalize(raw: &str, command: &str) -> String {
        let output = raw
            .strip_prefix(command)
            .unwrap_or(raw)
            .trim_start_matches(['\r', '\n']);

        match output.rfind('\n') {
            Some(pos) => output[..pos].to_string(),
            None => String::new(),
        }
    }
}

impl CliSession for SshSession {
    async fn open(&mut self) -> Result<()> {
        if self.session.is_some() {
            return Err(DriverError::AlreadyConnected.into());
        }

        debug!("connecting to {}", self.config.socket_addr());

        let ssh_config = Arc::new(client::Config {
            inactivity_timeout: Some(self.config.timeout),
            ..Default::default()
        });
        let handler = SshHandler {
            host: self.config.host.clone(),
            port: self.config.port,
        };

        let mut session = tokio::time::timeout(
            self.config.timeout,
            client::connect(
                ssh_config,
                (self.config.host.as_str(), self.config.port),
                handler,
            ),
        )
        .await
        .map_err(|_| TransportError::Timeout(self.config.timeout))?
        .map_err(TransportError::Ssh)?;

        Self::authenticate(&mut session, &self.config).await?;

        let channel = session
            .channel_open_session()
            .await
            .map_err(TransportError::Ssh)?;
        channel
            .request_pty(
                true,
                "xterm",
                self.config.terminal_width,
                self.config.terminal_height,
                0,
                0,
                &[],
            )
            .await
            .map_err(TransportError::Ssh)?;
        channel
            .request_shell(true)
            .await
            .map_err(TransportError::Ssh)?;

        self.session = Some(session);
        self.channel = Some(channel);

        // Swallow the banner and the first prompt.
        let banner = self.read_until_prompt().await?;
        trace!("login banner: {banner:?}");

        debug!("connected to {}", self.config.socket_addr());
        Ok(())
    }

    async fn close(&mut self) -> Result<()> {
        self.channel = None;
        if let Some(session) = self.session.take() {
            session
                .disconnect(russh::Disconnect::ByApplication, "", "en")
                .await
                .map_err(TransportError::Ssh)?;
            debug!("disconnected from {}", self.config.socket_addr());
        }
        Ok(())
    }

    async fn send_command(&mut self, command: &str) -> Result<String> {
        {
            let channel = self.channel.as_mut().ok_or(DriverError::NotConnected)?;
            debug!("sending command: {command}");
            let line = format!("{command}\n");
            channel
                .data(line.as_bytes())
                .await
                .map_err(TransportError::Ssh)?;
        }

        let raw = self.read_until_prompt().await?;
        Ok(Self::normalize(&raw, command))
    }

    fn is_open(&self) -> bool {
        self.session.is_some()
    }
}

/// russh client handler.
///
/// Host keys are accepted and logged; switch management networks in this
/// deployment do not maintain known_hosts state.
struct SshHandler {
    host: String,
    port: u16,
}

impl client::Handler for SshHandler {
    type Error = russh::Error;

    async fn check_server_key(
        &mut self,
        server_public_key: &PublicKey,
    ) -> std::result::Result<bool, Self::Error> {
        debug!(
            "accepting {} host key from {}:{}",
            server_public_key.algorithm(),
            self.host,
            self.port
        );
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_echo_and_prompt() {
        let raw = "show ip arp\r\n10.0.0.1 via VLAN10:00-11-22-33-44-55\r\nsw1# ";
        let normalized = SshSession::normalize(raw, "show ip arp");
        assert_eq!(normalized, "10.0.0.1 via VLAN10:00-11-22-33-44-55\r");
    }

    #[test]
    fn test_normalize_prompt_only() {
        assert_eq!(SshSession::normalize("sw1# ", "show clock"), "");
    }

    #[test]
    fn test_invalid_prompt_pattern_rejected() {
        let config = SessionConfig {
            prompt_pattern: "[".to_string(),
            ..SessionConfig::new("sw1.lab")
        };
        assert!(SshSession::new(config).is_err());
    }
}
