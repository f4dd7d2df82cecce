//! Driver implementation for Microsemi switches running SMBStaX.

use indexmap::IndexMap;
use log::debug;

use crate::error::{DriverError, Result};
use crate::extract::{Extractor, TemplateId};
use crate::model::{ArpEntry, ConfigSnapshot, InterfaceCounters, MacEntry, OpticsReading};
use crate::parse;
use crate::session::CliSession;

use super::commands;
use super::NetworkDriver;

/// SMBStaX driver over an injected CLI session and extraction engine.
///
/// The driver holds no protocol state of its own: every accessor issues one
/// command, waits for the full response, and normalizes it from scratch.
/// Nothing is cached between calls.
pub struct SmbstaxDriver<S, E> {
    session: S,
    extractor: E,
    host: String,
    port: u16,
}

impl<S, E> SmbstaxDriver<S, E>
where
    S: CliSession,
    E: Extractor,
{
    /// Create a driver over explicit collaborators. `host` and `port` are
    /// only used for error reporting; the session carries the real target.
    pub fn new(session: S, extractor: E, host: impl Into<String>, port: u16) -> Self {
        Self {
            session,
            extractor,
            host: host.into(),
            port,
        }
    }

    async fn run(&mut self, command: &str) -> Result<String> {
        debug!("running '{command}' on {}", self.host);
        self.session.send_command(command).await
    }
}

impl<S, E> NetworkDriver for SmbstaxDriver<S, E>
where
    S: CliSession,
    E: Extractor,
{
    async fn open(&mut self) -> Result<()> {
        self.session.open().await.map_err(|e| {
            DriverError::ConnectionFailed {
                host: self.host.clone(),
                port: self.port,
                source: Box::new(e),
            }
            .into()
        })
    }

    async fn close(&mut self) -> Result<()> {
        self.session.close().await
    }

    fn is_alive(&self) -> bool {
        self.session.is_open()
    }

    async fn cli(&mut self, commands: &[&str]) -> Result<IndexMap<String, String>> {
        let mut cli_output = IndexMap::new();

        for &command in commands {
            let output = self.run(command).await?;
            for indicator in commands::REJECTION_INDICATORS {
                if output.contains(indicator) {
                    return Err(DriverError::CommandRejected {
                        command: command.to_string(),
                        indicator: indicator.to_string(),
                    }
                    .into());
                }
            }
            cli_output.insert(command.to_string(), output);
        }

        Ok(cli_output)
    }

    async fn get_arp_table(&mut self) -> Result<Vec<ArpEntry>> {
        let output = self.run(commands::SHOW_IP_ARP).await?;
        Ok(parse::parse_arp_table(&output)?)
    }

    async fn get_mac_address_table(&mut self) -> Result<Vec<MacEntry>> {
        let output = self.run(commands::SHOW_MAC_ADDRESS_TABLE).await?;
        Ok(parse::parse_mac_table(&output)?)
    }

    async fn get_config(&mut self) -> Result<ConfigSnapshot> {
        let startup = self.run(commands::MORE_STARTUP_CONFIG).await?;
        let running = self.run(commands::SHOW_RUNNING_CONFIG).await?;
        Ok(parse::snapshot_config(&startup, &running))
    }

    async fn get_optics(&mut self) -> Result<IndexMap<String, OpticsReading>> {
        let output = self.run(commands::SHOW_TRANSCEIVER).await?;
        let rows = self
            .extractor
            .extract(TemplateId::TransceiverPower, &output)?;
        Ok(parse::parse_optics(&rows))
    }

    async fn get_interfaces_counters(&mut self) -> Result<IndexMap<String, InterfaceCounters>> {
        let output = self.run(commands::SHOW_INTERFACE_STATISTICS).await?;
        let rows = self
            .extractor
            .extract(TemplateId::InterfaceStatistics, &output)?;
        Ok(parse::parse_interface_counters(&rows))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use tokio_test::block_on;

    use crate::error::Error;
    use crate::extract::Row;

    use super::*;

    /// Scripted session: canned response per command, no transport.
    #[derive(Default)]
    struct MockSession {
        responses: HashMap<&'static str, &'static str>,
        open: bool,
        fail_open: bool,
        sent: Vec<String>,
    }

    impl MockSession {
        fn with_response(command: &'static str, response: &'static str) -> Self {
            Self {
                responses: HashMap::from([(command, response)]),
                ..Self::default()
            }
        }
    }

    impl CliSession for MockSession {
        async fn open(&mut self) -> Result<()> {
            if self.fail_open {
                return Err(crate::error::TransportError::ChannelClosed.into());
            }
            self.open = true;
            Ok(())
        }

        async fn close(&mut self) -> Result<()> {
            self.open = false;
            Ok(())
        }

        async fn send_command(&mut self, command: &str) -> Result<String> {
            self.sent.push(command.to_string());
            Ok(self
                .responses
                .get(command)
                .copied()
                .unwrap_or("")
                .to_string())
        }

        fn is_open(&self) -> bool {
            self.open
        }
    }

    /// Extractor returning canned rows regardless of input.
    struct MockExtractor(Vec<Row>);

    impl Extractor for MockExtractor {
        fn extract(&self, _template: TemplateId, _raw: &str) -> Result<Vec<Row>> {
            Ok(self.0.clone())
        }
    }

    fn driver(session: MockSession) -> SmbstaxDriver<MockSession, MockExtractor> {
        SmbstaxDriver::new(session, MockExtractor(Vec::new()), "sw1.lab", 22)
    }

    #[test]
    fn test_open_close_lifecycle() {
        block_on(async {
            let mut driver = driver(MockSession::default());
            assert!(!driver.is_alive());
            driver.open().await.unwrap();
            assert!(driver.is_alive());
            driver.close().await.unwrap();
            assert!(!driver.is_alive());
        });
    }

    #[test]
    fn test_open_failure_names_host_and_port() {
        block_on(async {
            let session = MockSession {
                fail_open: true,
                ..MockSession::default()
            };
            let mut driver = driver(session);
            let err = driver.open().await.unwrap_err();
            match err {
                Error::Driver(DriverError::ConnectionFailed { host, port, .. }) => {
                    assert_eq!(host, "sw1.lab");
                    assert_eq!(port, 22);
                }
                other => panic!("unexpected error: {other:?}"),
            }
        });
    }

    #[test]
    fn test_cli_returns_output_keyed_by_command() {
        block_on(async {
            let mut session = MockSession::with_response("show clock", "12:00:00");
            session.responses.insert("show version", "SMBStaX 4.2");
            let mut driver = driver(session);

            let output = driver.cli(&["show clock", "show version"]).await.unwrap();
            assert_eq!(output["show clock"], "12:00:00");
            assert_eq!(output["show version"], "SMBStaX 4.2");
            let keys: Vec<&String> = output.keys().collect();
            assert_eq!(keys, ["show clock", "show version"]);
        });
    }

    #[test]
    fn test_cli_rejects_on_either_indicator() {
        for response in ["% Invalid input detected", "% Incomplete command"] {
            block_on(async {
                let session = MockSession::with_response("show bogus", response);
                let mut driver = driver(session);
                let err = driver.cli(&["show bogus"]).await.unwrap_err();
                assert!(matches!(
                    err,
                    Error::Driver(DriverError::CommandRejected { .. })
                ));
            });
        }
    }

    #[test]
    fn test_get_arp_table_sends_exact_command() {
        block_on(async {
            let session = MockSession::with_response(
                "show ip arp",
                "10.0.0.1 via VLAN10:00-11-22-33-44-55\n",
            );
            let mut driver = driver(session);

            let table = driver.get_arp_table().await.unwrap();
            assert_eq!(table.len(), 1);
            assert_eq!(table[0].mac, "00:11:22:33:44:55");
            assert_eq!(driver.session.sent, ["show ip arp"]);
        });
    }

    #[test]
    fn test_get_mac_address_table() {
        block_on(async {
            let session = MockSession::with_response(
                "show mac address-table",
                "Type VID MAC Ports\nDynamic 10 00-11-22-33-44-55 GigabitEthernet 1/1\n",
            );
            let mut driver = driver(session);

            let table = driver.get_mac_address_table().await.unwrap();
            assert_eq!(table.len(), 1);
            assert_eq!(table[0].interface, "GigabitEthernet1/1");
        });
    }

    #[test]
    fn test_get_config_candidate_empty() {
        block_on(async {
            let mut session =
                MockSession::with_response("more flash:startup-config", "hostname sw1");
            session
                .responses
                .insert("show running-config", "hostname sw1\nvlan 10");
            let mut driver = driver(session);

            let config = driver.get_config().await.unwrap();
            assert_eq!(config.startup, "hostname sw1");
            assert_eq!(config.running, "hostname sw1\nvlan 10");
            assert_eq!(config.candidate, "");
        });
    }

    #[test]
    fn test_get_optics_goes_through_extractor() {
        block_on(async {
            let rows = vec![Row::from([
                (
                    "interface".to_string(),
                    "10GigabitEthernet 1/1".to_string(),
                ),
                ("current_rx".to_string(), "-2.5".to_string()),
                ("min_rx".to_string(), "-3.0".to_string()),
                ("max_rx".to_string(), "-2.0".to_string()),
            ])];
            let mut driver = SmbstaxDriver::new(
                MockSession::default(),
                MockExtractor(rows),
                "sw1.lab",
                22,
            );

            let optics = driver.get_optics().await.unwrap();
            let power = &optics["10GigabitEthernet 1/1"].physical_channels.channel[0]
                .state
                .input_power;
            assert_eq!(power.instant, 0.0);
            assert_eq!(power.avg, -2.5);
            assert_eq!(
                driver.session.sent,
                ["show interface 10GigabitEthernet * transceiver"]
            );
        });
    }

    #[test]
    fn test_get_interfaces_counters_mislabel() {
        block_on(async {
            let rows = vec![Row::from([
                ("interface".to_string(), "GigabitEthernet 1/1".to_string()),
                ("tx_octets".to_string(), "100".to_string()),
                ("rx_octets".to_string(), "200".to_string()),
                ("crc".to_string(), "3".to_string()),
            ])];
            let mut driver = SmbstaxDriver::new(
                MockSession::default(),
                MockExtractor(rows),
                "sw1.lab",
                22,
            );

            let counters = driver.get_interfaces_counters().await.unwrap();
            let c = &counters["GigabitEthernet 1/1"];
            assert_eq!(c.tx_unicast_packets, 100);
            assert_eq!(c.rx_unicast_packets, 200);
            assert_eq!(c.rx_errors, 3);
            assert_eq!(c.tx_errors, -1);
        });
    }

    #[test]
    fn test_unsupported_capabilities_are_typed() {
        block_on(async {
            let mut driver = driver(MockSession::default());

            let err = driver.get_bgp_neighbors().await.unwrap_err();
            assert!(matches!(
                err,
                Error::Driver(DriverError::Unsupported {
                    capability: "get_bgp_neighbors"
                })
            ));

            let err = driver.commit_config().await.unwrap_err();
            assert!(matches!(
                err,
                Error::Driver(DriverError::Unsupported {
                    capability: "commit_config"
                })
            ));
        });
    }
}
