//! High-level device driver.
//!
//! [`NetworkDriver`] is the full plugin ABI the host automation framework
//! expects from every driver. Capabilities a device family does not support
//! stay on the trait as default methods that fail with a typed
//! [`Error::unsupported`] result - callers observe the gap instead of
//! receiving silently empty data.

pub mod commands;

mod builder;
mod smbstax;

pub use builder::DriverBuilder;
pub use smbstax::SmbstaxDriver;

use std::future::Future;

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::model::{ArpEntry, ConfigSnapshot, InterfaceCounters, MacEntry, OpticsReading};

/// The plugin ABI: every capability the host framework may call.
///
/// Payloads for capabilities no driver of this family can produce are typed
/// as [`serde_json::Value`]; they only ever appear in the error path here.
pub trait NetworkDriver: Send {
    /// Connect to the device.
    fn open(&mut self) -> impl Future<Output = Result<()>> + Send;

    /// Disconnect from the device.
    fn close(&mut self) -> impl Future<Output = Result<()>> + Send;

    /// Whether the underlying session is connected.
    fn is_alive(&self) -> bool;

    /// Run arbitrary commands, returning their output keyed by command in
    /// call order.
    fn cli(
        &mut self,
        commands: &[&str],
    ) -> impl Future<Output = Result<IndexMap<String, String>>> + Send;

    /// ARP table.
    fn get_arp_table(&mut self) -> impl Future<Output = Result<Vec<ArpEntry>>> + Send;

    /// Learned MAC address table.
    fn get_mac_address_table(&mut self) -> impl Future<Output = Result<Vec<MacEntry>>> + Send;

    /// Startup/running/candidate configuration dump.
    fn get_config(&mut self) -> impl Future<Output = Result<ConfigSnapshot>> + Send;

    /// Per-interface received optical power.
    fn get_optics(
        &mut self,
    ) -> impl Future<Output = Result<IndexMap<String, OpticsReading>>> + Send;

    /// Per-interface traffic counters.
    fn get_interfaces_counters(
        &mut self,
    ) -> impl Future<Output = Result<IndexMap<String, InterfaceCounters>>> + Send;

    // Capabilities below are part of the ABI but have no SMBStaX
    // implementation; they fail with a typed unsupported error.

    fn get_facts(&mut self) -> impl Future<Output = Result<Value>> + Send {
        async { Err(Error::unsupported("get_facts")) }
    }

    fn get_interfaces(&mut self) -> impl Future<Output = Result<Value>> + Send {
        async { Err(Error::unsupported("get_interfaces")) }
    }

    fn get_interfaces_ip(&mut self) -> impl Future<Output = Result<Value>> + Send {
        async { Err(Error::unsupported("get_interfaces_ip")) }
    }

    fn get_lldp_neighbors(&mut self) -> impl Future<Output = Result<Value>> + Send {
        async { Err(Error::unsupported("get_lldp_neighbors")) }
    }

    fn get_lldp_neighbors_detail(&mut self) -> impl Future<Output = Result<Value>> + Send {
        async { Err(Error::unsupported("get_lldp_neighbors_detail")) }
    }

    fn get_bgp_config(&mut self) -> impl Future<Output = Result<Value>> + Send {
        async { Err(Error::unsupported("get_bgp_config")) }
    }

    fn get_bgp_neighbors(&mut self) -> impl Future<Output = Result<Value>> + Send {
        async { Err(Error::unsupported("get_bgp_neighbors")) }
    }

    fn get_bgp_neighbors_detail(&mut self) -> impl Future<Output = Result<Value>> + Send {
        async { Err(Error::unsupported("get_bgp_neighbors_detail")) }
    }

    fn get_environment(&mut self) -> impl Future<Output = Result<Value>> + Send {
        async { Err(Error::unsupported("get_environment")) }
    }

    fn get_firewall_policies(&mut self) -> impl Future<Output = Result<Value>> + Send {
        async { Err(Error::unsupported("get_firewall_policies")) }
    }

    fn get_ipv6_neighbors_table(&mut self) -> impl Future<Output = Result<Value>> + Send {
        async { Err(Error::unsupported("get_ipv6_neighbors_table")) }
    }

    fn get_network_instances(&mut self) -> impl Future<Output = Result<Value>> + Send {
        async { Err(Error::unsupported("get_network_instances")) }
    }

    fn get_ntp_peers(&mut self) -> impl Future<Output = Result<Value>> + Send {
        async { Err(Error::unsupported("get_ntp_peers")) }
    }

    fn get_ntp_servers(&mut self) -> impl Future<Output = Result<Value>> + Send {
        async { Err(Error::unsupported("get_ntp_servers")) }
    }

    fn get_ntp_stats(&mut self) -> impl Future<Output = Result<Value>> + Send {
        async { Err(Error::unsupported("get_ntp_stats")) }
    }

    fn get_probes_config(&mut self) -> impl Future<Output = Result<Value>> + Send {
        async { Err(Error::unsupported("get_probes_config")) }
    }

    fn get_probes_results(&mut self) -> impl Future<Output = Result<Value>> + Send {
        async { Err(Error::unsupported("get_probes_results")) }
    }

    fn get_route_to(&mut self, _destination: &str) -> impl Future<Output = Result<Value>> + Send {
        async { Err(Error::unsupported("get_route_to")) }
    }

    fn get_snmp_information(&mut self) -> impl Future<Output = Result<Value>> + Send {
        async { Err(Error::unsupported("get_snmp_information")) }
    }

    fn get_users(&mut self) -> impl Future<Output = Result<Value>> + Send {
        async { Err(Error::unsupported("get_users")) }
    }

    fn get_vlans(&mut self) -> impl Future<Output = Result<Value>> + Send {
        async { Err(Error::unsupported("get_vlans")) }
    }

    fn ping(&mut self, _destination: &str) -> impl Future<Output = Result<Value>> + Send {
        async { Err(Error::unsupported("ping")) }
    }

    fn traceroute(&mut self, _destination: &str) -> impl Future<Output = Result<Value>> + Send {
        async { Err(Error::unsupported("traceroute")) }
    }

    fn compliance_report(&mut self) -> impl Future<Output = Result<Value>> + Send {
        async { Err(Error::unsupported("compliance_report")) }
    }

    fn load_merge_candidate(&mut self, _config: &str) -> impl Future<Output = Result<()>> + Send {
        async { Err(Error::unsupported("load_merge_candidate")) }
    }

    fn load_replace_candidate(
        &mut self,
        _config: &str,
    ) -> impl Future<Output = Result<()>> + Send {
        async { Err(Error::unsupported("load_replace_candidate")) }
    }

    fn compare_config(&mut self) -> impl Future<Output = Result<String>> + Send {
        async { Err(Error::unsupported("compare_config")) }
    }

    fn commit_config(&mut self) -> impl Future<Output = Result<()>> + Send {
        async { Err(Error::unsupported("commit_config")) }
    }

    fn discard_config(&mut self) -> impl Future<Output = Result<()>> + Send {
        async { Err(Error::unsupported("discard_config")) }
    }

    fn rollback(&mut self) -> impl Future<Output = Result<()>> + Send {
        async { Err(Error::unsupported("rollback")) }
    }
}
