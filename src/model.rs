//! Normalized record schemas for device data.
//!
//! Field names and sentinel values follow the network-automation framework
//! schema the driver plugs into: every field is always populated, with `-1`
//! standing in for values this device family does not report.

use serde::{Deserialize, Serialize};

/// One row of the device ARP table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArpEntry {
    /// Originating interface (the VLAN id from the `vlan:mac` column).
    pub interface: String,

    /// Canonical lowercase colon-hex MAC address.
    pub mac: String,

    /// IPv4 address.
    pub ip: String,

    /// Entry age in seconds. Always `-1.0`: SMBStaX does not report ARP age.
    pub age: f64,
}

/// One learned entry of the MAC address table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacEntry {
    /// Canonical lowercase colon-hex MAC address.
    pub mac: String,

    /// Physical port, port-type prefix and port number concatenated
    /// (e.g. `GigabitEthernet1/1`).
    pub interface: String,

    /// VLAN the address was learned on, as printed by the device.
    pub vlan: String,

    /// Always `false`: static entries are excluded from the table.
    #[serde(rename = "static")]
    pub is_static: bool,

    /// Always `true` for emitted rows.
    pub active: bool,

    /// Move count. Always `-1`: not reported by this device family.
    pub moves: i64,

    /// Seconds since the last move. Always `-1.0`: not reported.
    pub last_move: f64,
}

/// Received optical power on a pluggable transceiver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpticsReading {
    pub physical_channels: PhysicalChannels,
}

/// Channel list for one transceiver. SMBStaX reports a single channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalChannels {
    pub channel: Vec<OpticsChannel>,
}

/// One physical channel of a transceiver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpticsChannel {
    /// Channel index, always 0 on this device family.
    pub index: i64,
    pub state: ChannelState,
}

/// Measured state of one channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelState {
    pub input_power: PowerMeasurement,
}

/// Optical power measurement in dBm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerMeasurement {
    /// Always `0.0`: the device does not report an instantaneous value.
    pub instant: f64,
    pub avg: f64,
    pub min: f64,
    pub max: f64,
}

/// Per-interface traffic counters.
///
/// The unicast packet counters deliberately mirror the octet counters: the
/// device listing carries no per-direction unicast packet column and the
/// framework schema the driver feeds has always been populated this way.
/// Consumers depend on it, so the mislabel is reproduced bit-for-bit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceCounters {
    /// Always `-1`: not reported in the statistics listing.
    pub tx_errors: i64,

    /// CRC/alignment error count.
    pub rx_errors: i64,

    /// Always 0 (not distinguished from "none observed").
    pub tx_discards: i64,

    /// Always 0 (not distinguished from "none observed").
    pub rx_discards: i64,

    pub tx_octets: i64,
    pub rx_octets: i64,

    /// Equals `tx_octets`, see type-level note.
    pub tx_unicast_packets: i64,

    /// Equals `rx_octets`, see type-level note.
    pub rx_unicast_packets: i64,

    pub tx_multicast_packets: i64,
    pub rx_multicast_packets: i64,
    pub tx_broadcast_packets: i64,
    pub rx_broadcast_packets: i64,
}

/// Three-way configuration dump.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigSnapshot {
    /// Contents of `flash:startup-config`.
    pub startup: String,

    /// Output of `show running-config`.
    pub running: String,

    /// Always empty: SMBStaX has no candidate configuration store.
    pub candidate: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mac_entry_serializes_static_keyword() {
        let entry = MacEntry {
            mac: "00:11:22:33:44:55".into(),
            interface: "GigabitEthernet1/1".into(),
            vlan: "10".into(),
            is_static: false,
            active: true,
            moves: -1,
            last_move: -1.0,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["static"], serde_json::json!(false));
        assert!(json.get("is_static").is_none());
    }

    #[test]
    fn test_arp_entry_roundtrip() {
        let entry = ArpEntry {
            interface: "10".into(),
            mac: "00:11:22:33:44:55".into(),
            ip: "10.0.0.1".into(),
            age: -1.0,
        };
        let json = serde_json::to_string(&entry).unwrap();
        let back: ArpEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
