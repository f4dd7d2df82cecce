//! Interface counter normalization for the per-interface statistics listing.

use indexmap::IndexMap;

use crate::extract::Row;
use crate::model::InterfaceCounters;

use super::field_i64;

const TX_ERRORS_UNKNOWN: i64 = -1;

/// Build per-interface counters from extracted statistics rows.
///
/// Multicast and broadcast counters copy through unchanged. The unicast
/// packet counters are populated with the octet counts (see the note on
/// [`InterfaceCounters`]); `rx_errors` comes from the CRC column, while
/// `tx_errors` is not reported and stays `-1`. Discards are always 0.
pub fn parse_interface_counters(rows: &[Row]) -> IndexMap<String, InterfaceCounters> {
    let mut counters = IndexMap::new();

    for row in rows {
        let Some(interface) = row.get("interface").filter(|i| !i.is_empty()) else {
            continue;
        };

        let tx_octets = field_i64(row, "tx_octets");
        let rx_octets = field_i64(row, "rx_octets");

        counters.insert(
            interface.clone(),
            InterfaceCounters {
                tx_errors: TX_ERRORS_UNKNOWN,
                rx_errors: field_i64(row, "crc"),
                tx_discards: 0,
                rx_discards: 0,
                tx_octets,
                rx_octets,
                tx_unicast_packets: tx_octets,
                rx_unicast_packets: rx_octets,
                tx_multicast_packets: field_i64(row, "tx_multicast"),
                rx_multicast_packets: field_i64(row, "rx_multicast"),
                tx_broadcast_packets: field_i64(row, "tx_broadcast"),
                rx_broadcast_packets: field_i64(row, "rx_broadcast"),
            },
        );
    }

    counters
}
