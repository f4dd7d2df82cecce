//! MAC address table normalization for `show mac address-table` output.

use crate::error::ParseError;
use crate::model::MacEntry;

use super::mac_addr::canonical_mac;

/// Sentinels for move tracking the device does not report.
const MOVES_UNKNOWN: i64 = -1;
const LAST_MOVE_UNKNOWN: f64 = -1.0;

/// Parse raw `show mac address-table` output into learned MAC entries.
///
/// The first line is the table header and is discarded unconditionally.
/// Each remaining line is accepted only when it has exactly five
/// whitespace-separated tokens (`<type> <vlan> <mac> <port-type> <port>`)
/// and the type token contains `Dynamic` (case-sensitive). The interface
/// name is the port-type prefix and port number concatenated without a
/// separator, as the framework schema expects.
///
/// Static entries are intentionally excluded from the output.
// TODO: include static mac entries once the framework schema consumers can
// distinguish them from learned ones.
pub fn parse_mac_table(raw: &str) -> Result<Vec<MacEntry>, ParseError> {
    let mut mac_table = Vec::new();

    for line in raw.lines().skip(1) {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let [kind, vlan, mac, iface, port] = fields.as_slice() else {
            continue;
        };
        if !kind.contains("Dynamic") {
            continue;
        }

        mac_table.push(MacEntry {
            mac: canonical_mac(mac)?,
            interface: format!("{iface}{port}"),
            vlan: vlan.to_string(),
            is_static: false,
            active: true,
            moves: MOVES_UNKNOWN,
            last_move: LAST_MOVE_UNKNOWN,
        });
    }

    Ok(mac_table)
}
