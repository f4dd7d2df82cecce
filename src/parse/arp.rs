//! ARP table normalization for `show ip arp` output.

use crate::error::ParseError;
use crate::model::ArpEntry;

use super::mac_addr::canonical_mac;

/// Sentinel for counters the device does not report.
const AGE_UNKNOWN: f64 = -1.0;

/// Parse raw `show ip arp` output into ARP entries.
///
/// The device prints one entry per line as `<address> via <vlan>:<mac>`.
/// Only lines with exactly three whitespace-separated tokens are accepted;
/// the third token is split on its first `:` into the VLAN (reported as the
/// interface) and the MAC address. Any other line shape is skipped.
/// SMBStaX does not report entry age, so `age` is always `-1`.
pub fn parse_arp_table(raw: &str) -> Result<Vec<ArpEntry>, ParseError> {
    let mut arp_table = Vec::new();

    for line in raw.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let [address, _via, vlan_mac] = fields.as_slice() else {
            continue;
        };
        let Some((vlan, mac)) = vlan_mac.split_once(':') else {
            continue;
        };

        arp_table.push(ArpEntry {
            interface: vlan.to_string(),
            mac: canonical_mac(mac)?,
            ip: address.to_string(),
            age: AGE_UNKNOWN,
        });
    }

    Ok(arp_table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_lines() {
        let raw = "\
10.0.0.1 via VLAN10:00-11-22-33-44-55
10.0.0.2 via VLAN10:00-11-22-33-44-66
";
        let table = parse_arp_table(raw).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(
            table[0],
            ArpEntry {
                interface: "VLAN10".into(),
                mac: "00:11:22:33:44:55".into(),
                ip: "10.0.0.1".into(),
                age: -1.0,
            }
        );
        assert_eq!(table[1].ip, "10.0.0.2");
    }

    #[test]
    fn test_age_always_unknown() {
        let table = parse_arp_table("192.168.1.1 via 1:001a2b3c4d5e").unwrap();
        assert_eq!(table[0].age, -1.0);
        assert_eq!(table[0].mac, "00:1a:2b:3c:4d:5e");
    }

    #[test]
    fn test_splits_on_first_colon_only() {
        // Everything after the first colon belongs to the MAC token.
        let table = parse_arp_table("10.0.0.1 via 10:00-11-22-33-44-55").unwrap();
        assert_eq!(table[0].interface, "10");
        assert_eq!(table[0].mac, "00:11:22:33:44:55");
    }

    #[test]
    fn test_wrong_token_count_dropped() {
        let raw = "\
Total ARP entries
10.0.0.1 via VLAN10:00-11-22-33-44-55 extra
10.0.0.2 VLAN10:00-11-22-33-44-66
";
        // 3-token line with no colon in its third token; the 4-token and
        // 2-token lines miss the shape entirely.
        let table = parse_arp_table(raw).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_blank_input() {
        assert!(parse_arp_table("").unwrap().is_empty());
        assert!(parse_arp_table("\n\n").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_mac_fails_loudly() {
        let err = parse_arp_table("10.0.0.1 via VLAN10:zz-11-22-33-44-55").unwrap_err();
        assert!(matches!(err, ParseError::InvalidMac { .. }));
    }
}
