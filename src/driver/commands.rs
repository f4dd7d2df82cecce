//! Exact CLI command strings sent to the device.
//!
//! These must match the SMBStaX firmware verbatim; the parsers are written
//! against the output of these commands and nothing else.

pub const SHOW_IP_ARP: &str = "show ip arp";
pub const SHOW_MAC_ADDRESS_TABLE: &str = "show mac address-table";
pub const MORE_STARTUP_CONFIG: &str = "more flash:startup-config";
pub const SHOW_RUNNING_CONFIG: &str = "show running-config";
pub const SHOW_TRANSCEIVER: &str = "show interface 10GigabitEthernet * transceiver";
pub const SHOW_INTERFACE_STATISTICS: &str = "show interface * statistics";

/// Response substrings that mark a command the device refused to run.
/// Both are checked, case-sensitively.
pub const REJECTION_INDICATORS: [&str; 2] = ["Invalid input", "Incomplete command"];
