//! The record normalizer: pure functions turning raw command output (or
//! pre-extracted rows) into normalized records.
//!
//! All functions here are free of I/O and shared state. Lines that do not
//! match the expected shape are dropped silently - the driver's contract is
//! best-effort scraping, not validation. The single loud failure is a MAC
//! address token that does not canonicalize.

mod arp;
mod counters;
mod mac_addr;
mod mac_table;
mod optics;

pub use arp::parse_arp_table;
pub use counters::parse_interface_counters;
pub use mac_addr::canonical_mac;
pub use mac_table::parse_mac_table;
pub use optics::parse_optics;

use crate::extract::Row;
use crate::model::ConfigSnapshot;

/// Assemble the three-way configuration snapshot.
///
/// `candidate` is always empty: the device has no candidate store.
pub fn snapshot_config(startup: &str, running: &str) -> ConfigSnapshot {
    ConfigSnapshot {
        startup: startup.to_string(),
        running: running.to_string(),
        candidate: String::new(),
    }
}

/// Extracted column as f64, defaulting to 0.0 when missing or non-numeric.
/// Emitted records must carry every field, never an absent key.
pub(crate) fn field_f64(row: &Row, column: &str) -> f64 {
    row.get(column)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(0.0)
}

/// Extracted column as i64, defaulting to 0.
pub(crate) fn field_i64(row: &Row, column: &str) -> i64 {
    row.get(column)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(0)
}
