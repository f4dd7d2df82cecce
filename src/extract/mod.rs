//! Template-driven extraction of tabular command output.
//!
//! The transceiver and statistics listings are too irregular for plain
//! whitespace splitting, so they go through a template-driven text-to-record
//! pass first. The template mini-language is external (TextFSM); the
//! normalizer only knows the column names each template yields.

mod textfsm;

pub use textfsm::TextFsmExtractor;

use std::collections::HashMap;

use crate::error::Result;

/// One extracted record: column name to raw field text.
pub type Row = HashMap<String, String>;

/// Named template identifiers the driver extracts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateId {
    /// `show interface 10GigabitEthernet * transceiver` — columns
    /// `interface`, `current_rx`, `min_rx`, `max_rx`.
    TransceiverPower,

    /// `show interface * statistics` — columns `interface`, `tx_octets`,
    /// `rx_octets`, `tx_multicast`, `rx_multicast`, `tx_broadcast`,
    /// `rx_broadcast`, `crc`.
    InterfaceStatistics,
}

impl TemplateId {
    /// Stable name used in error reporting.
    pub fn name(self) -> &'static str {
        match self {
            TemplateId::TransceiverPower => "transceiver_power",
            TemplateId::InterfaceStatistics => "interface_statistics",
        }
    }
}

/// Extraction-engine seam.
///
/// Implementations turn raw command output into field-keyed rows for the
/// given template. Injected into the driver so the normalizer stays testable
/// without a live device or a template engine.
pub trait Extractor: Send + Sync {
    fn extract(&self, template: TemplateId, raw: &str) -> Result<Vec<Row>>;
}
