//! TextFSM-backed extraction engine.

use textfsm_rust::Template;

use crate::error::{ExtractError, Result};

use super::{Extractor, Row, TemplateId};

const TRANSCEIVER_POWER: &str = include_str!("templates/transceiver_power.textfsm");
const INTERFACE_STATISTICS: &str = include_str!("templates/interface_statistics.textfsm");

/// Extractor backed by embedded TextFSM templates, one per supported listing.
#[derive(Debug, Default)]
pub struct TextFsmExtractor;

impl TextFsmExtractor {
    pub fn new() -> Self {
        Self
    }

    fn template_source(template: TemplateId) -> &'static str {
        match template {
            TemplateId::TransceiverPower => TRANSCEIVER_POWER,
            TemplateId::InterfaceStatistics => INTERFACE_STATISTICS,
        }
    }
}

impl Extractor for TextFsmExtractor {
    fn extract(&self, template: TemplateId, raw: &str) -> Result<Vec<Row>> {
        let source = Self::template_source(template);

        let compiled = Template::parse_str(source).map_err(|e| ExtractError::Template {
            name: template.name(),
            message: e.to_string(),
        })?;

        let mut parser = compiled.parser();
        let rows = parser
            .parse_text_to_dicts(raw)
            .map_err(|e| ExtractError::Template {
                name: template.name(),
                message: e.to_string(),
            })?;

        Ok(rows)
    }
}
