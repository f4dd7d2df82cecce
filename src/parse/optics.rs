//! Optics normalization for the transceiver-power listing.

use indexmap::IndexMap;

use crate::extract::Row;
use crate::model::{
    ChannelState, OpticsChannel, OpticsReading, PhysicalChannels, PowerMeasurement,
};

use super::field_f64;

/// Build per-interface optics readings from extracted transceiver rows.
///
/// Each row carries the `interface`, `current_rx`, `min_rx` and `max_rx`
/// columns. The device reports no instantaneous value, so `instant` is
/// always 0. A single channel (index 0) is modeled per interface; when the
/// listing repeats an interface, the last row wins.
pub fn parse_optics(rows: &[Row]) -> IndexMap<String, OpticsReading> {
    let mut optics = IndexMap::new();

    for row in rows {
        let Some(interface) = row.get("interface").filter(|i| !i.is_empty()) else {
            continue;
        };

        let reading = OpticsReading {
            physical_channels: PhysicalChannels {
                channel: vec![OpticsChannel {
                    index: 0,
                    state: ChannelState {
                        input_power: PowerMeasurement {
                            instant: 0.0,
                            avg: field_f64(row, "current_rx"),
                            min: field_f64(row, "min_rx"),
                            max: field_f64(row, "max_rx"),
                        },
                    },
                }],
            },
        };
        optics.insert(interface.clone(), reading);
    }

    optics
}
