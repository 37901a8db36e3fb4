//! Weight mapping and open-position trim

use log::{debug, warn};
use signalfeed_core::{TradeRow, TradeType, Weight};

/// Map a trade event to a signal weight
///
/// - Exits close the position: `0.0`
/// - `EntryLong`: `+weight`
/// - `EntryShort`: `-weight`
///
/// Unrecognized events are passed through without a weight.
pub fn map_weight(event_type: &TradeType, weight: Weight) -> Option<f64> {
    match event_type {
        TradeType::ExitLong | TradeType::ExitShort => Some(0.0),
        TradeType::EntryLong => Some(weight.value()),
        TradeType::EntryShort => Some(-weight.value()),
        TradeType::Unrecognized(label) => {
            warn!("Unrecognized trade type '{}' passed through unweighted", label);
            None
        }
    }
}

/// A mapped row whose timestamp has not been parsed yet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalCandidate<'a> {
    /// Position of the source row in the oldest-first sequence
    pub index: usize,
    pub timestamp: Option<&'a str>,
    pub weight: Option<f64>,
}

/// Map every row, keeping input order
pub fn map_rows(rows: &[TradeRow], weight: Weight) -> Vec<SignalCandidate<'_>> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| SignalCandidate {
            index,
            timestamp: row.recorded_timestamp(),
            weight: map_weight(&row.event_type, weight),
        })
        .collect()
}

/// Drop the most recent candidate if it has no timestamp
///
/// The exit of a still-open position has no time yet and must not be
/// published as a flat signal. Only the last element is inspected; a
/// missing timestamp anywhere else is left for the parser to reject.
pub fn trim_open_position<'a>(
    candidates: &mut Vec<SignalCandidate<'a>>,
) -> Option<SignalCandidate<'a>> {
    if candidates.last()?.timestamp.is_some() {
        return None;
    }
    let open = candidates.pop();
    debug!("Trimmed open position at row {:?}", open.map(|c| c.index));
    open
}
