use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::values::StrategyId;

/// A weighted position instruction at a local (not yet normalized) instant
///
/// `weight` is `None` only when the source row had an unrecognized event
/// type; such rows are passed through unweighted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalPoint {
    pub instant: NaiveDateTime,
    pub weight: Option<f64>,
}

impl SignalPoint {
    pub fn new(instant: NaiveDateTime, weight: Option<f64>) -> Self {
        Self { instant, weight }
    }
}

/// Per-instrument signal values, nested under the channel key on the wire
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalValue {
    #[serde(rename = "S50")]
    pub s50: Option<f64>,
}

impl SignalValue {
    pub fn new(weight: Option<f64>) -> Self {
        Self { s50: weight }
    }
}

/// One entry of the wire payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalEntry {
    /// Normalized instant, e.g. `2023-08-04T10:00+0700`
    pub signal_at: String,
    pub signal: SignalValue,
}

impl SignalEntry {
    pub fn new(signal_at: impl Into<String>, weight: Option<f64>) -> Self {
        Self {
            signal_at: signal_at.into(),
            signal: SignalValue::new(weight),
        }
    }

    pub fn weight(&self) -> Option<f64> {
        self.signal.s50
    }

    /// Flat entries supersede every other entry at the same instant
    pub fn is_flat(&self) -> bool {
        self.signal.s50 == Some(0.0)
    }
}

/// The payload sent to the strategy-signal endpoint
///
/// `signal_at` values are unique and in chronological order of first
/// appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategySignalBatch {
    pub strategy_id: StrategyId,
    pub signals: Vec<SignalEntry>,
}

impl StrategySignalBatch {
    pub fn new(strategy_id: StrategyId, signals: Vec<SignalEntry>) -> Self {
        Self {
            strategy_id,
            signals,
        }
    }

    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }
}
