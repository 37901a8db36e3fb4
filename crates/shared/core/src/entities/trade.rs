use serde::{Deserialize, Serialize};
use std::fmt;

/// Trade event type as exported in a TradingView "List of Trades"
///
/// Labels that do not match one of the four known events are kept
/// verbatim in `Unrecognized` so the caller can see what was supplied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TradeType {
    EntryLong,
    ExitLong,
    EntryShort,
    ExitShort,
    Unrecognized(String),
}

impl TradeType {
    pub const ENTRY_LONG: &'static str = "Entry Long";
    pub const EXIT_LONG: &'static str = "Exit Long";
    pub const ENTRY_SHORT: &'static str = "Entry Short";
    pub const EXIT_SHORT: &'static str = "Exit Short";

    /// Parse an export label, falling back to `Unrecognized`
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            Self::ENTRY_LONG => TradeType::EntryLong,
            Self::EXIT_LONG => TradeType::ExitLong,
            Self::ENTRY_SHORT => TradeType::EntryShort,
            Self::EXIT_SHORT => TradeType::ExitShort,
            other => TradeType::Unrecognized(other.to_string()),
        }
    }

    /// The export label for this event
    pub fn label(&self) -> &str {
        match self {
            TradeType::EntryLong => Self::ENTRY_LONG,
            TradeType::ExitLong => Self::EXIT_LONG,
            TradeType::EntryShort => Self::ENTRY_SHORT,
            TradeType::ExitShort => Self::EXIT_SHORT,
            TradeType::Unrecognized(label) => label,
        }
    }
}

impl From<&str> for TradeType {
    fn from(label: &str) -> Self {
        TradeType::from_label(label)
    }
}

impl From<String> for TradeType {
    fn from(label: String) -> Self {
        TradeType::from_label(&label)
    }
}

impl From<TradeType> for String {
    fn from(trade_type: TradeType) -> Self {
        trade_type.label().to_string()
    }
}

impl fmt::Display for TradeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the trade list, as supplied by a trade source
///
/// `timestamp` is the raw "Date/Time" cell. It is `None` when the cell was
/// empty, which TradingView emits for the exit of a position that is
/// still open. A blank string counts as empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeRow {
    pub event_type: TradeType,
    pub timestamp: Option<String>,
}

impl TradeRow {
    pub fn new(event_type: impl Into<TradeType>, timestamp: Option<&str>) -> Self {
        Self {
            event_type: event_type.into(),
            timestamp: timestamp
                .filter(|cell| !cell.trim().is_empty())
                .map(str::to_string),
        }
    }

    /// Row with a timestamp
    pub fn at(event_type: impl Into<TradeType>, timestamp: &str) -> Self {
        Self::new(event_type, Some(timestamp))
    }

    /// Row whose timestamp cell is empty
    pub fn open(event_type: impl Into<TradeType>) -> Self {
        Self::new(event_type, None)
    }

    /// The timestamp cell, unless it is missing or blank
    pub fn recorded_timestamp(&self) -> Option<&str> {
        self.timestamp
            .as_deref()
            .filter(|cell| !cell.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label() {
        assert_eq!(TradeType::from_label("Entry Long"), TradeType::EntryLong);
        assert_eq!(TradeType::from_label("Exit Long"), TradeType::ExitLong);
        assert_eq!(TradeType::from_label(" Entry Short "), TradeType::EntryShort);
        assert_eq!(TradeType::from_label("Exit Short"), TradeType::ExitShort);
        assert_eq!(
            TradeType::from_label("Margin Call"),
            TradeType::Unrecognized("Margin Call".to_string())
        );
    }

    #[test]
    fn test_label_round_trip() {
        for label in ["Entry Long", "Exit Long", "Entry Short", "Exit Short"] {
            assert_eq!(TradeType::from_label(label).label(), label);
        }
    }

    #[test]
    fn test_serde_uses_label() {
        let row = TradeRow::at("Entry Short", "2023-08-04 10:00");
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(
            json,
            r#"{"event_type":"Entry Short","timestamp":"2023-08-04 10:00"}"#
        );

        let parsed: TradeRow = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, row);
    }

    #[test]
    fn test_open_row() {
        let row = TradeRow::open(TradeType::ExitShort);
        assert_eq!(row.recorded_timestamp(), None);
    }

    #[test]
    fn test_blank_timestamp_is_empty() {
        assert_eq!(TradeRow::at("Exit Long", "").timestamp, None);
        assert_eq!(TradeRow::at("Exit Long", "   ").timestamp, None);

        // Rows built field by field or deserialized skip the constructor
        let raw: TradeRow =
            serde_json::from_str(r#"{"event_type":"Exit Long","timestamp":" "}"#).unwrap();
        assert_eq!(raw.timestamp.as_deref(), Some(" "));
        assert_eq!(raw.recorded_timestamp(), None);
        assert_eq!(
            TradeRow::at("Entry Long", "2023-08-04 10:00").recorded_timestamp(),
            Some("2023-08-04 10:00")
        );
    }
}
