//! Trade rows → strategy signal batch

use log::debug;
use signalfeed_core::{
    SignalEntry, SignalPoint, StrategyId, StrategySignalBatch, TradeRow, UtcOffset, ValueResult,
    Weight,
};

use crate::collision::resolve_collisions;
use crate::error::{TransformError, TransformResult};
use crate::timestamp::{normalize_instant, parse_timestamp};
use crate::weight::{SignalCandidate, map_rows, trim_open_position};

/// Caller-supplied parameters of a transformation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformParams {
    pub strategy_id: StrategyId,
    pub weight: Weight,
    /// Offset the trade list timestamps are written in
    pub utc: UtcOffset,
}

impl TransformParams {
    pub fn new(strategy_id: StrategyId, weight: Weight) -> Self {
        Self {
            strategy_id,
            weight,
            utc: UtcOffset::default(),
        }
    }

    /// Validate raw values, e.g. from the command line
    pub fn from_raw(strategy_id: u64, weight: f64, utc: &str) -> ValueResult<Self> {
        Ok(Self {
            strategy_id: StrategyId::new(strategy_id)?,
            weight: Weight::new(weight)?,
            utc: utc.parse()?,
        })
    }

    pub fn with_utc(mut self, utc: UtcOffset) -> Self {
        self.utc = utc;
        self
    }
}

impl SignalCandidate<'_> {
    /// Parse the candidate's timestamp into a signal point
    pub fn to_point(&self) -> TransformResult<SignalPoint> {
        let timestamp = self
            .timestamp
            .ok_or(TransformError::MissingTimestamp { index: self.index })?;
        Ok(SignalPoint::new(parse_timestamp(timestamp)?, self.weight))
    }
}

/// Normalize a point's instant into a wire entry
pub fn normalize_point(point: &SignalPoint, utc: UtcOffset) -> TransformResult<SignalEntry> {
    Ok(SignalEntry::new(
        normalize_instant(point.instant, utc)?,
        point.weight,
    ))
}

/// Combine a strategy with its resolved entries
pub fn assemble_batch(strategy_id: StrategyId, signals: Vec<SignalEntry>) -> StrategySignalBatch {
    StrategySignalBatch::new(strategy_id, signals)
}

/// Map, trim, parse, normalize and deduplicate an oldest-first trade list
///
/// Pure: no I/O, no shared state. Any unparseable timestamp aborts the
/// whole transformation.
pub fn transform(
    rows: &[TradeRow],
    params: &TransformParams,
) -> TransformResult<StrategySignalBatch> {
    let mut candidates = map_rows(rows, params.weight);
    trim_open_position(&mut candidates);

    let points = candidates
        .iter()
        .map(SignalCandidate::to_point)
        .collect::<TransformResult<Vec<_>>>()?;

    let entries = points
        .iter()
        .map(|point| normalize_point(point, params.utc))
        .collect::<TransformResult<Vec<_>>>()?;

    let normalized = entries.len();
    let signals = resolve_collisions(entries);
    debug!(
        "Transformed {} rows into {} signals ({} collisions) for strategy {}",
        rows.len(),
        signals.len(),
        normalized - signals.len(),
        params.strategy_id
    );

    Ok(assemble_batch(params.strategy_id, signals))
}

#[cfg(test)]
mod tests {
    use super::*;
    use signalfeed_core::{TradeType, ValueError};

    fn params() -> TransformParams {
        TransformParams::from_raw(10, 0.5, "UTC+7").unwrap()
    }

    #[test]
    fn test_from_raw_validates() {
        assert_eq!(
            TransformParams::from_raw(0, 0.5, "UTC+7"),
            Err(ValueError::InvalidStrategyId(0))
        );
        assert_eq!(
            TransformParams::from_raw(1, 1.5, "UTC+7"),
            Err(ValueError::InvalidWeight(1.5))
        );
        assert_eq!(
            TransformParams::from_raw(1, 0.5, "GMT+7"),
            Err(ValueError::InvalidUtcOffset("GMT+7".to_string()))
        );
    }

    #[test]
    fn test_default_utc_is_reference() {
        let params = TransformParams::new(StrategyId::new(1).unwrap(), Weight::FULL);
        assert_eq!(params.utc, UtcOffset::REFERENCE);
    }

    #[test]
    fn test_empty_rows_yield_empty_batch() {
        let batch = transform(&[], &params()).unwrap();
        assert!(batch.is_empty());
        assert_eq!(batch.strategy_id.value(), 10);
    }

    #[test]
    fn test_only_open_row_yields_empty_batch() {
        let rows = vec![TradeRow::open(TradeType::EntryLong)];
        assert!(transform(&rows, &params()).unwrap().is_empty());
    }

    #[test]
    fn test_interior_missing_timestamp_fails() {
        let rows = vec![
            TradeRow::at(TradeType::EntryLong, "2023-08-03 10:45"),
            TradeRow::open(TradeType::ExitLong),
            TradeRow::at(TradeType::EntryShort, "2023-08-03 17:45"),
        ];
        assert_eq!(
            transform(&rows, &params()),
            Err(TransformError::MissingTimestamp { index: 1 })
        );
    }

    #[test]
    fn test_bad_timestamp_aborts_whole_batch() {
        let rows = vec![
            TradeRow::at(TradeType::EntryLong, "2023-08-03 10:45"),
            TradeRow::at(TradeType::ExitLong, "03/08/2023"),
        ];
        let err = transform(&rows, &params()).unwrap_err();
        assert!(matches!(err, TransformError::Format(ref e) if e.input == "03/08/2023"));
    }

    #[test]
    fn test_unrecognized_row_passes_through_unweighted() {
        let rows = vec![
            TradeRow::at("Entry Long", "2023-08-03 10:45"),
            TradeRow::at("Margin Call", "2023-08-03 11:45"),
        ];
        let batch = transform(&rows, &params()).unwrap();
        assert_eq!(batch.signals[0].weight(), Some(0.5));
        assert_eq!(batch.signals[1].weight(), None);
    }
}
