use signalfeed_core::TradeRow;

use crate::error::ReadResult;

/// Port for trade list sources
///
/// Implementations must return rows **oldest first**. Sources whose native
/// order is newest first (the TradingView export) reverse it themselves, so
/// the last row handed to the transformer is always the most recent trade.
pub trait TradeSource {
    /// Read every trade row, oldest first
    fn read_trades(&self) -> ReadResult<Vec<TradeRow>>;

    /// Source name for logging
    fn name(&self) -> &str {
        "TradeSource"
    }
}

impl TradeSource for Vec<TradeRow> {
    fn read_trades(&self) -> ReadResult<Vec<TradeRow>> {
        Ok(self.clone())
    }

    fn name(&self) -> &str {
        "in-memory"
    }
}
