mod signal;
mod trade;

pub use signal::{SignalEntry, SignalPoint, SignalValue, StrategySignalBatch};
pub use trade::{TradeRow, TradeType};
