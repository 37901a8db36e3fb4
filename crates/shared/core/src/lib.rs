//! Signalfeed Core Domain
//!
//! Pure domain types for the trade-list to strategy-signal pipeline.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    // Trade list input
    TradeRow,
    TradeType,
    // Signal output
    SignalEntry,
    SignalPoint,
    SignalValue,
    StrategySignalBatch,
};
pub use values::{
    REFERENCE_OFFSET_HOURS, StrategyId, UtcOffset, ValueError, ValueResult, Weight,
};
