//! Signalfeed Transformer
//!
//! Turns an oldest-first trade list into a strategy signal batch.
//!
//! ## Pipeline
//!
//! ```text
//!  TradeRow[]  (oldest first)
//!      │  map_weight         Entry Long → +w, Entry Short → -w, Exit → 0
//!      ▼
//!  SignalCandidate[]
//!      │  trim_open_position  drop the last row if it has no time yet
//!      ▼
//!  SignalPoint[]             parse "%Y-%m-%d %H:%M" | "%Y-%m-%d"
//!      │  normalize_instant   shift UTC±H → UTC+7, render ...T10:00+0700
//!      ▼
//!  SignalEntry[]
//!      │  resolve_collisions  flat supersedes, otherwise first wins
//!      ▼
//!  StrategySignalBatch
//! ```
//!
//! Everything here is synchronous and free of I/O.

pub mod collision;
pub mod error;
pub mod pipeline;
pub mod timestamp;
pub mod weight;

pub use collision::resolve_collisions;
pub use error::{FormatError, TransformError, TransformResult};
pub use pipeline::{TransformParams, assemble_batch, normalize_point, transform};
pub use timestamp::{
    ACCEPTED_FORMATS, SIGNAL_AT_FORMAT, TimestampFormat, normalize_instant, parse_timestamp,
};
pub use weight::{SignalCandidate, map_rows, map_weight, trim_open_position};
