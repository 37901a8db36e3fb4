//! Adapters
//!
//! Inbound: trade list files (Gateway In).
//! Outbound: the strategy-signal HTTP endpoint (Gateway Out).

pub mod csv_reader;
pub mod http_publisher;

pub use csv_reader::{CsvTradeReader, RowOrder};
pub use http_publisher::{DeleteSignalsRequest, HttpSignalPublisher};
