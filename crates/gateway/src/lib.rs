//! Signalfeed Gateway
//!
//! Infrastructure adapters for the signalfeed uploader:
//! - `CsvTradeReader`: reads a TradingView "List of Trades" export
//!   (implements `TradeSource`)
//! - `HttpSignalPublisher`: uploads/deletes signals on the strategy-signal
//!   endpoint (implements `SignalPublisher`)
//!
//! ## Architecture
//!
//! ```text
//!  trades.csv ──► CsvTradeReader ──► Transformer ──► HttpSignalPublisher
//!  (newest first)  (oldest first)                    POST/DELETE JSON
//!                                                         │
//!                                                         ▼
//!                                            strategy-signal endpoint
//! ```
//!
//! Endpoint selection and authorization headers are explicit configuration
//! (`PublisherConfig`, `AuthConfig`) handed to the publisher on
//! construction.

pub mod adapters;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use adapters::{CsvTradeReader, DeleteSignalsRequest, HttpSignalPublisher, RowOrder};
pub use config::{AuthConfig, Environment, PermissionClaims, PublisherConfig};
pub use error::GatewayError;
