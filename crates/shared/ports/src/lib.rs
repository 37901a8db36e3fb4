//! Signalfeed Ports
//!
//! Port definitions (traits) for the signalfeed uploader.
//! These define the boundaries between the pure transformation and the
//! infrastructure that reads trade lists and talks to the signal endpoint.

mod error;
mod publisher;
mod trade_source;

pub use error::{PublishError, PublishResult, ReadError, ReadResult};
pub use publisher::SignalPublisher;
pub use trade_source::TradeSource;
