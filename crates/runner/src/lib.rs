//! Signalfeed Runner
//!
//! Wires a `TradeSource` and a `SignalPublisher` around the transformer and
//! loads the uploader configuration.
//!
//! ## Upload flow
//!
//! ```text
//!  UploaderConfig ──► PublisherConfig ──► HttpSignalPublisher
//!                                                 ▲
//!  CsvTradeReader ──► transform(rows, params) ──► publish(batch)
//! ```

pub mod config;
pub mod error;
pub mod workflow;

pub use config::{UploaderConfig, load_config, load_config_from_str, load_default_config};
pub use error::{ConfigError, WorkflowError, WorkflowResult};
pub use workflow::{
    UploadReport, delete_backtest_signals, transform_only, upload_tradingview_signal,
};
