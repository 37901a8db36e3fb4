//! Error types for the gateway crate

use signalfeed_ports::PublishError;
use thiserror::Error;

/// Adapter construction errors
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Invalid endpoint URL '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("Invalid authorization header: {0}")]
    InvalidHeader(String),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown {kind} '{value}'")]
    UnknownVariant { kind: &'static str, value: String },
}

impl From<GatewayError> for PublishError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::InvalidEndpoint { url, reason } => {
                PublishError::InvalidEndpoint(format!("{}: {}", url, reason))
            }
            GatewayError::Serialization(e) => PublishError::Serialization(e.to_string()),
            other => PublishError::Transport(other.to_string()),
        }
    }
}
