//! Error types for the runner crate

use signalfeed_ports::{PublishError, ReadError};
use signalfeed_transformer::TransformError;
use thiserror::Error;

/// Failure of one upload or delete run
///
/// Each stage keeps its own variant so a caller can tell a bad trade list
/// from a rejected request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkflowError {
    #[error("Read failed: {0}")]
    Read(#[from] ReadError),

    #[error("Transform failed: {0}")]
    Transform(#[from] TransformError),

    #[error("Publish failed: {0}")]
    Publish(#[from] PublishError),
}

pub type WorkflowResult<T> = std::result::Result<T, WorkflowError>;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Missing environment variable {0}")]
    MissingEnv(&'static str),

    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}
