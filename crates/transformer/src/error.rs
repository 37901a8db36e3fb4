//! Error types for the transformer crate

use signalfeed_core::ValueError;
use thiserror::Error;

/// A timestamp matched none of the accepted formats
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid datetime format '{input}': expected one of {expected}")]
pub struct FormatError {
    pub input: String,
    pub expected: String,
}

/// Transformation errors
///
/// Every variant aborts the whole transformation; no partial batch is
/// produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransformError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("Trade row {index} has no timestamp and is not the most recent row")]
    MissingTimestamp { index: usize },

    #[error("Timestamp {instant} cannot be shifted to the reference offset")]
    OutOfRange { instant: String },

    #[error("Invalid transform parameter: {0}")]
    Params(#[from] ValueError),
}

pub type TransformResult<T> = std::result::Result<T, TransformError>;
