use thiserror::Error;

/// Errors raised while reading a trade list
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    #[error("Failed to read trade list {path}: {message}")]
    Io { path: String, message: String },

    #[error("Malformed trade list at record {record}: {message}")]
    Malformed { record: usize, message: String },

    #[error("Trade list is missing column '{0}'")]
    MissingColumn(String),
}

pub type ReadResult<T> = std::result::Result<T, ReadError>;

/// Transport-level errors from the signal endpoint
///
/// Kept separate from transformation errors: a publisher never sees an
/// unparseable timestamp, and the transformer never sees an HTTP status.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PublishError {
    #[error("Transport failed: {0}")]
    Transport(String),

    #[error("Endpoint rejected request with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

impl PublishError {
    /// HTTP status when the endpoint answered with a non-success code
    pub fn status(&self) -> Option<u16> {
        match self {
            PublishError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type PublishResult<T> = std::result::Result<T, PublishError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_display_carries_body() {
        let err = PublishError::Rejected {
            status: 403,
            body: r#"{"detail":"not a guru"}"#.to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"Endpoint rejected request with status 403: {"detail":"not a guru"}"#
        );
        assert_eq!(err.status(), Some(403));
        assert_eq!(PublishError::Transport("timeout".into()).status(), None);
    }

    #[test]
    fn test_read_error_display() {
        let err = ReadError::MissingColumn("Date/Time".to_string());
        assert_eq!(err.to_string(), "Trade list is missing column 'Date/Time'");
    }
}
