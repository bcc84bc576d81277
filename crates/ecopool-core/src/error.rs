//! Error types for the Ecopool part
//!
//! Provides a unified error type shared by the server and remote sides.

use thiserror::Error;

/// Result type alias using EcopoolError
pub type Result<T> = std::result::Result<T, EcopoolError>;

/// Unified error type for Ecopool operations
#[derive(Debug, Error)]
pub enum EcopoolError {
    /// The asynchronous channel to the peer is gone or refused the call.
    /// Propagates to the coordinator, which aborts the part.
    #[error("channel error: {0}")]
    Channel(String),

    // Record persistence errors
    #[error("storage error: {0}")]
    Storage(String),

    // Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// An operation was invoked in a lifecycle state that cannot honor it
    /// (e.g. a decision round before any period exists).
    #[error("part state error: {0}")]
    State(String),

    // Generic internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for EcopoolError {
    fn from(err: serde_json::Error) -> Self {
        EcopoolError::Storage(err.to_string())
    }
}

impl From<std::io::Error> for EcopoolError {
    fn from(err: std::io::Error) -> Self {
        EcopoolError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EcopoolError::Channel("remote view dropped".to_string());
        assert!(err.to_string().contains("remote view dropped"));
    }

    #[test]
    fn test_io_error_maps_to_storage() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let err: EcopoolError = io.into();
        assert!(matches!(err, EcopoolError::Storage(_)));
    }
}
