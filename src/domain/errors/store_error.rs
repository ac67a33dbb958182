//! Persistence error types.

use thiserror::Error;

/// Failure reported by a movie store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum StoreError {
    #[error("store I/O error: {message}")]
    Io { message: String },

    #[error("failed to encode cache: {message}")]
    Serialization { message: String },

    #[error("cached data is corrupted: {message}")]
    Corrupted { message: String },
}

impl StoreError {
    /// Creates I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Creates corrupted-data error.
    #[must_use]
    pub fn corrupted(message: impl Into<String>) -> Self {
        Self::Corrupted {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}
