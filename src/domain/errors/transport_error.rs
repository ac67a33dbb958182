//! Network-layer error types.

use thiserror::Error;

/// Failure reported by an HTTP client before a response was obtained.
///
/// Loaders pass these through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {message}")]
    Connect { message: String },

    #[error("request failed: {message}")]
    Request { message: String },

    #[error("failed to read response body: {message}")]
    Body { message: String },
}

impl TransportError {
    /// Creates connect error.
    #[must_use]
    pub fn connect(message: impl Into<String>) -> Self {
        Self::Connect {
            message: message.into(),
        }
    }

    /// Creates request error.
    #[must_use]
    pub fn request(message: impl Into<String>) -> Self {
        Self::Request {
            message: message.into(),
        }
    }

    /// Creates body error.
    #[must_use]
    pub fn body(message: impl Into<String>) -> Self {
        Self::Body {
            message: message.into(),
        }
    }
}
