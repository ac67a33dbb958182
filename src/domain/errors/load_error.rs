//! Loader error types.

use thiserror::Error;

use super::{StoreError, TransportError};

/// Error delivered by movie catalog loaders, remote or local.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MovieLoadError {
    /// The transport failed before a response arrived.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Non-200 status or an undecodable body.
    #[error("invalid catalog data")]
    InvalidData,

    /// The local store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl MovieLoadError {
    /// Returns whether error is network related.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

/// Error delivered by poster image loaders.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageLoadError {
    /// The transport failed before a response arrived.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Non-200 status or an empty body.
    #[error("invalid image data")]
    InvalidData,
}
