//! HTTP client port definition.

use async_trait::async_trait;
use bytes::Bytes;
use url::Url;

use crate::domain::errors::TransportError;

/// Raw response handed back by the transport. Any status counts as success here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body, possibly empty.
    pub body: Bytes,
}

impl HttpResponse {
    /// Creates a response from status and body.
    #[must_use]
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns true for status 200.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Port for issuing GET requests.
///
/// Dropping the returned future cancels the request.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Fetches `url`, resolving once the full body is read.
    async fn get(&self, url: &Url) -> Result<HttpResponse, TransportError>;
}
