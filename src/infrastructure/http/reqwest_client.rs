//! reqwest-backed HTTP client adapter.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use crate::domain::errors::TransportError;
use crate::domain::ports::{HttpClient, HttpResponse};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP client over a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Creates client with the default timeout.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new() -> Result<Self, TransportError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Creates client with a custom request timeout.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::request(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// Wraps an existing client.
    #[must_use]
    pub const fn from_client(client: Client) -> Self {
        Self { client }
    }
}

/// Request URLs carry the API key, so errors are reported without them.
fn map_reqwest_error(e: reqwest::Error) -> TransportError {
    let e = e.without_url();
    if e.is_timeout() {
        TransportError::Timeout
    } else if e.is_connect() {
        TransportError::connect(e.to_string())
    } else {
        TransportError::request(e.to_string())
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        debug!(host = url.host_str().unwrap_or_default(), path = url.path(), "GET");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| {
                let error = map_reqwest_error(e);
                warn!(error = %error, "HTTP request failed");
                error
            })?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| {
            let e = e.without_url();
            warn!(error = %e, status, "Failed to read response body");
            if e.is_timeout() {
                TransportError::Timeout
            } else {
                TransportError::body(e.to_string())
            }
        })?;

        debug!(status, bytes = body.len(), "Response received");

        Ok(HttpResponse { status, body })
    }
}
