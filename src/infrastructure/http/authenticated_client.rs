//! HTTP client decorator that signs requests with the catalog API key.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::trace;
use url::Url;

use crate::domain::entities::ApiKey;
use crate::domain::errors::TransportError;
use crate::domain::ports::{HttpClient, HttpResponse};

const API_KEY_PARAM: &str = "api_key";

/// Appends `api_key=<key>` to every request before delegating.
///
/// Existing query items are kept. Results and errors are forwarded untouched.
pub struct AuthenticatedHttpClient {
    decoratee: Arc<dyn HttpClient>,
    api_key: ApiKey,
}

impl AuthenticatedHttpClient {
    #[must_use]
    pub fn new(decoratee: Arc<dyn HttpClient>, api_key: ApiKey) -> Self {
        Self { decoratee, api_key }
    }

    fn signed_url(&self, url: &Url) -> Url {
        let mut signed = url.clone();
        signed
            .query_pairs_mut()
            .append_pair(API_KEY_PARAM, self.api_key.as_str());
        signed
    }
}

#[async_trait]
impl HttpClient for AuthenticatedHttpClient {
    async fn get(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        trace!(key = %self.api_key, "Signing request");
        let signed = self.signed_url(url);
        self.decoratee.get(&signed).await
    }
}
