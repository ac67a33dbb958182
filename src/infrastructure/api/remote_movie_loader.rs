//! Now-playing catalog loader over HTTP.

use std::sync::{Arc, Weak};

use tracing::{debug, trace, warn};
use url::Url;

use super::remote_movie_mapper::RemoteMovieMapper;
use crate::domain::errors::MovieLoadError;
use crate::domain::ports::{HttpClient, LoadCompletion, MovieLoader};

/// Fetches the catalog from `url` with a single GET per load.
///
/// No retries. Completions are dropped if the loader is released before the
/// response arrives.
pub struct RemoteMovieLoader {
    inner: Arc<Inner>,
}

struct Inner {
    url: Url,
    client: Arc<dyn HttpClient>,
}

impl RemoteMovieLoader {
    #[must_use]
    pub fn new(url: Url, client: Arc<dyn HttpClient>) -> Self {
        Self {
            inner: Arc::new(Inner { url, client }),
        }
    }

    /// Endpoint this loader reads from.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.inner.url
    }
}

impl MovieLoader for RemoteMovieLoader {
    fn load(&self, completion: LoadCompletion) {
        let weak: Weak<Inner> = Arc::downgrade(&self.inner);
        let url = self.inner.url.clone();
        let client = self.inner.client.clone();

        tokio::spawn(async move {
            let result = client.get(&url).await;

            if weak.upgrade().is_none() {
                trace!("Remote movie loader released, dropping completion");
                return;
            }

            match result {
                Ok(response) => {
                    let mapped = RemoteMovieMapper::map(&response);
                    if let Ok(movies) = &mapped {
                        debug!(count = movies.len(), "Catalog loaded");
                    }
                    completion(mapped);
                }
                Err(e) => {
                    warn!(error = %e, "Catalog request failed");
                    completion(Err(MovieLoadError::Transport(e)));
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Movie;
    use crate::domain::errors::TransportError;
    use crate::domain::ports::MovieLoadResult;
    use crate::domain::ports::mocks::HttpClientSpy;
    use serde_json::json;
    use tokio::sync::oneshot;

    fn any_url() -> Url {
        Url::parse("https://api.themoviedb.org/3/movie/now_playing").unwrap()
    }

    fn make_sut() -> (RemoteMovieLoader, Arc<HttpClientSpy>) {
        let client = Arc::new(HttpClientSpy::new());
        let sut = RemoteMovieLoader::new(any_url(), client.clone());
        (sut, client)
    }

    fn start_load(sut: &RemoteMovieLoader) -> oneshot::Receiver<MovieLoadResult> {
        let (tx, rx) = oneshot::channel();
        sut.load(Box::new(move |result| {
            let _ = tx.send(result);
        }));
        rx
    }

    async fn load_completing_with(
        status: u16,
        body: impl Into<bytes::Bytes>,
    ) -> MovieLoadResult {
        let (sut, client) = make_sut();
        let rx = start_load(&sut);
        client.wait_for_requests(1).await;
        client.complete_with(0, status, body);
        rx.await.unwrap()
    }

    #[tokio::test]
    async fn test_init_does_not_request() {
        let (_sut, client) = make_sut();
        tokio::task::yield_now().await;
        assert!(client.requested_urls().is_empty());
    }

    #[tokio::test]
    async fn test_load_requests_url_once() {
        let (sut, client) = make_sut();

        let rx = start_load(&sut);
        client.wait_for_requests(1).await;
        client.complete_with(0, 200, r#"{"results":[]}"#);
        let _ = rx.await;

        assert_eq!(client.requested_urls(), vec![any_url()]);
    }

    #[tokio::test]
    async fn test_load_twice_requests_twice() {
        let (sut, client) = make_sut();

        let _first = start_load(&sut);
        let _second = start_load(&sut);
        client.wait_for_requests(2).await;

        assert_eq!(client.requested_urls(), vec![any_url(), any_url()]);
    }

    #[tokio::test]
    async fn test_load_delivers_transport_error() {
        let (sut, client) = make_sut();

        let rx = start_load(&sut);
        client.wait_for_requests(1).await;
        client.complete(0, Err(TransportError::connect("offline")));

        assert_eq!(
            rx.await.unwrap(),
            Err(MovieLoadError::Transport(TransportError::connect("offline")))
        );
    }

    #[tokio::test]
    async fn test_load_delivers_invalid_data_on_500_with_empty_body() {
        let result = load_completing_with(500, "").await;
        assert_eq!(result, Err(MovieLoadError::InvalidData));
    }

    #[tokio::test]
    async fn test_load_delivers_no_movies_on_empty_results() {
        let result = load_completing_with(200, r#"{"results":[]}"#).await;
        assert_eq!(result, Ok(Vec::new()));
    }

    #[tokio::test]
    async fn test_load_drops_malformed_entries() {
        let body = json!({
            "results": [
                { "title": "Missing id", "overview": "x" },
                { "id": 10, "overview": "Missing title" },
                { "id": 11, "title": "Kept", "release_date": "2023-03-01" }
            ]
        });

        let result = load_completing_with(200, serde_json::to_vec(&body).unwrap()).await;

        assert_eq!(
            result,
            Ok(vec![Movie::new(
                11,
                "Kept",
                None,
                None,
                chrono::NaiveDate::from_ymd_opt(2023, 3, 1),
                None
            )])
        );
    }

    #[tokio::test]
    async fn test_load_does_not_deliver_after_loader_dropped() {
        let (sut, client) = make_sut();

        let rx = start_load(&sut);
        client.wait_for_requests(1).await;
        drop(sut);
        client.complete_with(0, 200, r#"{"results":[]}"#);

        assert!(rx.await.is_err());
    }
}
