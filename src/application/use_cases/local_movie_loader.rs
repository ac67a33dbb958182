//! Local movie cache use case.

use std::sync::{Arc, Weak};

use tracing::{debug, trace, warn};

use crate::domain::entities::{LocalMovie, Movie};
use crate::domain::errors::MovieLoadError;
use crate::domain::ports::{
    CacheWriteCompletion, Clock, LoadCompletion, MovieCache, MovieLoader, MovieStore,
};
use crate::domain::services::MovieCachePolicy;

/// Reads, replaces and validates the cached catalog snapshot.
///
/// Every operation returns immediately and completes from a spawned task.
/// Spawned work only holds a weak reference to the loader, so dropping the
/// loader silently abandons pending completions.
pub struct LocalMovieLoader {
    inner: Arc<Inner>,
}

struct Inner {
    store: Arc<dyn MovieStore>,
    clock: Arc<dyn Clock>,
}

impl LocalMovieLoader {
    /// Creates a loader over `store`, timestamping saves with `clock`.
    #[must_use]
    pub fn new(store: Arc<dyn MovieStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Arc::new(Inner { store, clock }),
        }
    }

    /// Deletes the snapshot if it cannot be retrieved or is stale.
    ///
    /// Fresh and absent snapshots are left alone. The completion receives the
    /// deletion result, or `Ok(())` when nothing had to be deleted.
    pub fn validate_cache(&self, completion: CacheWriteCompletion) {
        let weak = Arc::downgrade(&self.inner);
        let store = self.inner.store.clone();

        tokio::spawn(async move {
            let retrieved = store.retrieve().await;
            let Some(inner) = alive(&weak) else { return };

            let should_delete = match &retrieved {
                Err(e) => {
                    warn!(error = %e, "Cache retrieval failed during validation");
                    true
                }
                Ok(Some(cache)) => !MovieCachePolicy::validate(cache.timestamp, inner.clock.now()),
                Ok(None) => false,
            };
            drop(inner);

            if !should_delete {
                trace!("Cache valid, nothing to delete");
                completion(Ok(()));
                return;
            }

            debug!("Deleting invalid cache");
            let result = store.delete_cached_movies().await;
            if alive(&weak).is_some() {
                completion(result);
            }
        });
    }
}

impl MovieLoader for LocalMovieLoader {
    fn load(&self, completion: LoadCompletion) {
        let weak = Arc::downgrade(&self.inner);
        let store = self.inner.store.clone();

        tokio::spawn(async move {
            let retrieved = store.retrieve().await;
            let Some(inner) = alive(&weak) else { return };

            match retrieved {
                Err(e) => {
                    warn!(error = %e, "Cache retrieval failed");
                    completion(Err(MovieLoadError::Store(e)));
                }
                Ok(Some(cache)) if MovieCachePolicy::validate(cache.timestamp, inner.clock.now()) => {
                    debug!(count = cache.movies.len(), "Cache hit");
                    completion(Ok(cache.into_movies()));
                }
                Ok(Some(cache)) => {
                    debug!(timestamp = %cache.timestamp, "Cache expired");
                    completion(Ok(Vec::new()));
                }
                Ok(None) => {
                    debug!("Cache empty");
                    completion(Ok(Vec::new()));
                }
            }
        });
    }
}

impl MovieCache for LocalMovieLoader {
    fn save(&self, movies: Vec<Movie>, completion: CacheWriteCompletion) {
        let weak = Arc::downgrade(&self.inner);
        let store = self.inner.store.clone();
        let locals: Vec<LocalMovie> = movies.iter().map(LocalMovie::from).collect();

        tokio::spawn(async move {
            let deleted = store.delete_cached_movies().await;
            let Some(inner) = alive(&weak) else { return };

            if let Err(e) = deleted {
                warn!(error = %e, "Cache deletion failed, skipping insert");
                completion(Err(e));
                return;
            }

            let timestamp = inner.clock.now();
            drop(inner);

            let count = locals.len();
            let inserted = store.insert(locals, timestamp).await;
            if alive(&weak).is_none() {
                return;
            }

            match &inserted {
                Ok(()) => debug!(count, %timestamp, "Cache saved"),
                Err(e) => warn!(error = %e, "Cache insertion failed"),
            }
            completion(inserted);
        });
    }
}

fn alive(weak: &Weak<Inner>) -> Option<Arc<Inner>> {
    let inner = weak.upgrade();
    if inner.is_none() {
        trace!("Local movie loader released, dropping completion");
    }
    inner
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::CachedMovies;
    use crate::domain::errors::StoreError;
    use crate::domain::ports::mocks::{MockClock, MovieStoreSpy, ReceivedMessage};
    use crate::domain::ports::{CacheWriteResult, load_movies, save_movies};
    use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
    use tokio::sync::oneshot;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 2, 24, 18, 0, 0).unwrap()
    }

    fn make_sut(store: &Arc<MovieStoreSpy>, now: DateTime<Utc>) -> LocalMovieLoader {
        let mut clock = MockClock::new();
        clock.expect_now().return_const(now);
        LocalMovieLoader::new(store.clone(), Arc::new(clock))
    }

    fn unique_movies() -> (Vec<Movie>, Vec<LocalMovie>) {
        let movies = vec![
            Movie::new(
                1,
                "First",
                Some("/first.jpg".to_string()),
                Some("overview".to_string()),
                NaiveDate::from_ymd_opt(2023, 1, 1),
                Some(6.4),
            ),
            Movie::new(2, "Second", None, None, None, None),
        ];
        let locals = movies.iter().map(LocalMovie::from).collect();
        (movies, locals)
    }

    fn snapshot(locals: Vec<LocalMovie>, age: Duration) -> CachedMovies {
        CachedMovies::new(locals, fixed_now() - age)
    }

    async fn validate(loader: &LocalMovieLoader) -> Option<CacheWriteResult> {
        let (tx, rx) = oneshot::channel();
        loader.validate_cache(Box::new(move |result| {
            let _ = tx.send(result);
        }));
        rx.await.ok()
    }

    fn store_error() -> StoreError {
        StoreError::io("any error")
    }

    #[tokio::test]
    async fn test_load_requests_cache_retrieval() {
        let store = Arc::new(MovieStoreSpy::new());
        let sut = make_sut(&store, fixed_now());

        let _ = load_movies(&sut).await;

        assert_eq!(store.messages(), vec![ReceivedMessage::Retrieve]);
    }

    #[tokio::test]
    async fn test_load_fails_on_retrieval_error() {
        let store = Arc::new(MovieStoreSpy::new());
        store.stub_retrieval(Err(store_error()));
        let sut = make_sut(&store, fixed_now());

        let result = load_movies(&sut).await;

        assert_eq!(result, Some(Err(MovieLoadError::Store(store_error()))));
    }

    #[tokio::test]
    async fn test_load_delivers_nothing_on_missing_cache_without_consulting_clock() {
        let store = Arc::new(MovieStoreSpy::new());
        store.stub_retrieval(Ok(None));
        let mut clock = MockClock::new();
        clock.expect_now().never();
        let sut = LocalMovieLoader::new(store.clone(), Arc::new(clock));

        let result = load_movies(&sut).await;

        assert_eq!(result, Some(Ok(Vec::new())));
    }

    #[tokio::test]
    async fn test_load_delivers_nothing_on_empty_fresh_cache_after_consulting_clock() {
        let store = Arc::new(MovieStoreSpy::new());
        store.stub_retrieval(Ok(Some(snapshot(Vec::new(), Duration::days(1)))));
        let mut clock = MockClock::new();
        clock.expect_now().times(1).return_const(fixed_now());
        let sut = LocalMovieLoader::new(store.clone(), Arc::new(clock));

        let result = load_movies(&sut).await;

        assert_eq!(result, Some(Ok(Vec::new())));
    }

    #[tokio::test]
    async fn test_load_delivers_movies_on_fresh_cache() {
        let (movies, locals) = unique_movies();
        let store = Arc::new(MovieStoreSpy::new());
        store.stub_retrieval(Ok(Some(snapshot(
            locals,
            Duration::days(7) - Duration::seconds(1),
        ))));
        let sut = make_sut(&store, fixed_now());

        let result = load_movies(&sut).await;

        assert_eq!(result, Some(Ok(movies)));
    }

    #[tokio::test]
    async fn test_load_delivers_nothing_on_expiring_cache() {
        let (_, locals) = unique_movies();
        let store = Arc::new(MovieStoreSpy::new());
        store.stub_retrieval(Ok(Some(snapshot(locals, Duration::days(7)))));
        let sut = make_sut(&store, fixed_now());

        let result = load_movies(&sut).await;

        assert_eq!(result, Some(Ok(Vec::new())));
    }

    #[tokio::test]
    async fn test_load_does_not_delete_expired_cache() {
        let (_, locals) = unique_movies();
        let store = Arc::new(MovieStoreSpy::new());
        store.stub_retrieval(Ok(Some(snapshot(locals, Duration::days(30)))));
        let sut = make_sut(&store, fixed_now());

        let result = load_movies(&sut).await;

        assert_eq!(result, Some(Ok(Vec::new())));
        assert_eq!(store.messages(), vec![ReceivedMessage::Retrieve]);
    }

    #[tokio::test]
    async fn test_load_does_not_deliver_after_loader_dropped() {
        let (_, locals) = unique_movies();
        let store = Arc::new(MovieStoreSpy::new());
        store.stub_retrieval(Ok(Some(snapshot(locals, Duration::days(1)))));
        let release = store.hold_next_call();
        let sut = make_sut(&store, fixed_now());

        let (tx, rx) = oneshot::channel();
        sut.load(Box::new(move |result| {
            let _ = tx.send(result);
        }));
        store.wait_for_messages(1).await;

        drop(sut);
        let _ = release.send(());

        assert!(rx.await.is_err());
    }

    #[tokio::test]
    async fn test_save_requests_deletion_before_insertion() {
        let (movies, locals) = unique_movies();
        let store = Arc::new(MovieStoreSpy::new());
        let sut = make_sut(&store, fixed_now());

        let result = save_movies(&sut, movies).await;

        assert_eq!(result, Some(Ok(())));
        assert_eq!(
            store.messages(),
            vec![
                ReceivedMessage::Delete,
                ReceivedMessage::Insert(locals, fixed_now())
            ]
        );
    }

    #[tokio::test]
    async fn test_save_does_not_insert_on_deletion_error() {
        let (movies, _) = unique_movies();
        let store = Arc::new(MovieStoreSpy::new());
        store.stub_deletion(Err(store_error()));
        let sut = make_sut(&store, fixed_now());

        let result = save_movies(&sut, movies).await;

        assert_eq!(result, Some(Err(store_error())));
        assert_eq!(store.messages(), vec![ReceivedMessage::Delete]);
    }

    #[tokio::test]
    async fn test_save_fails_on_insertion_error() {
        let (movies, _) = unique_movies();
        let store = Arc::new(MovieStoreSpy::new());
        store.stub_insertion(Err(StoreError::serialization("bad")));
        let sut = make_sut(&store, fixed_now());

        let result = save_movies(&sut, movies).await;

        assert_eq!(result, Some(Err(StoreError::serialization("bad"))));
    }

    #[tokio::test]
    async fn test_save_does_not_deliver_insertion_result_after_loader_dropped() {
        let (movies, _) = unique_movies();
        let store = Arc::new(MovieStoreSpy::new());
        let release = store.hold_call(1);
        let sut = make_sut(&store, fixed_now());

        let (tx, rx) = oneshot::channel();
        sut.save(
            movies,
            Box::new(move |result| {
                let _ = tx.send(result);
            }),
        );
        store.wait_for_messages(2).await;

        drop(sut);
        let _ = release.send(());

        assert!(rx.await.is_err());
    }

    #[tokio::test]
    async fn test_validate_deletes_cache_on_retrieval_error() {
        let store = Arc::new(MovieStoreSpy::new());
        store.stub_retrieval(Err(store_error()));
        let sut = make_sut(&store, fixed_now());

        let result = validate(&sut).await;

        assert_eq!(result, Some(Ok(())));
        assert_eq!(
            store.messages(),
            vec![ReceivedMessage::Retrieve, ReceivedMessage::Delete]
        );
    }

    #[tokio::test]
    async fn test_validate_does_not_delete_missing_cache() {
        let store = Arc::new(MovieStoreSpy::new());
        let sut = make_sut(&store, fixed_now());

        let result = validate(&sut).await;

        assert_eq!(result, Some(Ok(())));
        assert_eq!(store.messages(), vec![ReceivedMessage::Retrieve]);
    }

    #[tokio::test]
    async fn test_validate_does_not_delete_fresh_cache() {
        let (_, locals) = unique_movies();
        let store = Arc::new(MovieStoreSpy::new());
        store.stub_retrieval(Ok(Some(snapshot(locals, Duration::days(3)))));
        let sut = make_sut(&store, fixed_now());

        let _ = validate(&sut).await;

        assert_eq!(store.messages(), vec![ReceivedMessage::Retrieve]);
    }

    #[tokio::test]
    async fn test_validate_deletes_expired_cache_and_reports_failure() {
        let (_, locals) = unique_movies();
        let store = Arc::new(MovieStoreSpy::new());
        store.stub_retrieval(Ok(Some(snapshot(locals, Duration::days(7)))));
        store.stub_deletion(Err(store_error()));
        let sut = make_sut(&store, fixed_now());

        let result = validate(&sut).await;

        assert_eq!(result, Some(Err(store_error())));
        assert_eq!(
            store.messages(),
            vec![ReceivedMessage::Retrieve, ReceivedMessage::Delete]
        );
    }

    #[tokio::test]
    async fn test_validate_does_not_delete_after_loader_dropped() {
        let store = Arc::new(MovieStoreSpy::new());
        store.stub_retrieval(Err(store_error()));
        let release = store.hold_next_call();
        let sut = make_sut(&store, fixed_now());

        let (tx, rx) = oneshot::channel();
        sut.validate_cache(Box::new(move |result| {
            let _ = tx.send(result);
        }));
        store.wait_for_messages(1).await;

        drop(sut);
        let _ = release.send(());

        assert!(rx.await.is_err());
        assert_eq!(store.messages(), vec![ReceivedMessage::Retrieve]);
    }
}
