//! Movie loader and cache port definitions.

use tokio::sync::oneshot;

use crate::domain::entities::Movie;
use crate::domain::errors::{MovieLoadError, StoreError};

/// Result delivered by a [`MovieLoader`].
pub type MovieLoadResult = Result<Vec<Movie>, MovieLoadError>;

/// Completion invoked at most once with the load result.
pub type LoadCompletion = Box<dyn FnOnce(MovieLoadResult) + Send + 'static>;

/// Result delivered by cache writes and validation.
pub type CacheWriteResult = Result<(), StoreError>;

/// Completion for cache writes.
pub type CacheWriteCompletion = Box<dyn FnOnce(CacheWriteResult) + Send + 'static>;

/// Port for loading the movie catalog.
///
/// `load` returns immediately; the completion fires later, or never if the
/// loader is dropped first.
pub trait MovieLoader: Send + Sync {
    /// Starts a load.
    fn load(&self, completion: LoadCompletion);
}

/// Port for replacing the cached catalog.
pub trait MovieCache: Send + Sync {
    /// Replaces the cached movies.
    fn save(&self, movies: Vec<Movie>, completion: CacheWriteCompletion);
}

/// Awaits one load from `loader`.
///
/// Returns `None` when the completion was dropped without firing, which is how
/// a released loader abandons pending work.
pub async fn load_movies<L: MovieLoader + ?Sized>(loader: &L) -> Option<MovieLoadResult> {
    let (tx, rx) = oneshot::channel();
    loader.load(Box::new(move |result| {
        let _ = tx.send(result);
    }));
    rx.await.ok()
}

/// Awaits one save into `cache`. Returns `None` if the completion was dropped.
pub async fn save_movies<C: MovieCache + ?Sized>(
    cache: &C,
    movies: Vec<Movie>,
) -> Option<CacheWriteResult> {
    let (tx, rx) = oneshot::channel();
    cache.save(
        movies,
        Box::new(move |result| {
            let _ = tx.send(result);
        }),
    );
    rx.await.ok()
}
