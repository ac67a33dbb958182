//! Loader decorator that writes every successful load into the cache.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::ports::{LoadCompletion, MovieCache, MovieLoader};

/// Forwards loads to `decoratee` and saves successful results into `cache`.
///
/// The save result never affects what the caller receives.
pub struct CachingMovieLoader {
    decoratee: Arc<dyn MovieLoader>,
    cache: Arc<dyn MovieCache>,
}

impl CachingMovieLoader {
    /// Creates new caching decorator.
    #[must_use]
    pub fn new(decoratee: Arc<dyn MovieLoader>, cache: Arc<dyn MovieCache>) -> Self {
        Self { decoratee, cache }
    }
}

impl MovieLoader for CachingMovieLoader {
    fn load(&self, completion: LoadCompletion) {
        let cache = self.cache.clone();

        self.decoratee.load(Box::new(move |result| {
            if let Ok(movies) = &result {
                let count = movies.len();
                cache.save(
                    movies.clone(),
                    Box::new(move |saved| match saved {
                        Ok(()) => debug!(count, "Cached loaded movies"),
                        Err(e) => warn!(error = %e, "Failed to cache loaded movies"),
                    }),
                );
            }
            completion(result);
        }));
    }
}
