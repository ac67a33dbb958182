use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::domain::entities::{CachedMovies, LocalMovie};
use crate::domain::errors::StoreError;
use crate::domain::ports::MovieStore;

/// Process-local store, used when no cache path is configured.
#[derive(Default)]
pub struct InMemoryMovieStore {
    snapshot: RwLock<Option<CachedMovies>>,
}

impl InMemoryMovieStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MovieStore for InMemoryMovieStore {
    async fn retrieve(&self) -> Result<Option<CachedMovies>, StoreError> {
        Ok(self.snapshot.read().clone())
    }

    async fn insert(
        &self,
        movies: Vec<LocalMovie>,
        timestamp: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        *self.snapshot.write() = Some(CachedMovies::new(movies, timestamp));
        Ok(())
    }

    async fn delete_cached_movies(&self) -> Result<(), StoreError> {
        self.snapshot.write().take();
        Ok(())
    }
}
