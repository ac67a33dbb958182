//! Movie store port definition.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::{CachedMovies, LocalMovie};
use crate::domain::errors::StoreError;

/// Port for persisting the movie cache snapshot.
///
/// Implementations serialize their own I/O; callers only sequence their calls.
#[async_trait]
pub trait MovieStore: Send + Sync {
    /// Returns the stored snapshot, or `None` when no cache exists.
    async fn retrieve(&self) -> Result<Option<CachedMovies>, StoreError>;

    /// Replaces any existing snapshot.
    async fn insert(
        &self,
        movies: Vec<LocalMovie>,
        timestamp: DateTime<Utc>,
    ) -> Result<(), StoreError>;

    /// Removes the snapshot. Succeeds when there is nothing to delete.
    async fn delete_cached_movies(&self) -> Result<(), StoreError>;
}
