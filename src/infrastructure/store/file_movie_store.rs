//! JSON file backed movie store.

use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, trace, warn};

use crate::domain::entities::{CachedMovies, LocalMovie};
use crate::domain::errors::StoreError;
use crate::domain::ports::MovieStore;

/// On-disk layout: `{"movies": [...], "timestamp": "<RFC 3339>"}`.
#[derive(Serialize, Deserialize)]
struct StoredSnapshot {
    movies: Vec<LocalMovie>,
    timestamp: DateTime<Utc>,
}

/// Stores the snapshot as a single JSON document.
///
/// Operations are serialized through an async lock so a delete followed by an
/// insert from the same caller never interleaves with another writer.
pub struct FileMovieStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileMovieStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_atomically(path: &Path, content: &[u8]) -> Result<(), StoreError> {
        let parent = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(parent)?;

        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(content)?;
        temp_file.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}

#[async_trait]
impl MovieStore for FileMovieStore {
    async fn retrieve(&self) -> Result<Option<CachedMovies>, StoreError> {
        let _guard = self.lock.lock().await;

        let content = match fs::read(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                trace!(path = %self.path.display(), "No cache file");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let snapshot: StoredSnapshot = serde_json::from_slice(&content).map_err(|e| {
            warn!(path = %self.path.display(), error = %e, "Cache file is corrupted");
            StoreError::corrupted(e.to_string())
        })?;

        debug!(count = snapshot.movies.len(), "Read cache snapshot");
        Ok(Some(CachedMovies::new(snapshot.movies, snapshot.timestamp)))
    }

    async fn insert(
        &self,
        movies: Vec<LocalMovie>,
        timestamp: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;

        let count = movies.len();
        let content = serde_json::to_vec(&StoredSnapshot { movies, timestamp })
            .map_err(|e| StoreError::serialization(e.to_string()))?;

        let path = self.path.clone();
        tokio::task::spawn_blocking(move || Self::write_atomically(&path, &content))
            .await
            .map_err(|e| StoreError::io(format!("write task failed: {e}")))??;

        debug!(count, path = %self.path.display(), "Wrote cache snapshot");
        Ok(())
    }

    async fn delete_cached_movies(&self) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;

        match fs::remove_file(&self.path).await {
            Ok(()) => {
                debug!(path = %self.path.display(), "Deleted cache snapshot");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
