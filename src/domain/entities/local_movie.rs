//! Persisted representation of the movie cache.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::Movie;

/// Store-facing mirror of [`Movie`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalMovie {
    pub id: i64,
    pub title: String,
    pub image_path: Option<String>,
    pub overview: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub rating: Option<f64>,
}

impl From<&Movie> for LocalMovie {
    fn from(movie: &Movie) -> Self {
        Self {
            id: movie.id(),
            title: movie.title().to_string(),
            image_path: movie.image_path().map(String::from),
            overview: movie.overview().map(String::from),
            release_date: movie.release_date(),
            rating: movie.rating(),
        }
    }
}

impl From<LocalMovie> for Movie {
    fn from(local: LocalMovie) -> Self {
        Self::new(
            local.id,
            local.title,
            local.image_path,
            local.overview,
            local.release_date,
            local.rating,
        )
    }
}

/// A full cache snapshot: the movies plus the instant they were captured.
///
/// Snapshots are replaced wholesale on every save and never patched.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedMovies {
    pub movies: Vec<LocalMovie>,
    pub timestamp: DateTime<Utc>,
}

impl CachedMovies {
    #[must_use]
    pub const fn new(movies: Vec<LocalMovie>, timestamp: DateTime<Utc>) -> Self {
        Self { movies, timestamp }
    }

    /// Converts the snapshot's movies back into domain form.
    #[must_use]
    pub fn into_movies(self) -> Vec<Movie> {
        self.movies.into_iter().map(Movie::from).collect()
    }
}
