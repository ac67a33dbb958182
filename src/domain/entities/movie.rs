//! Movie entity.

use chrono::NaiveDate;

/// A "now playing" catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    id: i64,
    title: String,
    image_path: Option<String>,
    overview: Option<String>,
    release_date: Option<NaiveDate>,
    rating: Option<f64>,
}

impl Movie {
    /// Creates a movie from its catalog fields.
    #[must_use]
    pub fn new(
        id: i64,
        title: impl Into<String>,
        image_path: Option<String>,
        overview: Option<String>,
        release_date: Option<NaiveDate>,
        rating: Option<f64>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            image_path,
            overview,
            release_date,
            rating,
        }
    }

    /// Stable external identifier.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Poster path fragment, relative to the image base URL.
    #[must_use]
    pub fn image_path(&self) -> Option<&str> {
        self.image_path.as_deref()
    }

    #[must_use]
    pub fn overview(&self) -> Option<&str> {
        self.overview.as_deref()
    }

    #[must_use]
    pub const fn release_date(&self) -> Option<NaiveDate> {
        self.release_date
    }

    /// Average vote as reported by the catalog. Not clamped.
    #[must_use]
    pub const fn rating(&self) -> Option<f64> {
        self.rating
    }
}

impl std::fmt::Display for Movie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)?;
        if let Some(date) = self.release_date {
            write!(f, " ({})", date.format("%Y"))?;
        }
        Ok(())
    }
}
