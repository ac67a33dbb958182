//! Composite loader that falls back to a secondary source on failure.

use std::sync::Arc;

use tracing::warn;

use crate::domain::ports::{LoadCompletion, MovieLoader};

/// Loads from `primary`, retrying once against `fallback` when it fails.
pub struct FallbackMovieLoader {
    primary: Arc<dyn MovieLoader>,
    fallback: Arc<dyn MovieLoader>,
}

impl FallbackMovieLoader {
    #[must_use]
    pub fn new(primary: Arc<dyn MovieLoader>, fallback: Arc<dyn MovieLoader>) -> Self {
        Self { primary, fallback }
    }
}

impl MovieLoader for FallbackMovieLoader {
    fn load(&self, completion: LoadCompletion) {
        let fallback = self.fallback.clone();

        self.primary.load(Box::new(move |result| match result {
            Ok(movies) => completion(Ok(movies)),
            Err(e) => {
                warn!(
                    error = %e,
                    network = e.is_network_error(),
                    "Primary loader failed, using fallback"
                );
                fallback.load(completion);
            }
        }));
    }
}
