//! Application layer with use cases and loader composition.

/// Loader decorators and composites.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use services::{CachingMovieLoader, DispatchingLoader, FallbackMovieLoader};
pub use use_cases::LocalMovieLoader;
