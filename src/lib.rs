//! Cinematime - TMDB now-playing catalog with an offline cache.
//!
//! This crate loads the now-playing movie list from TMDB, keeps a local
//! snapshot that stays valid for seven days, and fetches poster images with
//! per-request cancellation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the cache use case and loader composition.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "cinematime";
