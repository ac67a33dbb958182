//! Domain layer with core business entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;
/// Pure domain rules.
pub mod services;

pub use entities::{ApiKey, CachedMovies, LocalMovie, Movie};
pub use errors::{ImageLoadError, MovieLoadError, StoreError, TransportError};
pub use services::MovieCachePolicy;
