//! Loader composition services.

mod caching_movie_loader;
mod dispatching_loader;
mod fallback_movie_loader;

pub use caching_movie_loader::CachingMovieLoader;
pub use dispatching_loader::DispatchingLoader;
pub use fallback_movie_loader::FallbackMovieLoader;
