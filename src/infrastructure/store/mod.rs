//! Movie cache store adapters.

mod file_movie_store;
mod in_memory_movie_store;

pub use file_movie_store::FileMovieStore;
pub use in_memory_movie_store::InMemoryMovieStore;
