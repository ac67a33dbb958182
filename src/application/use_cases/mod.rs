//! Use case implementations.

mod local_movie_loader;

pub use local_movie_loader::LocalMovieLoader;
