//! TMDB catalog and image adapters.

mod dto;
mod image_data_mapper;
mod remote_image_loader;
mod remote_movie_loader;
mod remote_movie_mapper;

pub use image_data_mapper::RemoteMovieImageDataMapper;
pub use remote_image_loader::{ImageDataLoadTask, RemoteMovieImageDataLoader};
pub use remote_movie_loader::RemoteMovieLoader;
pub use remote_movie_mapper::RemoteMovieMapper;

/// Default now-playing endpoint.
pub const NOW_PLAYING_URL: &str = "https://api.themoviedb.org/3/movie/now_playing";

/// Default poster base URL.
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500/";
