//! Domain entity definitions.

mod api_key;
mod local_movie;
mod movie;

pub use api_key::ApiKey;
pub use local_movie::{CachedMovies, LocalMovie};
pub use movie::Movie;
