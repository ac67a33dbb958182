mod clock_port;
mod delivery_port;
mod http_client_port;
mod image_loader_port;
mod movie_loader_port;
mod movie_store_port;

pub use clock_port::{Clock, SystemClock};
pub use delivery_port::{DeliveryContext, DeliveryJob};
pub use http_client_port::{HttpClient, HttpResponse};
pub use image_loader_port::{
    ImageCompletion, ImageLoadResult, MovieImageDataLoader, MovieImageDataLoaderTask,
};
pub use movie_loader_port::{
    CacheWriteCompletion, CacheWriteResult, LoadCompletion, MovieCache, MovieLoadResult,
    MovieLoader, load_movies, save_movies,
};
pub use movie_store_port::MovieStore;
