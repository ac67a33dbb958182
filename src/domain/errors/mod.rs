//! Domain error types.

mod load_error;
mod store_error;
mod transport_error;

pub use load_error::{ImageLoadError, MovieLoadError};
pub use store_error::StoreError;
pub use transport_error::TransportError;
