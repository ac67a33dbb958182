//! Poster image loader port definition.

use bytes::Bytes;

use crate::domain::errors::ImageLoadError;

/// Result delivered by a [`MovieImageDataLoader`].
pub type ImageLoadResult = Result<Bytes, ImageLoadError>;

/// Completion invoked at most once with the image bytes.
pub type ImageCompletion = Box<dyn FnOnce(ImageLoadResult) + Send + 'static>;

/// Handle for one in-flight image load.
pub trait MovieImageDataLoaderTask: Send + Sync {
    /// Abandons the load. The completion will not fire afterwards.
    ///
    /// Idempotent, and a no-op once the load has completed.
    fn cancel(&self);
}

/// Port for loading poster image bytes.
pub trait MovieImageDataLoader: Send + Sync {
    /// Starts loading the image at `image_path` and returns its task handle.
    fn load(&self, image_path: &str, completion: ImageCompletion)
    -> Box<dyn MovieImageDataLoaderTask>;
}
