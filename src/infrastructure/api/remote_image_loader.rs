//! Cancellable poster image loader.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tokio::task::AbortHandle;
use tracing::{debug, trace};
use url::Url;

use super::image_data_mapper::RemoteMovieImageDataMapper;
use crate::domain::errors::ImageLoadError;
use crate::domain::ports::{
    HttpClient, ImageCompletion, ImageLoadResult, MovieImageDataLoader, MovieImageDataLoaderTask,
};

/// Loads poster bytes from `base_url` joined with the image path.
pub struct RemoteMovieImageDataLoader {
    inner: Arc<Inner>,
}

struct Inner {
    base_url: Url,
    client: Arc<dyn HttpClient>,
}

impl RemoteMovieImageDataLoader {
    #[must_use]
    pub fn new(base_url: Url, client: Arc<dyn HttpClient>) -> Self {
        Self {
            inner: Arc::new(Inner { base_url, client }),
        }
    }

    /// Appends `image_path` to the base URL as path segments.
    ///
    /// A leading `/` on the path, as TMDB returns them, is ignored.
    #[must_use]
    pub fn image_url(&self, image_path: &str) -> Url {
        let mut url = self.inner.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(image_path.split('/').filter(|s| !s.is_empty()));
        }
        url
    }
}

impl MovieImageDataLoader for RemoteMovieImageDataLoader {
    fn load(
        &self,
        image_path: &str,
        completion: ImageCompletion,
    ) -> Box<dyn MovieImageDataLoaderTask> {
        let task = Arc::new(TaskState::new(completion));
        let url = self.image_url(image_path);
        let weak: Weak<Inner> = Arc::downgrade(&self.inner);
        let client = self.inner.client.clone();
        let pending = task.clone();

        debug!(url = %url, "Loading poster image");

        let handle = tokio::spawn(async move {
            let result = client.get(&url).await;

            if weak.upgrade().is_none() {
                trace!("Image loader released, dropping completion");
                return;
            }

            pending.complete(match result {
                Ok(response) => RemoteMovieImageDataMapper::map(response),
                Err(e) => Err(ImageLoadError::Transport(e)),
            });
        });
        task.attach(handle.abort_handle());

        Box::new(ImageDataLoadTask(task))
    }
}

/// Handle returned for each image load.
pub struct ImageDataLoadTask(Arc<TaskState>);

impl MovieImageDataLoaderTask for ImageDataLoadTask {
    fn cancel(&self) {
        self.0.cancel();
    }
}

/// Completion and transport handle of one load. Whichever of `complete` and
/// `cancel` runs first takes the completion; the other finds `None`.
struct TaskState {
    inner: Mutex<TaskSlots>,
}

struct TaskSlots {
    completion: Option<ImageCompletion>,
    transport: Option<AbortHandle>,
}

impl TaskState {
    fn new(completion: ImageCompletion) -> Self {
        Self {
            inner: Mutex::new(TaskSlots {
                completion: Some(completion),
                transport: None,
            }),
        }
    }

    fn attach(&self, transport: AbortHandle) {
        let mut slots = self.inner.lock();
        if slots.completion.is_some() {
            slots.transport = Some(transport);
        }
    }

    fn complete(&self, result: ImageLoadResult) {
        let completion = {
            let mut slots = self.inner.lock();
            slots.transport = None;
            slots.completion.take()
        };
        if let Some(completion) = completion {
            completion(result);
        }
    }

    fn cancel(&self) {
        let (completion, transport) = {
            let mut slots = self.inner.lock();
            (slots.completion.take(), slots.transport.take())
        };

        if completion.is_some() {
            debug!("Cancelled image load");
        }
        drop(completion);

        if let Some(transport) = transport {
            transport.abort();
        }
    }
}
