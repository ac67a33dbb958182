//! Decorator that routes loader completions through a delivery context.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::domain::ports::{
    DeliveryContext, ImageCompletion, LoadCompletion, MovieImageDataLoader,
    MovieImageDataLoaderTask, MovieLoader,
};

/// Wraps any loader so its completions run on `context`.
///
/// Image task handles are wrapped so that a cancel issued after the decoratee
/// finished, but before the queued job ran, still suppresses delivery.
pub struct DispatchingLoader<T: ?Sized> {
    decoratee: Arc<T>,
    context: Arc<dyn DeliveryContext>,
}

impl<T: ?Sized> DispatchingLoader<T> {
    #[must_use]
    pub fn new(decoratee: Arc<T>, context: Arc<dyn DeliveryContext>) -> Self {
        Self { decoratee, context }
    }
}

impl<T: MovieLoader + ?Sized> MovieLoader for DispatchingLoader<T> {
    fn load(&self, completion: LoadCompletion) {
        let context = self.context.clone();
        self.decoratee.load(Box::new(move |result| {
            context.dispatch(Box::new(move || completion(result)));
        }));
    }
}

impl<T: MovieImageDataLoader + ?Sized> MovieImageDataLoader for DispatchingLoader<T> {
    fn load(
        &self,
        image_path: &str,
        completion: ImageCompletion,
    ) -> Box<dyn MovieImageDataLoaderTask> {
        let context = self.context.clone();
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = cancelled.clone();

        let task = self.decoratee.load(
            image_path,
            Box::new(move |result| {
                context.dispatch(Box::new(move || {
                    if !flag.load(Ordering::SeqCst) {
                        completion(result);
                    }
                }));
            }),
        );

        Box::new(DispatchedTask { task, cancelled })
    }
}

struct DispatchedTask {
    task: Box<dyn MovieImageDataLoaderTask>,
    cancelled: Arc<AtomicBool>,
}

impl MovieImageDataLoaderTask for DispatchedTask {
    fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        self.task.cancel();
    }
}
