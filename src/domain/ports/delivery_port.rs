//! Completion delivery context port.

/// Unit of work handed to a delivery context.
pub type DeliveryJob = Box<dyn FnOnce() + Send + 'static>;

/// Decides where loader completions run, e.g. on the task that owns the UI.
pub trait DeliveryContext: Send + Sync {
    /// Schedules `job` on this context.
    fn dispatch(&self, job: DeliveryJob);
}
