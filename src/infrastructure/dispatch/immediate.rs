use crate::domain::ports::{DeliveryContext, DeliveryJob};

/// Runs every job inline on the calling task.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImmediateDelivery;

impl DeliveryContext for ImmediateDelivery {
    fn dispatch(&self, job: DeliveryJob) {
        job();
    }
}
