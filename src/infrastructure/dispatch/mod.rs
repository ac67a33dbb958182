//! Delivery contexts for loader completions.

mod immediate;
mod main_queue;

pub use immediate::ImmediateDelivery;
pub use main_queue::{MainQueue, MainQueueReceiver};
