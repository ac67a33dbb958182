//! Single-consumer job queue standing in for a UI thread.

use std::future::Future;

use tokio::sync::mpsc;
use tracing::trace;

use crate::domain::ports::{DeliveryContext, DeliveryJob};

/// Sending half. Cheap to clone; jobs dispatched after the receiver is gone
/// are dropped.
#[derive(Clone)]
pub struct MainQueue {
    tx: mpsc::UnboundedSender<DeliveryJob>,
}

/// Receiving half, owned by the task that must run completions.
pub struct MainQueueReceiver {
    rx: mpsc::UnboundedReceiver<DeliveryJob>,
}

impl MainQueue {
    /// Creates a connected queue and receiver.
    #[must_use]
    pub fn new() -> (Self, MainQueueReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, MainQueueReceiver { rx })
    }
}

impl DeliveryContext for MainQueue {
    fn dispatch(&self, job: DeliveryJob) {
        if self.tx.send(job).is_err() {
            trace!("Main queue closed, dropping job");
        }
    }
}

impl MainQueueReceiver {
    /// Runs queued jobs until `until` resolves, then returns its output.
    ///
    /// Jobs already queued when `until` finishes stay queued; call [`drain`]
    /// to run them.
    ///
    /// [`drain`]: Self::drain
    pub async fn run_until<F: Future>(&mut self, until: F) -> F::Output {
        tokio::pin!(until);
        loop {
            tokio::select! {
                biased;
                output = &mut until => return output,
                Some(job) = self.rx.recv() => job(),
            }
        }
    }

    /// Runs every job queued so far without waiting. Returns how many ran.
    pub fn drain(&mut self) -> usize {
        let mut ran = 0;
        while let Ok(job) = self.rx.try_recv() {
            job();
            ran += 1;
        }
        ran
    }

    /// Waits for the next job and runs it. Returns false once every sender
    /// is gone.
    pub async fn run_next(&mut self) -> bool {
        match self.rx.recv().await {
            Some(job) => {
                job();
                true
            }
            None => false,
        }
    }
}
