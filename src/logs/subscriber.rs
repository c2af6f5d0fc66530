//! # Log subscriber trait and subscription handle.
//!
//! [`LogSubscriber`] is the extension point for consuming the host's log
//! stream. Each attached subscriber gets a dedicated worker task that
//! forwards records sequentially (FIFO); a slow subscriber lags on its own
//! receiver without blocking publishers or other subscribers.
//!
//! ## Architecture
//! ```text
//! LogBus ──► [broadcast receiver] ──► worker task ──► subscriber.on_record()
//! ```
//!
//! ## Rules
//! - Records are processed sequentially per subscriber.
//! - A lagging subscriber skips the oldest records (logged, not fatal).
//! - Dropping the [`Subscription`] stops the worker; detaching twice is a
//!   no-op.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::broadcast::{error::RecvError, Receiver};
use tokio::task::JoinHandle;

use super::record::LogRecord;

/// Asynchronous consumer of host log records.
#[async_trait]
pub trait LogSubscriber: Send + Sync {
    /// Called once per delivered record, in publish order.
    async fn on_record(&self, record: &LogRecord);

    /// Short identifier used in diagnostics.
    fn name(&self) -> &'static str;
}

/// Handle pairing a subscriber's lifetime with its bus subscription.
///
/// The subscription is released exactly once: either by an explicit
/// [`Subscription::detach`] or when the handle is dropped.
#[derive(Debug)]
pub struct Subscription {
    worker: Option<JoinHandle<()>>,
}

impl Subscription {
    pub(crate) fn new(worker: JoinHandle<()>) -> Self {
        Self {
            worker: Some(worker),
        }
    }

    /// Stops the worker and releases the bus subscription.
    ///
    /// Safe to call more than once.
    pub fn detach(&mut self) {
        if let Some(worker) = self.worker.take() {
            worker.abort();
        }
    }

    /// Returns true while the subscription is still held.
    pub fn is_attached(&self) -> bool {
        self.worker.is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Receive loop driving one subscriber.
pub(crate) async fn subscriber_worker(
    mut rx: Receiver<LogRecord>,
    subscriber: Arc<dyn LogSubscriber>,
) {
    loop {
        match rx.recv().await {
            Ok(record) => subscriber.on_record(&record).await,
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(
                    subscriber = subscriber.name(),
                    skipped,
                    "log subscriber lagged; oldest records skipped"
                );
            }
            Err(RecvError::Closed) => break,
        }
    }
}
