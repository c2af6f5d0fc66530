//! # Broadcast bus for host log records.
//!
//! [`LogBus`] is a thin wrapper around [`tokio::sync::broadcast`] that lets
//! the host publish log lines from any thread while subscribers consume them
//! asynchronously.
//!
//! ## Rules
//! - **Non-blocking publish**: `publish()` never blocks or awaits.
//! - **Bounded capacity**: a single ring buffer stores recent records for
//!   all receivers.
//! - **Lag handling**: slow receivers observe `RecvError::Lagged(n)` and
//!   skip the `n` oldest records.
//! - **No persistence**: records are lost if nobody is subscribed at send
//!   time.

use std::sync::Arc;

use tokio::sync::broadcast;

use super::record::LogRecord;
use super::subscriber::{subscriber_worker, LogSubscriber, Subscription};

/// Broadcast channel for host log records.
///
/// Cheap to clone (internally holds an `Arc`-backed sender); every clone
/// publishes into the same ring buffer.
#[derive(Clone, Debug)]
pub struct LogBus {
    tx: broadcast::Sender<LogRecord>,
}

impl LogBus {
    /// Creates a new bus with the given channel capacity (clamped to ≥ 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (tx, _rx) = broadcast::channel::<LogRecord>(capacity);
        Self { tx }
    }

    /// Publishes a record to all current subscribers.
    ///
    /// Fire-and-forget: a send error only means nobody is listening.
    pub fn publish(&self, record: LogRecord) {
        let _ = self.tx.send(record);
    }

    /// Opens a raw receiver on the bus.
    ///
    /// Most consumers should prefer [`LogBus::attach`], which owns the
    /// receive loop and pairs subscription lifetime with a handle.
    pub fn subscribe(&self) -> broadcast::Receiver<LogRecord> {
        self.tx.subscribe()
    }

    /// Attaches a subscriber on its own worker task.
    ///
    /// The worker forwards every record to `subscriber.on_record()` in
    /// publish order and exits when the returned [`Subscription`] is
    /// detached or dropped. Requires a Tokio runtime context.
    pub fn attach(&self, subscriber: Arc<dyn LogSubscriber>) -> Subscription {
        let rx = self.tx.subscribe();
        let worker = tokio::spawn(subscriber_worker(rx, subscriber));
        Subscription::new(worker)
    }

    /// Number of currently open receivers.
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}
