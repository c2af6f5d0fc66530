//! Log stream: records, broadcast bus, and subscribers.
//!
//! The host application delivers its diagnostic log lines to the bridge by
//! publishing [`LogRecord`]s on a [`LogBus`]. Consumers attach a
//! [`LogSubscriber`] and receive records asynchronously on a dedicated
//! worker task.
//!
//! ## Contents
//! - [`LogRecord`], [`Severity`] — the log data model
//! - [`LogBus`] — thin wrapper over `tokio::sync::broadcast`
//! - [`LogSubscriber`], [`Subscription`] — the handler extension point and
//!   its lifetime handle
//!
//! ## Quick reference
//! - **Publishers**: the host's log hook (any thread with a bus handle).
//! - **Consumers**: [`CompileErrorGate`](crate::CompileErrorGate) and any
//!   user-supplied subscriber.

mod bus;
mod record;
mod subscriber;

pub use bus::LogBus;
pub use record::{LogRecord, Severity};
pub use subscriber::{LogSubscriber, Subscription};
