//! Console log utility: query and clear the host's buffered log entries.
//!
//! The host keeps a console buffer of raw entries, each tagged with an
//! internal bitmask. [`fetch_logs`] normalizes that bitmask into a severity
//! tag, filters by tag set and regex, optionally truncates messages to
//! their first line, orders the result, and caps it. [`clear_logs`] empties
//! the buffer unconditionally.
//!
//! ## Contents
//! - [`ConsoleSource`], [`RawConsoleEntry`] — the host buffer contract
//! - [`LogKind`], [`LogEntry`] — normalized output shape
//! - [`LogQuery`], [`fetch_logs`], [`clear_logs`] — the query surface

mod entry;
mod query;
mod source;

pub use entry::{
    LogEntry, LogKind, RawConsoleEntry, MODE_COMPILE_ERROR, MODE_COMPILE_WARNING, MODE_ERROR,
    MODE_LOG, MODE_WARNING,
};
pub use query::{clear_logs, fetch_logs, LogQuery};
pub use source::{ConsoleSource, MemoryConsole};
