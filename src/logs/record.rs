//! # Log records delivered by the host application.
//!
//! [`LogRecord`] mirrors the host's threaded log callback payload: a message,
//! an optional stack trace, and a [`Severity`] class. Records are cheap to
//! clone and carry no ordering metadata; the bus delivers them in publish
//! order to each subscriber.

/// Severity class of a log record, as reported by the host.
///
/// Only [`Severity::Error`] participates in sentinel matching; assertion
/// failures and uncaught exceptions are distinct classes and do not trip a
/// [`CompileErrorGate`](crate::CompileErrorGate).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    /// An explicit error log.
    Error,
    /// A failed assertion.
    Assert,
    /// A warning.
    Warning,
    /// An informational message.
    Log,
    /// An uncaught exception surfaced by the host runtime.
    Exception,
}

impl Severity {
    /// Returns a short stable label (lowercase) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Assert => "assert",
            Severity::Warning => "warning",
            Severity::Log => "log",
            Severity::Exception => "exception",
        }
    }
}

/// One log line delivered through the [`LogBus`](crate::LogBus).
#[derive(Clone, Debug)]
pub struct LogRecord {
    /// The log message, verbatim.
    pub message: String,
    /// Stack trace accompanying the message; may be empty.
    pub trace: String,
    /// Severity class.
    pub severity: Severity,
}

impl LogRecord {
    /// Creates a new record.
    pub fn new(message: impl Into<String>, trace: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            trace: trace.into(),
            severity,
        }
    }
}
