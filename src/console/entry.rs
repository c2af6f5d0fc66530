//! # Console entry shapes and severity normalization.
//!
//! The host tags each buffered entry with an internal bitmask; several bits
//! can be set at once. [`LogKind::from_mode`] derives a single normalized
//! tag — the first matching bit wins, checked in priority order: error,
//! warning, log, compile-error, compile-warning, else unknown.

use serde::Serialize;

/// Bitmask: a scripting error.
pub const MODE_ERROR: u32 = 1 << 0;
/// Bitmask: a scripting warning.
pub const MODE_WARNING: u32 = 1 << 1;
/// Bitmask: an informational scripting log.
pub const MODE_LOG: u32 = 1 << 2;
/// Bitmask: a compiler error.
pub const MODE_COMPILE_ERROR: u32 = 1 << 3;
/// Bitmask: a compiler warning.
pub const MODE_COMPILE_WARNING: u32 = 1 << 4;

/// Normalized severity tag of a console entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogKind {
    /// A scripting error.
    Error,
    /// A scripting warning.
    Warning,
    /// An informational log.
    Log,
    /// A compiler error.
    CompileError,
    /// A compiler warning.
    CompileWarning,
    /// No recognized bit was set.
    Unknown,
}

impl LogKind {
    /// Derives the tag from the host bitmask; first matching bit wins.
    pub fn from_mode(mode: u32) -> Self {
        if mode & MODE_ERROR != 0 {
            LogKind::Error
        } else if mode & MODE_WARNING != 0 {
            LogKind::Warning
        } else if mode & MODE_LOG != 0 {
            LogKind::Log
        } else if mode & MODE_COMPILE_ERROR != 0 {
            LogKind::CompileError
        } else if mode & MODE_COMPILE_WARNING != 0 {
            LogKind::CompileWarning
        } else {
            LogKind::Unknown
        }
    }

    /// The tag as a stable lowercase string, as used in query type filters.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogKind::Error => "error",
            LogKind::Warning => "warning",
            LogKind::Log => "log",
            LogKind::CompileError => "compile-error",
            LogKind::CompileWarning => "compile-warning",
            LogKind::Unknown => "unknown",
        }
    }
}

/// One raw entry as stored in the host console buffer.
#[derive(Clone, Debug)]
pub struct RawConsoleEntry {
    /// The buffered message, possibly multi-line.
    pub message: String,
    /// The host's internal bitmask for this entry.
    pub mode: u32,
}

impl RawConsoleEntry {
    /// Creates a raw entry.
    pub fn new(message: impl Into<String>, mode: u32) -> Self {
        Self {
            message: message.into(),
            mode,
        }
    }
}

/// One normalized entry returned to a remote caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    /// The (possibly first-line-truncated) message.
    pub message: String,
    /// Normalized severity tag.
    pub severity: LogKind,
}
