//! # Run lifecycle state.
//!
//! One orchestrated run moves through:
//!
//! ```text
//! Pending ──► Running ──► Completed
//!                     ├─► Aborted(message)
//!                     └─► Cancelled
//! ```
//!
//! Terminal states are mutually exclusive; once a run is terminal nothing
//! re-opens it.

/// Lifecycle of a single orchestrated test run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunState {
    /// Filter built, listener not yet active.
    Pending,
    /// Engine executing; callbacks may arrive at any time.
    Running,
    /// Engine signaled `RunFinished`; the snapshot is final.
    Completed,
    /// Engine signaled an internal error; carries its message verbatim.
    Aborted(String),
    /// The caller's cancellation signal fired before the engine finished.
    Cancelled,
}

impl RunState {
    /// True for `Completed`, `Aborted`, and `Cancelled`.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RunState::Completed | RunState::Aborted(_) | RunState::Cancelled
        )
    }

    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            RunState::Pending => "pending",
            RunState::Running => "running",
            RunState::Completed => "completed",
            RunState::Aborted(_) => "aborted",
            RunState::Cancelled => "cancelled",
        }
    }
}
