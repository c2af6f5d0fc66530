//! Error types used across the bridge.
//!
//! [`BridgeError`] covers the three failure classes the bridge can surface to
//! a remote caller:
//!
//! - [`BridgeError::Engine`] — the test engine rejected an invocation
//!   (execute or listener registration). Caught at the orchestrator boundary
//!   and converted into a descriptive string; never propagated as a fault.
//! - [`BridgeError::InvalidFilter`] — a console log query carried a regex
//!   that does not compile.
//! - [`BridgeError::UnknownStatus`] — a host adapter delivered a test status
//!   label outside the engine contract. Fatal for that run: silently
//!   dropping a status would corrupt the result counts.

use thiserror::Error;

/// Errors produced by the bridge.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum BridgeError {
    /// The test engine failed to start or register a run.
    #[error("test engine invocation failed: {reason}")]
    Engine {
        /// Host-provided failure description, verbatim.
        reason: String,
    },

    /// A console log query contained an invalid regex pattern.
    #[error("invalid log filter pattern: {0}")]
    InvalidFilter(#[from] regex::Error),

    /// The engine reported a test status label the contract does not define.
    #[error("unrecognized test status label: {label:?}")]
    UnknownStatus {
        /// The offending label, verbatim.
        label: String,
    },
}

impl BridgeError {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use testbridge::BridgeError;
    ///
    /// let err = BridgeError::Engine { reason: "engine offline".into() };
    /// assert_eq!(err.as_label(), "engine_invocation_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            BridgeError::Engine { .. } => "engine_invocation_failed",
            BridgeError::InvalidFilter(_) => "invalid_log_filter",
            BridgeError::UnknownStatus { .. } => "unknown_test_status",
        }
    }
}
