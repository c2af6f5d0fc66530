//! # Run orchestrator: owns the lifecycle of one test-run request.
//!
//! ## Flow
//! ```text
//! run(filter, token)
//!   ├─► fresh ResultCollector, registered as engine listener
//!   ├─► engine.execute(&filter) ──► RunId (kept only for cancellation)
//!   ├─► collector.wait_for_finished(token)
//!   │      ├─ Completed ──► serialized RunResults
//!   │      ├─ Aborted   ──► engine message, verbatim
//!   │      └─ Cancelled ──► engine.cancel(run_id), fixed notice string
//!   └─► listener unregistered on EVERY exit path (Drop guard)
//! ```
//!
//! ## Rules
//! - An engine invocation failure is caught, logged, and returned as a
//!   descriptive string; it never crashes the caller's request.
//! - Partial results are discarded on cancellation.
//! - Engine-side cancellation is fire-and-forget; its failure is not
//!   separately surfaced.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::engine::{ListenerId, RunFilter, TestEngine};

use super::collector::{ResultCollector, RunOutcome};

/// Fixed notice returned to the caller when a run is cancelled.
pub const CANCEL_NOTICE: &str = "Test run cancelled.";

/// Drives one filtered test run through the external engine.
#[derive(Clone)]
pub struct RunOrchestrator {
    engine: Arc<dyn TestEngine>,
}

impl RunOrchestrator {
    /// Creates an orchestrator over the given engine.
    pub fn new(engine: Arc<dyn TestEngine>) -> Self {
        Self { engine }
    }

    /// Runs the filtered tests and returns the serialized result, the
    /// engine's abort message, or the cancellation notice.
    pub async fn run(&self, filter: RunFilter, cancel: CancellationToken) -> String {
        let collector = Arc::new(ResultCollector::new());
        let listener_id = self.engine.register_listener(collector.clone());
        let _guard = ListenerGuard {
            engine: Arc::clone(&self.engine),
            id: listener_id,
        };

        tracing::debug!(mode = filter.mode.as_label(), "starting test run");
        let run_id = match self.engine.execute(&filter) {
            Ok(run_id) => run_id,
            Err(err) => {
                tracing::error!(error = %err, label = err.as_label(), "test engine execute failed");
                return format!("Failed to start test run: {err}");
            }
        };

        match collector.wait_for_finished(&cancel).await {
            RunOutcome::Completed(results) => match results.to_json() {
                Ok(json) => json,
                Err(err) => {
                    tracing::error!(error = %err, "test result serialization failed");
                    format!("Failed to serialize test results: {err}")
                }
            },
            RunOutcome::Aborted(message) => message,
            RunOutcome::Cancelled => {
                collector.mark_cancelled();
                self.engine.cancel(&run_id);
                tracing::debug!(run_id = %run_id, "test run cancelled; abort requested");
                CANCEL_NOTICE.to_string()
            }
        }
    }
}

/// Unregisters the listener exactly once, on every exit path.
struct ListenerGuard {
    engine: Arc<dyn TestEngine>,
    id: ListenerId,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.engine.unregister_listener(self.id);
    }
}
