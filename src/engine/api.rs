//! # Engine invocation and callback surface.
//!
//! [`TestEngine`] is the host-side collaborator: it executes a filtered run,
//! can cancel one by id, and fans lifecycle callbacks out to every
//! registered [`RunListener`]. Listeners are independent — the engine must
//! not cross-talk between them; run isolation depends on this.
//!
//! Callbacks are delivered as a single tagged [`RunEvent`] value dispatched
//! through one handler method, so a listener is a plain `match` over the
//! run lifecycle.

use std::fmt;
use std::sync::Arc;

use crate::error::BridgeError;

use super::filter::RunFilter;
use super::node::{RunSummary, TestCaseResult, TestNode};

/// Opaque identifier of one engine run, used only for cancellation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RunId(String);

impl RunId {
    /// Wraps an engine-issued identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as issued by the engine.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Handle of one listener registration, issued by the engine.
pub type ListenerId = u64;

/// One lifecycle callback from the engine.
#[derive(Clone, Debug)]
pub enum RunEvent {
    /// The run began; carries the root suite node.
    RunStarted(TestNode),
    /// A node (leaf or composite) is about to execute.
    TestStarted(TestNode),
    /// A node finished; leaves carry the countable result.
    TestFinished(TestCaseResult),
    /// The run completed normally; carries the engine's own rollup.
    RunFinished(RunSummary),
    /// The run terminated abnormally; carries the engine's message verbatim.
    RunError(String),
}

/// Receiver of engine lifecycle callbacks.
///
/// Invoked on an unspecified thread — implementations must be `Send + Sync`
/// and serialize their own state.
pub trait RunListener: Send + Sync {
    /// Called once per callback, in engine delivery order.
    fn on_run_event(&self, event: &RunEvent);
}

/// The external test engine the bridge drives.
pub trait TestEngine: Send + Sync {
    /// Registers a listener; the engine holds it until unregistered.
    fn register_listener(&self, listener: Arc<dyn RunListener>) -> ListenerId;

    /// Releases a previously registered listener.
    ///
    /// Unknown ids are ignored; releasing twice is a no-op.
    fn unregister_listener(&self, id: ListenerId);

    /// Starts a filtered run and returns its identifier.
    fn execute(&self, filter: &RunFilter) -> Result<RunId, BridgeError>;

    /// Requests cancellation of an in-flight run. Best-effort.
    fn cancel(&self, run_id: &RunId);
}
