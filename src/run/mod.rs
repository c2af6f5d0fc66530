//! Test-run orchestration: collector, orchestrator, and cancellation gate.
//!
//! This is the core of the bridge. One run request flows through:
//!
//! ```text
//! caller ──► RunOrchestrator ──► TestEngine.execute(filter)
//!                 │                      │ callbacks (any thread)
//!                 │                      ▼
//!                 │              ResultCollector ──► RunResults
//!                 │                      ▲
//!                 └── wait_for_finished ─┘   CancellationToken
//!                                             (caller and/or
//!                                              CompileErrorGate)
//! ```
//!
//! ## Contents
//! - [`ResultCollector`], [`RunOutcome`] — callback aggregation and awaiting
//! - [`RunOrchestrator`], [`CANCEL_NOTICE`] — run lifecycle ownership
//! - [`CompileErrorGate`] — log-triggered cancellation
//! - [`RunResults`], [`FailedTestRecord`] — the wire-stable report
//! - [`RunState`] — lifecycle state machine

mod collector;
mod gate;
mod orchestrator;
mod results;
mod state;

pub use collector::{ResultCollector, RunOutcome};
pub use gate::CompileErrorGate;
pub use orchestrator::{RunOrchestrator, CANCEL_NOTICE};
pub use results::{FailedTestRecord, RunResults};
pub use state::RunState;
