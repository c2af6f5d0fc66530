//! # testbridge
//!
//! **testbridge** lets an external automation client drive a host
//! application's test runner and inspect its diagnostic log stream through a
//! small set of remotely invokable operations.
//!
//! The host environment stays outside this crate: it implements the
//! [`TestEngine`] and [`ConsoleSource`] traits and publishes its log lines
//! on a [`LogBus`]. Everything in between — run orchestration, result
//! aggregation, log-triggered cancellation, console queries — lives here.
//!
//! ## Architecture
//! ```text
//!     remote client
//!          │  run_tests / get_console_logs / clear / get_compile_logs
//!          ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Bridge                                                      │
//! │  - RunOrchestrator (owns one run request at a time)          │
//! │  - LogBus (broadcast of host log records)                    │
//! │  - ConsoleSource (host console buffer)                       │
//! └───────┬───────────────────────┬──────────────────────────────┘
//!         ▼                       ▼
//!  ┌──────────────┐       ┌──────────────────┐
//!  │  TestEngine  │       │ CompileErrorGate │◄── LogBus records
//!  │ (host-side)  │       │ (sentinel match  │
//!  └──────┬───────┘       │  → cancel token) │
//!         │ callbacks     └────────┬─────────┘
//!         ▼                        │ cancellation
//!  ┌─────────────────┐             ▼
//!  │ ResultCollector │◄── wait_for_finished(token)
//!  │ (per-run counts │
//!  │  + failures)    │──► RunResults (wire-stable JSON)
//!  └─────────────────┘
//! ```
//!
//! ## Lifecycle of one run
//! ```text
//! Bridge::run_tests(filter, token)
//!   ├─► arm CompileErrorGate(sentinel), link with caller token
//!   ├─► register fresh ResultCollector with the engine
//!   ├─► engine.execute(&filter) ──► RunId
//!   ├─► await collector
//!   │     ├─ RunFinished  ──► serialized RunResults
//!   │     ├─ RunError     ──► abort message, verbatim
//!   │     └─ cancelled    ──► engine.cancel(RunId), "Test run cancelled."
//!   └─► listener unregistered on every exit path
//! ```
//!
//! ## Example
//! ```rust,no_run
//! use std::sync::Arc;
//! use testbridge::{Bridge, BridgeConfig, MemoryConsole, RunFilter, TestMode};
//! # use testbridge::{BridgeError, ListenerId, RunId, RunListener, TestEngine};
//! # struct NoEngine;
//! # impl TestEngine for NoEngine {
//! #     fn register_listener(&self, _l: Arc<dyn RunListener>) -> ListenerId { 0 }
//! #     fn unregister_listener(&self, _id: ListenerId) {}
//! #     fn execute(&self, _f: &RunFilter) -> Result<RunId, BridgeError> {
//! #         Ok(RunId::new("run"))
//! #     }
//! #     fn cancel(&self, _id: &RunId) {}
//! # }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let engine = Arc::new(NoEngine); // the host's real engine adapter
//!     let console = Arc::new(MemoryConsole::new());
//!     let bridge = Bridge::new(engine, console, BridgeConfig::default());
//!
//!     let filter = RunFilter {
//!         mode: TestMode::EditMode,
//!         test_names: vec!["MyFixture.MyTest".into()],
//!         ..RunFilter::default()
//!     };
//!     let report = bridge.run_tests(filter, None).await;
//!     println!("{report}");
//! }
//! ```

mod bridge;
mod config;
mod console;
mod engine;
mod error;
mod logs;
mod run;

// ---- Public re-exports ----

pub use bridge::Bridge;
pub use config::BridgeConfig;
pub use console::{
    clear_logs, fetch_logs, ConsoleSource, LogEntry, LogKind, LogQuery, MemoryConsole,
    RawConsoleEntry, MODE_COMPILE_ERROR, MODE_COMPILE_WARNING, MODE_ERROR, MODE_LOG, MODE_WARNING,
};
pub use engine::{
    ListenerId, RunEvent, RunFilter, RunId, RunListener, RunSummary, TestCaseResult, TestEngine,
    TestMode, TestNode, TestStatus,
};
pub use error::BridgeError;
pub use logs::{LogBus, LogRecord, LogSubscriber, Severity, Subscription};
pub use run::{
    CompileErrorGate, FailedTestRecord, ResultCollector, RunOrchestrator, RunOutcome, RunResults,
    RunState, CANCEL_NOTICE,
};
