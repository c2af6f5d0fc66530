//! External test engine contract.
//!
//! The bridge never runs tests itself; it drives a host-provided engine
//! through the [`TestEngine`] trait and observes the run through a stream of
//! [`RunEvent`]s delivered to registered [`RunListener`]s. Callbacks may
//! arrive on any thread; within a single run their delivery order is the
//! sole source of truth for aggregation order.
//!
//! ## Callback contract (per run)
//! ```text
//! RunStarted        0 or 1 time
//! TestStarted ┐
//! TestFinished┘     interleaved, once per leaf and composite node
//! RunFinished       exactly once on normal completion
//! RunError          exactly once instead of RunFinished on abnormal end
//! ```
//!
//! ## Contents
//! - [`TestEngine`], [`RunListener`], [`RunEvent`] — invocation and callback
//!   surface
//! - [`RunFilter`], [`TestMode`] — run selection criteria
//! - [`TestNode`], [`TestCaseResult`], [`RunSummary`], [`TestStatus`] — the
//!   test-tree data model

mod api;
mod filter;
mod node;

pub use api::{ListenerId, RunEvent, RunId, RunListener, TestEngine};
pub use filter::{RunFilter, TestMode};
pub use node::{RunSummary, TestCaseResult, TestNode, TestStatus};
