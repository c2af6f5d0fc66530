//! # Result collector: aggregates engine callbacks into a run snapshot.
//!
//! One [`ResultCollector`] serves exactly one run. The engine invokes
//! [`RunListener::on_run_event`] on an unspecified thread; the collector
//! serializes all mutation behind a single mutex and signals completion
//! through a [`Notify`], so awaiting never polls.
//!
//! ## Rules
//! - Only leaf results count; composite nodes and the synthetic root node
//!   (same fully-qualified name as the suite announced by `RunStarted`) are
//!   ignored.
//! - Per-test accumulation is authoritative. The engine's own rollup in
//!   `RunFinished` double-counts synthetic nodes, so it is logged at debug
//!   level and otherwise discarded.
//! - An abort message recorded by `RunError` wins over accumulated counts
//!   when the run is awaited.
//! - Terminal states never re-open; a late `RunFinished` after `RunError`
//!   is ignored.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tokio::sync::Notify;
use tokio_util::sync::CancellationToken;

use crate::engine::{RunEvent, RunListener, TestCaseResult, TestStatus};

use super::results::{FailedTestRecord, RunResults};
use super::state::RunState;

/// Terminal outcome of awaiting a run.
#[derive(Clone, Debug)]
pub enum RunOutcome {
    /// The engine finished normally; carries the final snapshot.
    Completed(RunResults),
    /// The engine reported an internal error; carries it verbatim.
    Aborted(String),
    /// The caller's cancellation signal fired first. Partial counts are
    /// discarded: they are not guaranteed consistent mid-run.
    Cancelled,
}

#[derive(Debug)]
struct CollectorState {
    run: RunState,
    results: RunResults,
    root_suite: Option<String>,
}

/// Passive receiver of run-lifecycle callbacks for a single run.
#[derive(Debug)]
pub struct ResultCollector {
    state: Mutex<CollectorState>,
    done: Notify,
}

impl ResultCollector {
    /// Creates a collector in the `Pending` state.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(CollectorState {
                run: RunState::Pending,
                results: RunResults::default(),
                root_suite: None,
            }),
            done: Notify::new(),
        }
    }

    /// Current lifecycle state.
    pub fn run_state(&self) -> RunState {
        self.lock_state().run.clone()
    }

    /// Snapshot of the counts accumulated so far.
    pub fn results(&self) -> RunResults {
        self.lock_state().results.clone()
    }

    /// Marks the run cancelled unless it already reached a terminal state.
    pub fn mark_cancelled(&self) {
        let mut state = self.lock_state();
        if !state.run.is_terminal() {
            state.run = RunState::Cancelled;
        }
    }

    /// Waits until the run reaches a terminal state or `cancel` fires.
    ///
    /// Returns immediately when the terminal callback already arrived. An
    /// abort message takes priority over accumulated counts. Cancellation
    /// is observed at the next wakeup, so reaction latency is bounded by
    /// the notification, not by a poll interval.
    pub async fn wait_for_finished(&self, cancel: &CancellationToken) -> RunOutcome {
        loop {
            let notified = self.done.notified();
            tokio::pin!(notified);
            // Register interest before inspecting state, so a callback
            // landing in between cannot be missed.
            notified.as_mut().enable();

            if let Some(outcome) = self.terminal_outcome() {
                return outcome;
            }

            tokio::select! {
                _ = notified => {}
                _ = cancel.cancelled() => return RunOutcome::Cancelled,
            }
        }
    }

    fn terminal_outcome(&self) -> Option<RunOutcome> {
        let state = self.lock_state();
        match &state.run {
            RunState::Completed => Some(RunOutcome::Completed(state.results.clone())),
            RunState::Aborted(message) => Some(RunOutcome::Aborted(message.clone())),
            RunState::Cancelled => Some(RunOutcome::Cancelled),
            RunState::Pending | RunState::Running => None,
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, CollectorState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(state: &mut CollectorState, result: &TestCaseResult) {
        if result.has_children {
            return;
        }
        // Guard against the engine emitting a synthetic "passed" root node
        // for a filter that matched nothing.
        if state.root_suite.as_deref() == Some(result.full_name.as_str()) {
            return;
        }

        match result.status {
            TestStatus::Passed => state.results.pass_count += 1,
            TestStatus::Skipped => state.results.skip_count += 1,
            TestStatus::Failed => {
                state.results.fail_count += 1;
                state
                    .results
                    .failed_tests
                    .push(FailedTestRecord::from_result(result));
            }
            TestStatus::Inconclusive => {
                state.results.inconclusive_count += 1;
                state
                    .results
                    .failed_tests
                    .push(FailedTestRecord::from_result(result));
            }
        }
    }
}

impl Default for ResultCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl RunListener for ResultCollector {
    fn on_run_event(&self, event: &RunEvent) {
        let finished = {
            let mut state = self.lock_state();
            match event {
                RunEvent::RunStarted(root) => {
                    state.root_suite = Some(root.full_name.clone());
                    if state.run == RunState::Pending {
                        state.run = RunState::Running;
                    }
                    false
                }
                RunEvent::TestStarted(_) => false,
                RunEvent::TestFinished(result) => {
                    Self::record(&mut state, result);
                    false
                }
                RunEvent::RunFinished(summary) => {
                    tracing::debug!(
                        fail = summary.fail_count,
                        pass = summary.pass_count,
                        skip = summary.skip_count,
                        inconclusive = summary.inconclusive_count,
                        "engine rollup received; per-test accumulation stays authoritative"
                    );
                    if !state.run.is_terminal() {
                        state.run = RunState::Completed;
                        true
                    } else {
                        false
                    }
                }
                RunEvent::RunError(message) => {
                    if !state.run.is_terminal() {
                        state.run = RunState::Aborted(message.clone());
                        true
                    } else {
                        false
                    }
                }
            }
        };

        if finished {
            self.done.notify_waiters();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{RunSummary, TestNode};
    use std::time::Duration;
    use tokio::time::timeout;

    fn leaf_result(name: &str, status: TestStatus, message: &str) -> TestCaseResult {
        TestCaseResult {
            name: name.to_string(),
            full_name: format!("Fake.{name}"),
            has_children: false,
            status,
            result_state: match status {
                TestStatus::Failed => "Failed:Error".to_string(),
                TestStatus::Inconclusive => "Inconclusive".to_string(),
                _ => "Passed".to_string(),
            },
            duration: 1.23,
            message: message.to_string(),
            stack_trace: String::new(),
            output: String::new(),
        }
    }

    fn suite_result(full_name: &str) -> TestCaseResult {
        TestCaseResult {
            has_children: true,
            full_name: full_name.to_string(),
            ..leaf_result("suite", TestStatus::Passed, "")
        }
    }

    #[test]
    fn leaf_calls_partition_into_counters() {
        let collector = ResultCollector::new();
        collector.on_run_event(&RunEvent::TestFinished(leaf_result(
            "T1",
            TestStatus::Failed,
            "boom",
        )));
        collector.on_run_event(&RunEvent::TestFinished(leaf_result(
            "T2",
            TestStatus::Passed,
            "",
        )));
        collector.on_run_event(&RunEvent::TestFinished(leaf_result(
            "T3",
            TestStatus::Skipped,
            "",
        )));
        collector.on_run_event(&RunEvent::TestFinished(leaf_result(
            "T4",
            TestStatus::Inconclusive,
            "",
        )));

        let results = collector.results();
        assert_eq!(results.fail_count, 1);
        assert_eq!(results.pass_count, 1);
        assert_eq!(results.skip_count, 1);
        assert_eq!(results.inconclusive_count, 1);
        assert_eq!(
            results.fail_count
                + results.pass_count
                + results.skip_count
                + results.inconclusive_count,
            4
        );
        assert_eq!(results.failed_tests.len(), 2);
    }

    #[test]
    fn composite_nodes_never_change_counters() {
        let collector = ResultCollector::new();
        collector.on_run_event(&RunEvent::TestFinished(suite_result("Fixture")));
        collector.on_run_event(&RunEvent::TestFinished(suite_result("Assembly.dll")));

        let results = collector.results();
        assert_eq!(results.fail_count, 0);
        assert_eq!(results.pass_count, 0);
        assert_eq!(results.skip_count, 0);
        assert_eq!(results.inconclusive_count, 0);
        assert!(results.failed_tests.is_empty());
    }

    #[test]
    fn synthetic_root_node_is_ignored() {
        let collector = ResultCollector::new();
        collector.on_run_event(&RunEvent::RunStarted(TestNode::suite("Root", "Root")));

        // A zero-result filter still emits a "passed" result named after
        // the root suite; it must not count.
        let mut synthetic = leaf_result("Root", TestStatus::Passed, "");
        synthetic.full_name = "Root".to_string();
        collector.on_run_event(&RunEvent::TestFinished(synthetic));

        assert_eq!(collector.results().pass_count, 0);
    }

    #[test]
    fn duplicate_failures_append_duplicate_records_in_order() {
        let collector = ResultCollector::new();
        let failing = leaf_result("T1", TestStatus::Failed, "boom");
        collector.on_run_event(&RunEvent::TestFinished(failing.clone()));
        collector.on_run_event(&RunEvent::TestFinished(failing));

        let results = collector.results();
        assert_eq!(results.fail_count, 2);
        assert_eq!(results.failed_tests.len(), 2);
        assert_eq!(results.failed_tests[0].full_name, "Fake.T1");
        assert_eq!(results.failed_tests[1].full_name, "Fake.T1");
    }

    #[test]
    fn rollup_does_not_overwrite_per_test_counts() {
        let collector = ResultCollector::new();
        collector.on_run_event(&RunEvent::TestFinished(leaf_result(
            "T1",
            TestStatus::Passed,
            "",
        )));
        collector.on_run_event(&RunEvent::RunFinished(RunSummary {
            fail_count: 9,
            pass_count: 9,
            skip_count: 9,
            inconclusive_count: 9,
        }));

        let results = collector.results();
        assert_eq!(results.pass_count, 1);
        assert_eq!(results.fail_count, 0);
        assert_eq!(collector.run_state(), RunState::Completed);
    }

    #[test]
    fn run_error_is_terminal_and_exclusive() {
        let collector = ResultCollector::new();
        collector.on_run_event(&RunEvent::RunError("engine fault".into()));
        collector.on_run_event(&RunEvent::RunFinished(RunSummary::default()));

        assert_eq!(
            collector.run_state(),
            RunState::Aborted("engine fault".into())
        );
    }

    #[tokio::test]
    async fn wait_after_run_finished_returns_immediately() {
        let collector = ResultCollector::new();
        collector.on_run_event(&RunEvent::TestFinished(leaf_result(
            "T1",
            TestStatus::Passed,
            "",
        )));
        collector.on_run_event(&RunEvent::RunFinished(RunSummary::default()));

        let cancel = CancellationToken::new();
        let outcome = timeout(
            Duration::from_secs(1),
            collector.wait_for_finished(&cancel),
        )
        .await
        .expect("should not block");

        match outcome {
            RunOutcome::Completed(results) => assert_eq!(results.pass_count, 1),
            other => panic!("expected completion, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn wait_after_run_error_returns_message_even_with_counts() {
        let collector = ResultCollector::new();
        collector.on_run_event(&RunEvent::TestFinished(leaf_result(
            "T1",
            TestStatus::Passed,
            "",
        )));
        collector.on_run_event(&RunEvent::RunError("engine fault".into()));

        let cancel = CancellationToken::new();
        let outcome = timeout(
            Duration::from_secs(1),
            collector.wait_for_finished(&cancel),
        )
        .await
        .expect("should not block");

        match outcome {
            RunOutcome::Aborted(message) => assert_eq!(message, "engine fault"),
            other => panic!("expected abort, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn cancellation_discards_partial_counts() {
        let collector = ResultCollector::new();
        collector.on_run_event(&RunEvent::TestFinished(leaf_result(
            "T1",
            TestStatus::Failed,
            "boom",
        )));

        let cancel = CancellationToken::new();
        cancel.cancel();

        let outcome = timeout(
            Duration::from_secs(1),
            collector.wait_for_finished(&cancel),
        )
        .await
        .expect("should not block");

        assert!(matches!(outcome, RunOutcome::Cancelled));
    }

    #[tokio::test]
    async fn waiter_wakes_when_finish_arrives_later() {
        use std::sync::Arc;

        let collector = Arc::new(ResultCollector::new());
        let cancel = CancellationToken::new();

        let waiter = {
            let collector = Arc::clone(&collector);
            let cancel = cancel.clone();
            tokio::spawn(async move { collector.wait_for_finished(&cancel).await })
        };

        tokio::task::yield_now().await;
        collector.on_run_event(&RunEvent::RunFinished(RunSummary::default()));

        let outcome = timeout(Duration::from_secs(1), waiter)
            .await
            .expect("waiter should finish")
            .expect("waiter should not panic");
        assert!(matches!(outcome, RunOutcome::Completed(_)));
    }

    #[test]
    fn mark_cancelled_does_not_reopen_terminal_state() {
        let collector = ResultCollector::new();
        collector.on_run_event(&RunEvent::RunFinished(RunSummary::default()));
        collector.mark_cancelled();
        assert_eq!(collector.run_state(), RunState::Completed);
    }
}
