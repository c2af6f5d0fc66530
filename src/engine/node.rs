//! # Test-tree nodes and per-test results.
//!
//! The engine reports its test tree as nodes: leaves are runnable test
//! cases, composites are suites/fixtures/assemblies grouping them. Only leaf
//! results count toward a run summary; composites carry `has_children` so
//! aggregation can skip them.

use serde::Serialize;

use crate::error::BridgeError;

/// Terminal status of one executed test case.
///
/// The set is closed by the engine contract; host adapters translating a
/// native status label must go through [`TestStatus::from_label`], which
/// fails loudly on anything outside the contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TestStatus {
    /// The test passed.
    Passed,
    /// The test failed.
    Failed,
    /// The test was skipped.
    Skipped,
    /// The test ran but produced no verdict.
    Inconclusive,
}

impl TestStatus {
    /// Parses an engine-native status label (case-insensitive).
    ///
    /// An unrecognized label is a contract violation between the engine and
    /// the bridge and is surfaced as [`BridgeError::UnknownStatus`] rather
    /// than silently dropped.
    pub fn from_label(label: &str) -> Result<Self, BridgeError> {
        if label.eq_ignore_ascii_case("passed") {
            Ok(TestStatus::Passed)
        } else if label.eq_ignore_ascii_case("failed") {
            Ok(TestStatus::Failed)
        } else if label.eq_ignore_ascii_case("skipped") {
            Ok(TestStatus::Skipped)
        } else if label.eq_ignore_ascii_case("inconclusive") {
            Ok(TestStatus::Inconclusive)
        } else {
            Err(BridgeError::UnknownStatus {
                label: label.to_string(),
            })
        }
    }
}

/// A node of the test tree, as announced by `RunStarted`/`TestStarted`.
#[derive(Clone, Debug)]
pub struct TestNode {
    /// Short name of the node.
    pub name: String,
    /// Fully-qualified name, unique within the run.
    pub full_name: String,
    /// True for suites/fixtures/assemblies; false for leaf test cases.
    pub has_children: bool,
}

impl TestNode {
    /// Creates a leaf node.
    pub fn leaf(name: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            full_name: full_name.into(),
            has_children: false,
        }
    }

    /// Creates a composite (suite) node.
    pub fn suite(name: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            full_name: full_name.into(),
            has_children: true,
        }
    }
}

/// Result payload of one `TestFinished` callback.
#[derive(Clone, Debug)]
pub struct TestCaseResult {
    /// Short name of the test.
    pub name: String,
    /// Fully-qualified name.
    pub full_name: String,
    /// True when this result belongs to a composite node.
    pub has_children: bool,
    /// Terminal status.
    pub status: TestStatus,
    /// Engine-specific result-state label, e.g. `"Failed:Error"`.
    pub result_state: String,
    /// Wall-clock duration in seconds; never negative.
    pub duration: f64,
    /// Failure or skip message; may be empty.
    pub message: String,
    /// Stack trace for failures; may be empty.
    pub stack_trace: String,
    /// Captured output of the test; may be empty.
    pub output: String,
}

/// The engine's own rollup delivered with `RunFinished`.
///
/// Kept for diagnostics only: the rollup has been observed to include
/// synthetic nodes, so per-test accumulation is authoritative.
#[derive(Clone, Copy, Debug, Default)]
pub struct RunSummary {
    /// Failed test cases, per the engine's own count.
    pub fail_count: u32,
    /// Passed test cases, per the engine's own count.
    pub pass_count: u32,
    /// Skipped test cases, per the engine's own count.
    pub skip_count: u32,
    /// Inconclusive test cases, per the engine's own count.
    pub inconclusive_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels_parse_case_insensitively() {
        assert_eq!(TestStatus::from_label("Passed").unwrap(), TestStatus::Passed);
        assert_eq!(TestStatus::from_label("FAILED").unwrap(), TestStatus::Failed);
        assert_eq!(TestStatus::from_label("skipped").unwrap(), TestStatus::Skipped);
        assert_eq!(
            TestStatus::from_label("Inconclusive").unwrap(),
            TestStatus::Inconclusive
        );
    }

    #[test]
    fn unknown_status_label_fails_loudly() {
        let err = TestStatus::from_label("Exploded").unwrap_err();
        assert_eq!(err.as_label(), "unknown_test_status");
    }

    #[test]
    fn node_constructors_set_children_flag() {
        assert!(!TestNode::leaf("T1", "Fixture.T1").has_children);
        assert!(TestNode::suite("Fixture", "Fixture").has_children);
    }
}
