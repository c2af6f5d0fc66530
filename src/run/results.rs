//! # Run result snapshot and its wire format.
//!
//! [`RunResults`] is what a remote caller ultimately receives: four counters
//! plus the ordered list of [`FailedTestRecord`]s. The JSON shape is part of
//! the wire contract and must not drift:
//!
//! ```text
//! {failCount, passCount, skipCount, inconclusiveCount,
//!  failedTests: [{name, fullName, resultState, testStatus,
//!                 duration, message, stackTrace, output}],
//!  success}
//! ```
//!
//! `success` is derived, not stored: a run succeeds iff no test failed and
//! none was inconclusive. Skipped tests do not affect it.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::engine::{TestCaseResult, TestStatus};

/// One failed or inconclusive leaf test, captured at callback time.
///
/// Created once per qualifying callback and never mutated; the same test
/// legitimately appears twice if it fails once per invocation.
#[derive(Clone, Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FailedTestRecord {
    /// Short test name.
    pub name: String,
    /// Fully-qualified test name.
    pub full_name: String,
    /// Engine-specific result-state label.
    pub result_state: String,
    /// Terminal status (`Failed` or `Inconclusive`).
    pub test_status: TestStatus,
    /// Duration in seconds.
    pub duration: f64,
    /// Failure message.
    pub message: String,
    /// Stack trace.
    pub stack_trace: String,
    /// Captured test output.
    pub output: String,
}

impl FailedTestRecord {
    /// Captures a record from a finished leaf result.
    pub fn from_result(result: &TestCaseResult) -> Self {
        Self {
            name: result.name.clone(),
            full_name: result.full_name.clone(),
            result_state: result.result_state.clone(),
            test_status: result.status,
            duration: result.duration,
            message: result.message.clone(),
            stack_trace: result.stack_trace.clone(),
            output: result.output.clone(),
        }
    }
}

/// Accumulated results of one test run.
///
/// Counters only ever increase while a run is live; the snapshot becomes
/// immutable once the run reaches a terminal state.
#[derive(Clone, Debug, Default)]
pub struct RunResults {
    /// Failed leaf test cases.
    pub fail_count: u32,
    /// Passed leaf test cases.
    pub pass_count: u32,
    /// Skipped leaf test cases.
    pub skip_count: u32,
    /// Inconclusive leaf test cases.
    pub inconclusive_count: u32,
    /// Failed or inconclusive tests, in callback order.
    pub failed_tests: Vec<FailedTestRecord>,
}

impl RunResults {
    /// True iff no test failed and none was inconclusive.
    ///
    /// Only meaningful once the run is terminal. Pass and skip counts do
    /// not participate: a run of nothing but skipped tests succeeds.
    pub fn success(&self) -> bool {
        self.fail_count == 0 && self.inconclusive_count == 0
    }

    /// Serializes the snapshot to its wire JSON form.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

// Serialized by hand to pin the field order and emit the derived `success`
// field; a derive cannot express a computed trailing field.
impl Serialize for RunResults {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("RunResults", 6)?;
        state.serialize_field("failCount", &self.fail_count)?;
        state.serialize_field("passCount", &self.pass_count)?;
        state.serialize_field("skipCount", &self.skip_count)?;
        state.serialize_field("inconclusiveCount", &self.inconclusive_count)?;
        state.serialize_field("failedTests", &self.failed_tests)?;
        state.serialize_field("success", &self.success())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, status: TestStatus, message: &str) -> FailedTestRecord {
        FailedTestRecord {
            name: name.to_string(),
            full_name: format!("Fake.{name}"),
            result_state: "Failed:Error".to_string(),
            test_status: status,
            duration: 1.23,
            message: message.to_string(),
            stack_trace: format!("Stack trace of Fake.{name}"),
            output: format!("Output of Fake.{name}"),
        }
    }

    #[test]
    fn success_with_fail_is_false() {
        let results = RunResults {
            fail_count: 1,
            pass_count: 1,
            ..RunResults::default()
        };
        assert!(!results.success());
    }

    #[test]
    fn success_with_inconclusive_is_false() {
        let results = RunResults {
            inconclusive_count: 1,
            pass_count: 1,
            ..RunResults::default()
        };
        assert!(!results.success());
    }

    #[test]
    fn success_with_only_skips_is_true() {
        let results = RunResults {
            skip_count: 1,
            ..RunResults::default()
        };
        assert!(results.success());
    }

    #[test]
    fn success_with_passes_is_true() {
        let results = RunResults {
            pass_count: 3,
            ..RunResults::default()
        };
        assert!(results.success());
    }

    #[test]
    fn json_shape_is_wire_stable() {
        let results = RunResults {
            fail_count: 1,
            pass_count: 1,
            skip_count: 1,
            inconclusive_count: 0,
            failed_tests: vec![record("T1", TestStatus::Failed, "boom")],
        };

        let json = results.to_json().unwrap();
        assert_eq!(
            json,
            concat!(
                "{\"failCount\":1,\"passCount\":1,\"skipCount\":1,",
                "\"inconclusiveCount\":0,\"failedTests\":[{",
                "\"name\":\"T1\",\"fullName\":\"Fake.T1\",",
                "\"resultState\":\"Failed:Error\",\"testStatus\":\"Failed\",",
                "\"duration\":1.23,\"message\":\"boom\",",
                "\"stackTrace\":\"Stack trace of Fake.T1\",",
                "\"output\":\"Output of Fake.T1\"}],\"success\":false}"
            )
        );
    }

    #[test]
    fn duplicate_records_serialize_twice_in_order() {
        let results = RunResults {
            fail_count: 2,
            failed_tests: vec![
                record("T1", TestStatus::Failed, "first"),
                record("T1", TestStatus::Failed, "second"),
            ],
            ..RunResults::default()
        };

        let json = results.to_json().unwrap();
        let first = json.find("\"message\":\"first\"").unwrap();
        let second = json.find("\"message\":\"second\"").unwrap();
        assert!(first < second);
    }

    #[test]
    fn empty_results_serialize_as_success() {
        let json = RunResults::default().to_json().unwrap();
        assert_eq!(
            json,
            "{\"failCount\":0,\"passCount\":0,\"skipCount\":0,\
             \"inconclusiveCount\":0,\"failedTests\":[],\"success\":true}"
        );
    }
}
