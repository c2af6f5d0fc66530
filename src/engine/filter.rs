//! # Run selection criteria.
//!
//! [`RunFilter`] narrows which tests the engine executes. All fields are
//! optional; an empty filter selects every test in the given [`TestMode`].
//! A filter is immutable once submitted to a run: the orchestrator takes it
//! by value and only ever hands the engine a shared reference.

/// Execution context the tests run in.
///
/// The host exposes two phases; which one applies is a property of the test
/// assembly, so a run never mixes modes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TestMode {
    /// Tests that run inside the editing context.
    #[default]
    EditMode,
    /// Tests that run inside the playback context.
    PlayMode,
}

impl TestMode {
    /// Returns a short stable label for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            TestMode::EditMode => "edit_mode",
            TestMode::PlayMode => "play_mode",
        }
    }
}

/// Selection criteria for a single test run.
///
/// `group_names` entries are regex-capable and evaluated engine-side; the
/// bridge treats them as opaque strings.
#[derive(Clone, Debug, Default)]
pub struct RunFilter {
    /// Which execution context to run.
    pub mode: TestMode,
    /// Assembly names to include (without file extension). Empty = all.
    pub assembly_names: Vec<String>,
    /// Category names to include. Empty = all.
    pub category_names: Vec<String>,
    /// Group-name patterns (regex-capable) to include. Empty = all.
    pub group_names: Vec<String>,
    /// Fully-qualified test names to include. Empty = all.
    pub test_names: Vec<String>,
}

impl RunFilter {
    /// Creates an empty filter for the given mode (selects everything).
    pub fn for_mode(mode: TestMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// True when no name/category/group constraint is set.
    pub fn is_unconstrained(&self) -> bool {
        self.assembly_names.is_empty()
            && self.category_names.is_empty()
            && self.group_names.is_empty()
            && self.test_names.is_empty()
    }
}
