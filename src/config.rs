//! # Global bridge configuration.
//!
//! [`BridgeConfig`] defines the knobs the bridge exposes to its host:
//! the log bus capacity and the compile-failure sentinel message that
//! auto-cancels an in-flight test run.

/// Configuration for a [`Bridge`](crate::Bridge) instance.
#[derive(Clone, Debug)]
pub struct BridgeConfig {
    /// Capacity of the log bus broadcast channel.
    pub bus_capacity: usize,
    /// Error-log message that cancels an in-flight test run when observed.
    ///
    /// The host emits this exact line from its compile-error hook; the
    /// bridge arms a [`CompileErrorGate`](crate::CompileErrorGate) with it
    /// for the duration of every `run_tests` call.
    pub compile_sentinel: String,
}

impl Default for BridgeConfig {
    /// Provides a default configuration:
    /// - `bus_capacity = 1024`
    /// - `compile_sentinel = "Compilation failed"`
    fn default() -> Self {
        Self {
            bus_capacity: 1024,
            compile_sentinel: "Compilation failed".to_string(),
        }
    }
}
