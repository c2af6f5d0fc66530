//! # Remote-invokable surface of the bridge.
//!
//! [`Bridge`] bundles the collaborators (test engine, console buffer, log
//! bus) behind the operations a remote automation client calls:
//!
//! - [`Bridge::run_tests`] — run a filtered test set; returns the
//!   serialized result, the engine's abort message, or the cancellation
//!   notice.
//! - [`Bridge::get_console_logs`] / [`Bridge::clear_console_logs`] — query
//!   or empty the host console buffer.
//! - [`Bridge::get_compile_logs`] — clear, let the host recompile and
//!   repopulate the buffer, then return compiler diagnostics only.
//!
//! Every `run_tests` call arms a [`CompileErrorGate`] with the configured
//! sentinel, so a compile-error log cancels the run alongside the caller's
//! own token.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::config::BridgeConfig;
use crate::console::{self, ConsoleSource, LogEntry, LogQuery};
use crate::engine::{RunFilter, TestEngine};
use crate::error::BridgeError;
use crate::logs::LogBus;
use crate::run::{CompileErrorGate, RunOrchestrator};

/// The operations exposed to a remote automation client.
pub struct Bridge {
    console: Arc<dyn ConsoleSource>,
    logs: LogBus,
    orchestrator: RunOrchestrator,
    config: BridgeConfig,
}

impl Bridge {
    /// Wires a bridge over the host collaborators.
    pub fn new(
        engine: Arc<dyn TestEngine>,
        console: Arc<dyn ConsoleSource>,
        config: BridgeConfig,
    ) -> Self {
        let logs = LogBus::new(config.bus_capacity);
        Self {
            console,
            logs,
            orchestrator: RunOrchestrator::new(engine),
            config,
        }
    }

    /// The bus the host publishes its log records on.
    pub fn log_bus(&self) -> &LogBus {
        &self.logs
    }

    /// Runs the filtered tests.
    ///
    /// Cancellation fires when either the caller's token or the
    /// compile-error gate trips; the engine is then asked to abort and the
    /// fixed notice string is returned instead of partial results.
    pub async fn run_tests(
        &self,
        filter: RunFilter,
        cancellation: Option<CancellationToken>,
    ) -> String {
        let caller = cancellation.unwrap_or_else(CancellationToken::new);
        let gate = CompileErrorGate::new(&self.logs, self.config.compile_sentinel.clone());

        let run_token = CancellationToken::new();
        let linker = tokio::spawn(link_cancellation(
            caller,
            gate.token(),
            run_token.clone(),
        ));

        let outcome = self.orchestrator.run(filter, run_token).await;
        linker.abort();
        outcome
    }

    /// Queries the host console buffer.
    pub fn get_console_logs(&self, query: &LogQuery) -> Result<Vec<LogEntry>, BridgeError> {
        console::fetch_logs(self.console.as_ref(), query)
    }

    /// Empties the host console buffer. Cannot be reversed.
    pub fn clear_console_logs(&self) {
        console::clear_logs(self.console.as_ref());
    }

    /// Returns compiler diagnostics only.
    ///
    /// Clears the buffer first; the host is expected to repopulate it by
    /// recompiling before the entries are read.
    pub fn get_compile_logs(
        &self,
        filter: &str,
        max_count: usize,
        only_first_line: bool,
        is_chronological: bool,
    ) -> Result<Vec<LogEntry>, BridgeError> {
        self.console.clear();
        let query = LogQuery {
            log_types: vec!["compile-error".into(), "compile-warning".into()],
            filter: filter.to_string(),
            max_count,
            only_first_line,
            is_chronological,
        };
        console::fetch_logs(self.console.as_ref(), &query)
    }
}

/// Cancels `run` as soon as either upstream signal fires.
async fn link_cancellation(
    caller: CancellationToken,
    gate: CancellationToken,
    run: CancellationToken,
) {
    tokio::select! {
        _ = caller.cancelled() => {}
        _ = gate.cancelled() => {}
    }
    run.cancel();
}
