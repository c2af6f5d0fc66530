//! # Log-triggered cancellation gate.
//!
//! [`CompileErrorGate`] watches the log stream for one exact error message
//! and converts its first occurrence into a one-shot cancellation signal.
//! The host's compile hook emits the sentinel deliberately, so a broken
//! build cancels an in-flight test run instead of hanging it.
//!
//! ## Rules
//! - Only `Severity::Error` records participate; an informational record
//!   with the sentinel text does not trip the gate.
//! - The message must equal the sentinel exactly (no substring match).
//! - The flag sets exactly once; later matches are no-ops.
//! - Exactly one bus subscription per gate, held for the gate's lifetime
//!   and released once — by [`CompileErrorGate::close`] or on drop.
//!   Closing twice is safe.

use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::logs::{LogBus, LogRecord, LogSubscriber, Severity, Subscription};

/// Watches the log bus and cancels its token on the first sentinel match.
pub struct CompileErrorGate {
    token: CancellationToken,
    subscription: Subscription,
}

impl CompileErrorGate {
    /// Arms a gate for `sentinel` on the given bus.
    ///
    /// Requires a Tokio runtime context (the subscription runs on a worker
    /// task).
    pub fn new(bus: &LogBus, sentinel: impl Into<String>) -> Self {
        let token = CancellationToken::new();
        let watch = Arc::new(SentinelWatch {
            sentinel: sentinel.into(),
            token: token.clone(),
        });
        let subscription = bus.attach(watch);
        Self {
            token,
            subscription,
        }
    }

    /// A clone of the one-shot cancellation signal.
    ///
    /// The gate has no ownership over consumers; the token stays observable
    /// after the gate is closed or dropped.
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// True once the sentinel has been observed.
    pub fn is_triggered(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Releases the bus subscription. Safe to call more than once.
    pub fn close(&mut self) {
        self.subscription.detach();
    }
}

struct SentinelWatch {
    sentinel: String,
    token: CancellationToken,
}

#[async_trait]
impl LogSubscriber for SentinelWatch {
    async fn on_record(&self, record: &LogRecord) {
        if record.severity == Severity::Error && record.message == self.sentinel {
            if !self.token.is_cancelled() {
                tracing::debug!(sentinel = %self.sentinel, "cancellation gate tripped");
            }
            self.token.cancel();
        }
    }

    fn name(&self) -> &'static str {
        "compile-error-gate"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::{sleep, timeout};

    const SENTINEL: &str = "CompileErrorGate cancel testing!";

    #[tokio::test]
    async fn error_log_matching_sentinel_cancels() {
        let bus = LogBus::new(16);
        let gate = CompileErrorGate::new(&bus, SENTINEL);

        bus.publish(LogRecord::new(SENTINEL, "", Severity::Error));

        timeout(Duration::from_secs(1), gate.token().cancelled())
            .await
            .expect("gate should trip");
        assert!(gate.is_triggered());
    }

    #[tokio::test]
    async fn non_error_log_does_not_cancel() {
        let bus = LogBus::new(16);
        let gate = CompileErrorGate::new(&bus, SENTINEL);

        bus.publish(LogRecord::new(SENTINEL, "", Severity::Log));
        bus.publish(LogRecord::new(SENTINEL, "", Severity::Exception));

        sleep(Duration::from_millis(100)).await;
        assert!(!gate.is_triggered());
    }

    #[tokio::test]
    async fn different_message_does_not_cancel() {
        let bus = LogBus::new(16);
        let gate = CompileErrorGate::new(&bus, SENTINEL);

        bus.publish(LogRecord::new("Not a trigger message", "", Severity::Error));

        sleep(Duration::from_millis(100)).await;
        assert!(!gate.is_triggered());
    }

    #[tokio::test]
    async fn repeated_matches_are_noops() {
        let bus = LogBus::new(16);
        let gate = CompileErrorGate::new(&bus, SENTINEL);

        bus.publish(LogRecord::new(SENTINEL, "", Severity::Error));
        bus.publish(LogRecord::new(SENTINEL, "", Severity::Error));

        timeout(Duration::from_secs(1), gate.token().cancelled())
            .await
            .expect("gate should trip");
        assert!(gate.is_triggered());
    }

    #[tokio::test]
    async fn double_close_is_safe() {
        let bus = LogBus::new(16);
        let mut gate = CompileErrorGate::new(&bus, SENTINEL);

        gate.close();
        gate.close();

        // The token stays observable after close; it just never fires.
        bus.publish(LogRecord::new(SENTINEL, "", Severity::Error));
        sleep(Duration::from_millis(100)).await;
        assert!(!gate.is_triggered());
    }

    #[tokio::test]
    async fn token_outlives_the_gate() {
        let bus = LogBus::new(16);
        let gate = CompileErrorGate::new(&bus, SENTINEL);
        let token = gate.token();

        bus.publish(LogRecord::new(SENTINEL, "", Severity::Error));
        timeout(Duration::from_secs(1), token.cancelled())
            .await
            .expect("gate should trip");

        drop(gate);
        assert!(token.is_cancelled());
    }
}
