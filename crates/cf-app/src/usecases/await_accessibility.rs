//! Gate the global key monitor behind the accessibility permission.

use std::sync::Arc;
use std::time::Duration;

use cf_core::ports::{
    AccessibilityPort, KeyChordSender, KeyMonitorError, KeyMonitorPort, StatusPort,
};
use cf_core::WatcherStatus;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{info, info_span, warn, Instrument};

#[derive(Debug, PartialEq, Eq)]
pub enum AccessibilityOutcome {
    /// The key monitor is running.
    Listening,
    /// Permission is present but the OS refused the monitor. Only manual
    /// conversion is available.
    MonitorFailed(KeyMonitorError),
}

pub struct AwaitAccessibility {
    accessibility: Arc<dyn AccessibilityPort>,
    key_monitor: Arc<dyn KeyMonitorPort>,
    status: Arc<dyn StatusPort>,
    poll_interval: Duration,
}

impl AwaitAccessibility {
    pub fn new(
        accessibility: Arc<dyn AccessibilityPort>,
        key_monitor: Arc<dyn KeyMonitorPort>,
        status: Arc<dyn StatusPort>,
        poll_interval: Duration,
    ) -> Self {
        Self {
            accessibility,
            key_monitor,
            status,
            poll_interval,
        }
    }

    /// Wait until the process is trusted, then start delivering key chords
    /// into `sink`.
    ///
    /// When permission is missing the system prompt is requested once and
    /// the trust state is polled until it flips. The poll never gives up.
    pub async fn execute(&self, sink: KeyChordSender) -> AccessibilityOutcome {
        let span = info_span!(
            "usecase.await_accessibility.execute",
            poll_interval_ms = self.poll_interval.as_millis() as u64
        );

        async move {
            if !self.accessibility.is_trusted() {
                self.accessibility.request_access();
                self.status.set_status(WatcherStatus::PermissionNeeded);
                info!("Accessibility permission missing, waiting for grant");

                let mut ticker = interval(self.poll_interval);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
                // The first tick completes immediately.
                ticker.tick().await;
                loop {
                    ticker.tick().await;
                    if self.accessibility.is_trusted() {
                        break;
                    }
                }
                info!("Accessibility permission granted");
            }

            self.start_monitor(sink)
        }
        .instrument(span)
        .await
    }

    fn start_monitor(&self, sink: KeyChordSender) -> AccessibilityOutcome {
        match self.key_monitor.start(sink) {
            Ok(()) | Err(KeyMonitorError::AlreadyRunning) => {
                self.status.set_status(WatcherStatus::Listening);
                AccessibilityOutcome::Listening
            }
            Err(e) => {
                warn!(error = %e, "Failed to start global key monitor");
                self.status.set_status(WatcherStatus::PermissionNeeded);
                AccessibilityOutcome::MonitorFailed(e)
            }
        }
    }
}
