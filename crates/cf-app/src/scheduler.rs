//! Debounced clipboard checks.
//!
//! At most one delayed check is pending. Scheduling a new one aborts the
//! previous job, so a burst of shortcuts collapses into a single check that
//! runs after the last one.

use std::sync::{Arc, Mutex, PoisonError};

use cf_core::config::WatcherConfig;
use cf_core::ports::KeyChordReceiver;
use cf_core::shortcut::{self, TriggerKind};
use tokio::runtime::Handle;
use tokio::task::{AbortHandle, JoinHandle};
use tokio::time::sleep;
use tracing::{debug, error, info};

use crate::usecases::{ConversionOutcome, ConvertClipboardImage, FailureStage};

pub struct ClipboardCheckScheduler {
    converter: Arc<ConvertClipboardImage>,
    delays: WatcherConfig,
    runtime: Handle,
    pending: Mutex<Option<AbortHandle>>,
}

impl ClipboardCheckScheduler {
    pub fn new(converter: Arc<ConvertClipboardImage>, delays: WatcherConfig, runtime: Handle) -> Self {
        Self {
            converter,
            delays,
            runtime,
            pending: Mutex::new(None),
        }
    }

    /// Schedule a check for `kind`.
    ///
    /// `Manual` runs right away with the change-counter comparison skipped
    /// and leaves any pending shortcut check in place. Other kinds replace
    /// the pending job. The returned handle resolves to a cancellation
    /// error if a later call replaced this job before it fired.
    pub fn schedule(&self, kind: TriggerKind) -> JoinHandle<ConversionOutcome> {
        let converter = Arc::clone(&self.converter);

        if kind.forces_check() {
            debug!(trigger = %kind, "Running clipboard check now");
            return self.runtime.spawn(run_check(converter, true));
        }

        let delay = self.delays.delay_for(kind);
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.take() {
            previous.abort();
            debug!("Replaced pending clipboard check");
        }

        let handle = self.runtime.spawn(async move {
            sleep(delay).await;
            run_check(converter, false).await
        });
        *pending = Some(handle.abort_handle());
        debug!(trigger = %kind, delay_ms = delay.as_millis() as u64, "Clipboard check scheduled");

        handle
    }

    pub fn has_pending(&self) -> bool {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

async fn run_check(converter: Arc<ConvertClipboardImage>, force: bool) -> ConversionOutcome {
    match tokio::task::spawn_blocking(move || converter.execute(force)).await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!(error = %e, "Clipboard check did not complete");
            ConversionOutcome::Failed {
                stage: FailureStage::Interrupted,
                reason: e.to_string(),
            }
        }
    }
}

/// Forward key chords from the global monitor to the scheduler until the
/// monitor drops its sender.
pub async fn run_shortcut_loop(
    mut chords: KeyChordReceiver,
    scheduler: Arc<ClipboardCheckScheduler>,
) {
    while let Some(chord) = chords.recv().await {
        if let Some(kind) = shortcut::classify(&chord) {
            debug!(trigger = %kind, key_code = chord.key_code, "Shortcut detected");
            // Outcomes are logged by the check itself.
            drop(scheduler.schedule(kind));
        }
    }
    info!("Key monitor channel closed, shortcut loop stopped");
}
