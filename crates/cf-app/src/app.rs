//! Application runtime wiring.

use std::sync::Arc;

use cf_core::ports::StatusPort;
use cf_core::{AppConfig, TriggerKind, WatcherStatus};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::deps::AppDeps;
use crate::scheduler::{run_shortcut_loop, ClipboardCheckScheduler};
use crate::usecases::{
    AccessibilityOutcome, AwaitAccessibility, CleanupStaleFiles, ConversionOutcome,
    ConvertClipboardImage, ToggleLaunchAtLogin,
};

/// The running watcher. Built once from [`AppDeps`] and shared with the
/// shell, which forwards menu actions to it.
pub struct App {
    converter: Arc<ConvertClipboardImage>,
    scheduler: Arc<ClipboardCheckScheduler>,
    cleanup: CleanupStaleFiles,
    permission_gate: Arc<AwaitAccessibility>,
    launch_at_login: ToggleLaunchAtLogin,
    status: Arc<dyn StatusPort>,
    runtime: Handle,
}

impl App {
    pub fn new(deps: AppDeps, config: &AppConfig, runtime: Handle) -> Self {
        let converter = Arc::new(ConvertClipboardImage::new(
            deps.pasteboard,
            deps.encoder,
            deps.file_store.clone(),
            deps.clock.clone(),
            deps.status.clone(),
        ));
        let scheduler = Arc::new(ClipboardCheckScheduler::new(
            Arc::clone(&converter),
            config.watcher.clone(),
            runtime.clone(),
        ));

        Self {
            converter,
            scheduler,
            cleanup: CleanupStaleFiles::new(
                deps.file_store,
                deps.clock,
                config.storage.retention(),
            ),
            permission_gate: Arc::new(AwaitAccessibility::new(
                deps.accessibility,
                deps.key_monitor,
                deps.status.clone(),
                config.permission.poll_interval(),
            )),
            launch_at_login: ToggleLaunchAtLogin::new(deps.autostart),
            status: deps.status,
            runtime,
        }
    }

    /// Startup sequence: remove stale files, remember the current change
    /// counter, then wait for accessibility in the background and start
    /// listening for shortcuts. If the key monitor later drops its sender,
    /// the status falls back to "permission needed".
    pub fn start(&self) -> JoinHandle<AccessibilityOutcome> {
        if let Err(e) = self.cleanup.execute() {
            warn!(error = %e, "Startup cleanup failed");
        }
        self.converter.prime();

        let (tx, rx) = mpsc::unbounded_channel();
        let scheduler = Arc::clone(&self.scheduler);
        let status = Arc::clone(&self.status);
        self.runtime.spawn(async move {
            run_shortcut_loop(rx, scheduler).await;
            warn!("Shortcuts are no longer delivered; only Convert Now works");
            status.set_status(WatcherStatus::PermissionNeeded);
        });

        let gate = Arc::clone(&self.permission_gate);
        info!("Clipboard watcher started");
        self.runtime.spawn(async move { gate.execute(tx).await })
    }

    /// "Convert Now": check immediately, ignoring the change counter.
    pub fn convert_now(&self) -> JoinHandle<ConversionOutcome> {
        self.scheduler.schedule(TriggerKind::Manual)
    }

    pub fn toggle_launch_at_login(&self) -> anyhow::Result<bool> {
        self.launch_at_login.execute()
    }

    pub fn launch_at_login_enabled(&self) -> anyhow::Result<bool> {
        self.launch_at_login.is_enabled()
    }
}
