use anyhow::{Context, Result};
use cf_core::ports::AutostartPort;
use tauri::AppHandle;
use tauri_plugin_autostart::ManagerExt as _;
use tracing::debug;

/// Launch-at-login registration through `tauri-plugin-autostart`, which
/// installs a LaunchAgent on macOS.
///
/// Only constructed inside the Tauri setup phase, once the plugin is
/// registered.
pub struct TauriAutostart {
    app_handle: AppHandle,
}

impl TauriAutostart {
    pub fn new(app_handle: AppHandle) -> Self {
        Self { app_handle }
    }
}

impl AutostartPort for TauriAutostart {
    fn is_enabled(&self) -> Result<bool> {
        self.app_handle
            .autolaunch()
            .is_enabled()
            .context("Failed to read launch agent state")
    }

    fn enable(&self) -> Result<()> {
        self.app_handle
            .autolaunch()
            .enable()
            .context("Failed to register launch agent")?;
        debug!("Launch agent registered");
        Ok(())
    }

    fn disable(&self) -> Result<()> {
        self.app_handle
            .autolaunch()
            .disable()
            .context("Failed to remove launch agent")?;
        debug!("Launch agent removed");
        Ok(())
    }
}
