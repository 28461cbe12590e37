//! Tauri application entry: plugins, tray and the watcher runtime.

use std::sync::Arc;

use anyhow::Context;
use cf_app::App;
use cf_core::{AppConfig, AppDirs};
use tauri::{ActivationPolicy, Manager, RunEvent};
use tauri_plugin_autostart::MacosLauncher;
use tracing::{info, warn};

use super::wiring::wire_dependencies;
use crate::adapters::TauriAutostart;
use crate::tray::TrayController;

/// Build and run the menu-bar app. Blocks until the app exits.
pub fn run_app(
    config: AppConfig,
    app_dirs: AppDirs,
    context: tauri::Context<tauri::Wry>,
) -> anyhow::Result<()> {
    let app = tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|_app, _args, _cwd| {
            info!("Another instance was launched; keeping this one");
        }))
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_autostart::init(
            MacosLauncher::LaunchAgent,
            None,
        ))
        .setup(move |app| {
            // Menu-bar only: no Dock icon, no app menu.
            app.set_activation_policy(ActivationPolicy::Accessory);

            let handle = app.handle().clone();
            let tray = Arc::new(TrayController::new(handle.clone()));
            let deps = wire_dependencies(
                &config,
                &app_dirs,
                tray.clone(),
                Arc::new(TauriAutostart::new(handle)),
            );

            let runtime =
                tauri::async_runtime::block_on(async { tokio::runtime::Handle::current() });
            let watcher = Arc::new(App::new(deps, &config, runtime));

            match watcher.launch_at_login_enabled() {
                Ok(enabled) => tray.set_launch_at_login(enabled),
                Err(e) => warn!(error = %format!("{e:#}"), "Failed to read launch at login state"),
            }
            tray.install(Arc::clone(&watcher))?;

            // The permission gate runs in the background for the life of
            // the process.
            drop(watcher.start());
            app.manage(watcher);

            info!("clipfile is running");
            Ok(())
        })
        .build(context)
        .context("Failed to build tauri application")?;

    app.run(|_handle, event| {
        // There are no windows; only the Quit item ends the process.
        if let RunEvent::ExitRequested { code: None, api, .. } = event {
            api.prevent_exit();
        }
    });

    Ok(())
}
