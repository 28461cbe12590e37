use anyhow::Context;
use cf_core::ports::AppDirsPort;
use cf_platform::DirsAppDirsAdapter;
use cf_tauri::bootstrap::{init_tracing_subscriber, load_config_or_default, resolve_config_path};
use tracing::{error, info};

fn main() {
    if let Err(e) = try_main() {
        error!("clipfile exited with an error: {:#}", e);
        eprintln!("clipfile: {:#}", e);
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    let app_dirs = DirsAppDirsAdapter::new()
        .get_app_dirs()
        .context("failed to resolve application directories")?;

    // Logging must come up before anything else reports.
    if let Err(e) = init_tracing_subscriber(&app_dirs.logs_root) {
        eprintln!("clipfile: failed to initialize logging: {:#}", e);
    }

    let config_path = resolve_config_path(&app_dirs);
    let config = load_config_or_default(&config_path);
    info!(
        config = %config_path.display(),
        temp_root = %app_dirs.temp_root.display(),
        "Starting clipfile"
    );

    run(config, app_dirs)
}

#[cfg(target_os = "macos")]
fn run(config: cf_core::AppConfig, app_dirs: cf_core::AppDirs) -> anyhow::Result<()> {
    cf_tauri::bootstrap::run_app(config, app_dirs, tauri::generate_context!())
}

#[cfg(not(target_os = "macos"))]
fn run(_config: cf_core::AppConfig, _app_dirs: cf_core::AppDirs) -> anyhow::Result<()> {
    anyhow::bail!("clipfile needs the macOS menu bar and only runs on macOS")
}
