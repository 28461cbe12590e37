//! Dependency wiring: picks the platform adapters behind every port.

use std::path::PathBuf;
use std::sync::Arc;

use cf_app::AppDeps;
use cf_core::ports::{AutostartPort, StatusPort};
use cf_core::{AppConfig, AppDirs};
use cf_platform::{
    ClipboardRsPasteboard, ImageCratePngEncoder, SystemAccessibility, SystemClock,
    SystemKeyMonitor, TempDirFileStore,
};
use tracing::info;

/// Directory that receives converted PNG files.
pub fn resolve_temp_dir(config: &AppConfig, app_dirs: &AppDirs) -> PathBuf {
    config
        .storage
        .temp_dir
        .clone()
        .unwrap_or_else(|| app_dirs.temp_root.clone())
}

/// Build [`AppDeps`] from the platform adapters.
///
/// The status and autostart ports come from the shell because they need the
/// running Tauri app.
pub fn wire_dependencies(
    config: &AppConfig,
    app_dirs: &AppDirs,
    status: Arc<dyn StatusPort>,
    autostart: Arc<dyn AutostartPort>,
) -> AppDeps {
    let temp_dir = resolve_temp_dir(config, app_dirs);
    info!(temp_dir = %temp_dir.display(), "Converted images directory");

    AppDeps {
        pasteboard: Arc::new(ClipboardRsPasteboard::new()),
        encoder: Arc::new(ImageCratePngEncoder::new()),
        file_store: Arc::new(TempDirFileStore::new(temp_dir)),
        key_monitor: Arc::new(SystemKeyMonitor::new()),
        accessibility: Arc::new(SystemAccessibility::new()),
        status,
        autostart,
        clock: Arc::new(SystemClock),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cf_core::ports::ConvertedFileStorePort;
    use cf_core::{PngImage, TimestampMs, WatcherStatus};

    struct NullStatus;

    impl StatusPort for NullStatus {
        fn set_status(&self, _status: WatcherStatus) {}
        fn flash_converted(&self) {}
    }

    struct NullAutostart;

    impl AutostartPort for NullAutostart {
        fn is_enabled(&self) -> anyhow::Result<bool> {
            Ok(false)
        }
        fn enable(&self) -> anyhow::Result<()> {
            Ok(())
        }
        fn disable(&self) -> anyhow::Result<()> {
            Ok(())
        }
    }

    fn dirs(temp_root: PathBuf) -> AppDirs {
        AppDirs {
            config_root: PathBuf::from("/base/config"),
            logs_root: PathBuf::from("/base/logs"),
            temp_root,
        }
    }

    #[test]
    fn temp_dir_defaults_to_app_temp_root() {
        let config = AppConfig::default();
        assert_eq!(
            resolve_temp_dir(&config, &dirs(PathBuf::from("/tmp/clipfile"))),
            PathBuf::from("/tmp/clipfile")
        );
    }

    #[test]
    fn configured_temp_dir_wins() {
        let mut config = AppConfig::default();
        config.storage.temp_dir = Some(PathBuf::from("/data/shots"));
        assert_eq!(
            resolve_temp_dir(&config, &dirs(PathBuf::from("/tmp/clipfile"))),
            PathBuf::from("/data/shots")
        );
    }

    #[test]
    fn wired_file_store_writes_into_temp_dir() {
        let temp = tempfile::tempdir().unwrap();
        let deps = wire_dependencies(
            &AppConfig::default(),
            &dirs(temp.path().join("clipfile")),
            Arc::new(NullStatus),
            Arc::new(NullAutostart),
        );

        let path = deps
            .file_store
            .write_png(
                &PngImage::new(vec![1, 2, 3], 1, 1),
                TimestampMs::from_epoch_millis(5),
            )
            .unwrap();

        assert_eq!(path, temp.path().join("clipfile").join("clipboard-5.png"));
    }
}
