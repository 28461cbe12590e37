use std::path::PathBuf;

use cf_core::{
    app_dirs::AppDirs,
    ports::{AppDirsError, AppDirsPort},
};

const APP_DIR_NAME: &str = "clipfile";

/// `clipfile`, or `clipfile-<profile>` when `CLIPFILE_PROFILE` is set, so
/// a development build can run next to an installed one.
fn resolved_app_dir_name() -> String {
    match std::env::var("CLIPFILE_PROFILE") {
        Ok(profile) if !profile.is_empty() => format!("{APP_DIR_NAME}-{profile}"),
        _ => APP_DIR_NAME.to_string(),
    }
}

pub struct DirsAppDirsAdapter {
    base_override: Option<PathBuf>,
}

impl DirsAppDirsAdapter {
    pub fn new() -> Self {
        Self {
            base_override: None,
        }
    }

    /// Resolve every directory under `base` instead of the system locations.
    #[cfg(test)]
    pub fn with_base_dir(base: PathBuf) -> Self {
        Self {
            base_override: Some(base),
        }
    }

    fn base_config_dir(&self) -> Option<PathBuf> {
        if let Some(base) = &self.base_override {
            return Some(base.join("config"));
        }
        dirs::config_dir()
    }

    fn base_data_local_dir(&self) -> Option<PathBuf> {
        if let Some(base) = &self.base_override {
            return Some(base.join("data"));
        }
        dirs::data_local_dir()
    }

    fn base_temp_dir(&self) -> PathBuf {
        if let Some(base) = &self.base_override {
            return base.join("tmp");
        }
        std::env::temp_dir()
    }
}

impl Default for DirsAppDirsAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl AppDirsPort for DirsAppDirsAdapter {
    fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError> {
        let base_config = self
            .base_config_dir()
            .ok_or(AppDirsError::ConfigDirUnavailable)?;
        let base_data = self
            .base_data_local_dir()
            .ok_or(AppDirsError::DataLocalDirUnavailable)?;
        let app_dir_name = resolved_app_dir_name();

        Ok(AppDirs {
            config_root: base_config.join(&app_dir_name),
            logs_root: base_data.join(&app_dir_name).join("logs"),
            temp_root: self.base_temp_dir().join(&app_dir_name),
        })
    }
}
