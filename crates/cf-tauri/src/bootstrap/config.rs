//! # Configuration Loader
//!
//! Reads the optional `config.toml`. The file is input only; the app never
//! writes it. Every key has a default in `cf_core::config`, so a missing
//! file or a missing section is not an error.

use std::path::{Path, PathBuf};

use anyhow::Context;
use cf_core::{AppConfig, AppDirs};
use tracing::{info, warn};

/// Overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "CLIPFILE_CONFIG";

pub fn resolve_config_path(app_dirs: &AppDirs) -> PathBuf {
    match std::env::var_os(CONFIG_PATH_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => app_dirs.config_file(),
    }
}

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML for
/// [`AppConfig`].
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    toml::from_str(&content).context("Failed to parse config as TOML")
}

/// Like [`load_config`], but falls back to defaults. A missing file is
/// expected; any other failure is logged.
pub fn load_config_or_default(config_path: &Path) -> AppConfig {
    if !config_path.exists() {
        info!(path = %config_path.display(), "No config file, using defaults");
        return AppConfig::default();
    }

    match load_config(config_path) {
        Ok(config) => {
            info!(path = %config_path.display(), "Loaded config");
            config
        }
        Err(e) => {
            warn!(error = %format!("{e:#}"), "Ignoring invalid config, using defaults");
            AppConfig::default()
        }
    }
}
