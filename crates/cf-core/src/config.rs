//! Application configuration domain model
//!
//! Every field has a default so a missing or partial `config.toml` is valid.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::shortcut::TriggerKind;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Shortcut debounce settings
    pub watcher: WatcherConfig,

    /// Converted file storage settings
    pub storage: StorageConfig,

    /// Accessibility permission polling
    pub permission: PermissionConfig,
}

/// Delay between a shortcut and the clipboard check it schedules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatcherConfig {
    pub copy_delay_ms: u64,
    /// Screenshots take a moment to land on the pasteboard.
    pub screenshot_delay_ms: u64,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            copy_delay_ms: 100,
            screenshot_delay_ms: 500,
        }
    }
}

impl WatcherConfig {
    pub fn delay_for(&self, kind: TriggerKind) -> Duration {
        match kind {
            TriggerKind::Copy => Duration::from_millis(self.copy_delay_ms),
            TriggerKind::Screenshot => Duration::from_millis(self.screenshot_delay_ms),
            TriggerKind::Manual => Duration::ZERO,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Overrides the per-run temporary directory.
    pub temp_dir: Option<PathBuf>,

    /// Converted files older than this are removed at startup.
    pub retention_secs: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            temp_dir: None,
            retention_secs: 3600,
        }
    }
}

impl StorageConfig {
    pub fn retention(&self) -> Duration {
        Duration::from_secs(self.retention_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PermissionConfig {
    pub poll_interval_ms: u64,
}

impl Default for PermissionConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 2000,
        }
    }
}

impl PermissionConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(1))
    }
}
