//! # cf-core
//!
//! Core domain models and business rules for clipfile.
//!
//! This crate contains pure logic without any infrastructure dependencies.
//! Everything that touches the operating system is described here as a port
//! and implemented in `cf-platform` or `cf-tauri`.

// Public module exports
pub mod app_dirs;
pub mod clipboard;
pub mod config;
pub mod ports;
pub mod shortcut;
pub mod status;

// Re-export commonly used types at the crate root
pub use app_dirs::AppDirs;
pub use clipboard::{ChangeCount, PasteboardSnapshot, PngImage, RawImage, RawImageFormat, TimestampMs};
pub use config::AppConfig;
pub use shortcut::{KeyChord, Modifiers, TriggerKind};
pub use status::WatcherStatus;
