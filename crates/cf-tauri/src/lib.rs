//! # cf-tauri
//!
//! Process shell for clipfile: tracing and config bootstrap, dependency
//! wiring, and on macOS the Tauri menu-bar app.

#[cfg(target_os = "macos")]
pub mod adapters;
pub mod bootstrap;
pub mod tray;
