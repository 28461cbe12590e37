//! Business logic use cases
//!
//! ```text
//! KeyMonitor ──► run_shortcut_loop ──► ClipboardCheckScheduler (debounce)
//!                                               │
//!                  "Convert Now" ───────────────┤
//!                                               ▼
//!                                     ConvertClipboardImage
//! ```

pub mod await_accessibility;
pub mod cleanup_stale_files;
pub mod convert_clipboard_image;
pub mod toggle_launch_at_login;

pub use await_accessibility::{AccessibilityOutcome, AwaitAccessibility};
pub use cleanup_stale_files::CleanupStaleFiles;
pub use convert_clipboard_image::{ConversionOutcome, ConvertClipboardImage, FailureStage};
pub use toggle_launch_at_login::ToggleLaunchAtLogin;
