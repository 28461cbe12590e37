//! Menu-bar icon and menu.

#[cfg(target_os = "macos")]
mod controller;
pub mod layout;

#[cfg(target_os = "macos")]
pub use controller::TrayController;
pub use layout::{menu_layout, MenuEntry, TrayIconKind};

/// How long the success icon stays up after a conversion.
pub const FLASH_DURATION_MS: u64 = 500;
