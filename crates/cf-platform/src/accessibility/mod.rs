//! Accessibility (input monitoring) permission.

#[cfg(target_os = "macos")]
mod macos;
#[cfg(not(target_os = "macos"))]
mod unsupported;

#[cfg(target_os = "macos")]
pub use macos::MacAccessibility as SystemAccessibility;

#[cfg(not(target_os = "macos"))]
pub use unsupported::NoPermissionModel as SystemAccessibility;

/// Deep link to the Accessibility pane of Privacy & Security.
pub const ACCESSIBILITY_SETTINGS_URL: &str =
    "x-apple.systempreferences:com.apple.preference.security?Privacy_Accessibility";
