//! Global key-down monitoring.

mod flags;
#[cfg(target_os = "macos")]
mod event_tap;
#[cfg(not(target_os = "macos"))]
mod unsupported;

pub use flags::modifiers_from_flag_bits;

#[cfg(target_os = "macos")]
pub use event_tap::EventTapKeyMonitor as SystemKeyMonitor;

#[cfg(not(target_os = "macos"))]
pub use unsupported::UnsupportedKeyMonitor as SystemKeyMonitor;
