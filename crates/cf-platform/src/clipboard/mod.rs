//! System pasteboard adapter built on clipboard-rs.

mod change_count;
mod pasteboard;

pub use pasteboard::ClipboardRsPasteboard;
