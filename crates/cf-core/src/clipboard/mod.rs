//! Clipboard domain types.
//!
//! The watcher only cares about three facts of the system pasteboard: the
//! change counter, whether a file reference is present, and whether raw image
//! bytes are present.

mod change;
mod image;
mod snapshot;
mod timestamp;

pub use change::ChangeCount;
pub use image::{PngImage, RawImage, RawImageFormat};
pub use snapshot::PasteboardSnapshot;
pub use timestamp::TimestampMs;
