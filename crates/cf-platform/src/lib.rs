//! # cf-platform
//!
//! Operating-system adapters for clipfile.
//!
//! Every type here implements a port from `cf_core::ports`. macOS gets the
//! real pasteboard counter, event tap and accessibility check; other
//! platforms get portable fallbacks so the rest of the workspace builds and
//! tests anywhere.

pub mod accessibility;
pub mod app_dirs;
pub mod clipboard;
pub mod clock;
pub mod encoder;
pub mod file_store;
pub mod keyboard;

pub use accessibility::SystemAccessibility;
pub use app_dirs::DirsAppDirsAdapter;
pub use clipboard::ClipboardRsPasteboard;
pub use clock::SystemClock;
pub use file_store::TempDirFileStore;
pub use encoder::ImageCratePngEncoder;
pub use keyboard::SystemKeyMonitor;
