//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases in `cf-app` and the
//! adapters in `cf-platform` / `cf-tauri`. Use cases only ever hold
//! `Arc<dyn Port>` so they can be exercised with mocks.

pub mod accessibility;
pub mod app_dirs;
pub mod autostart;
mod clock;
pub mod errors;
pub mod file_store;
pub mod image_encoder;
pub mod key_monitor;
pub mod pasteboard;
pub mod status;

pub use accessibility::AccessibilityPort;
pub use app_dirs::AppDirsPort;
pub use autostart::AutostartPort;
pub use clock::*;
pub use errors::{
    AppDirsError, FileStoreError, ImageEncodeError, KeyMonitorError, PasteboardError,
};
pub use file_store::{CleanupReport, ConvertedFileStorePort};
pub use image_encoder::PngEncoderPort;
pub use key_monitor::{KeyChordReceiver, KeyChordSender, KeyMonitorPort};
pub use pasteboard::SystemPasteboardPort;
pub use status::StatusPort;
