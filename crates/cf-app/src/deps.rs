//! # Application Dependencies
//!
//! Groups the ports needed to construct [`crate::App`].
//!
//! This is NOT a Builder: no build steps, no default values, no hidden
//! logic. Every dependency is required.

use std::sync::Arc;
use cf_core::ports::*;

pub struct AppDeps {
    // Clipboard dependencies
    pub pasteboard: Arc<dyn SystemPasteboardPort>,
    pub encoder: Arc<dyn PngEncoderPort>,
    pub file_store: Arc<dyn ConvertedFileStorePort>,

    // Input dependencies
    pub key_monitor: Arc<dyn KeyMonitorPort>,
    pub accessibility: Arc<dyn AccessibilityPort>,

    // UI dependencies
    pub status: Arc<dyn StatusPort>,
    pub autostart: Arc<dyn AutostartPort>,

    // System dependencies
    pub clock: Arc<dyn ClockPort>,
}
