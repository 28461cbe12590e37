//! Mocks and fakes shared by the unit tests in this crate.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use cf_core::ports::*;
use cf_core::{
    ChangeCount, PasteboardSnapshot, PngImage, RawImage, RawImageFormat, TimestampMs,
    WatcherStatus,
};
use mockall::mock;

mock! {
    pub Pasteboard {}

    impl SystemPasteboardPort for Pasteboard {
        fn change_count(&self) -> Result<ChangeCount, PasteboardError>;
        fn read_snapshot(&self) -> Result<PasteboardSnapshot, PasteboardError>;
        fn replace_with_file(&self, path: &Path) -> Result<ChangeCount, PasteboardError>;
    }
}

mock! {
    pub Encoder {}

    impl PngEncoderPort for Encoder {
        fn encode_png(&self, image: &RawImage) -> Result<PngImage, ImageEncodeError>;
    }
}

mock! {
    pub FileStore {}

    impl ConvertedFileStorePort for FileStore {
        fn write_png(&self, image: &PngImage, at: TimestampMs) -> Result<PathBuf, FileStoreError>;
        fn remove_older_than(&self, cutoff: TimestampMs) -> Result<CleanupReport, FileStoreError>;
    }
}

mock! {
    pub Autostart {}

    impl AutostartPort for Autostart {
        fn is_enabled(&self) -> anyhow::Result<bool>;
        fn enable(&self) -> anyhow::Result<()>;
        fn disable(&self) -> anyhow::Result<()>;
    }
}

mock! {
    pub KeyMonitor {}

    impl KeyMonitorPort for KeyMonitor {
        fn start(&self, sink: KeyChordSender) -> Result<(), KeyMonitorError>;
    }
}

pub struct FixedClock(pub i64);

impl ClockPort for FixedClock {
    fn now_ms(&self) -> i64 {
        self.0
    }
}

/// Records every status change and counts success flashes.
#[derive(Default)]
pub struct RecordingStatus {
    statuses: Mutex<Vec<WatcherStatus>>,
    flashes: Mutex<usize>,
}

impl RecordingStatus {
    pub fn statuses(&self) -> Vec<WatcherStatus> {
        self.statuses.lock().unwrap().clone()
    }

    pub fn flashes(&self) -> usize {
        *self.flashes.lock().unwrap()
    }
}

impl StatusPort for RecordingStatus {
    fn set_status(&self, status: WatcherStatus) {
        self.statuses.lock().unwrap().push(status);
    }

    fn flash_converted(&self) {
        *self.flashes.lock().unwrap() += 1;
    }
}

pub fn tiff_snapshot(change_count: i64) -> PasteboardSnapshot {
    PasteboardSnapshot {
        change_count: ChangeCount::new(change_count),
        file_references: Vec::new(),
        image: Some(RawImage::new(RawImageFormat::Tiff, vec![b'I', b'I', 42, 0])),
    }
}
