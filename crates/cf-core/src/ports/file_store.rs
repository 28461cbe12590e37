use std::path::PathBuf;

use crate::clipboard::{PngImage, TimestampMs};
use crate::ports::errors::FileStoreError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanupReport {
    pub removed: usize,
    pub retained: usize,
    pub failed: usize,
}

/// Directory that owns converted PNG files.
pub trait ConvertedFileStorePort: Send + Sync {
    /// Write `image` under a name derived from `at` and return its path.
    fn write_png(&self, image: &PngImage, at: TimestampMs) -> Result<PathBuf, FileStoreError>;

    /// Delete files last modified before `cutoff`.
    fn remove_older_than(&self, cutoff: TimestampMs) -> Result<CleanupReport, FileStoreError>;
}
