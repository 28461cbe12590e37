use std::sync::Arc;
use std::time::Duration;

use cf_core::ports::{CleanupReport, ClockPort, ConvertedFileStorePort, FileStoreError};
use cf_core::TimestampMs;
use tracing::{info, info_span};

/// Startup housekeeping: delete converted files older than the retention
/// window so the temp directory does not grow without bound.
pub struct CleanupStaleFiles {
    file_store: Arc<dyn ConvertedFileStorePort>,
    clock: Arc<dyn ClockPort>,
    retention: Duration,
}

impl CleanupStaleFiles {
    pub fn new(
        file_store: Arc<dyn ConvertedFileStorePort>,
        clock: Arc<dyn ClockPort>,
        retention: Duration,
    ) -> Self {
        Self {
            file_store,
            clock,
            retention,
        }
    }

    pub fn execute(&self) -> Result<CleanupReport, FileStoreError> {
        let span = info_span!(
            "usecase.cleanup_stale_files.execute",
            retention_secs = self.retention.as_secs()
        );
        let _enter = span.enter();

        let cutoff =
            TimestampMs::from_epoch_millis(self.clock.now_ms()).saturating_sub(self.retention);
        let report = self.file_store.remove_older_than(cutoff)?;

        info!(
            removed = report.removed,
            retained = report.retained,
            failed = report.failed,
            "Cleaned up converted files"
        );
        Ok(report)
    }
}
