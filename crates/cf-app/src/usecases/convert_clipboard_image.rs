//! Use case for replacing clipboard image bytes with a PNG file reference.

use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use cf_core::ports::{
    ClockPort, ConvertedFileStorePort, PngEncoderPort, StatusPort, SystemPasteboardPort,
};
use cf_core::{ChangeCount, TimestampMs};
use tracing::{debug, error, info, info_span, warn};

/// Stage at which a conversion attempt was abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureStage {
    ReadPasteboard,
    Encode,
    WriteFile,
    WritePasteboard,
    /// The check panicked or was cancelled before it reported.
    Interrupted,
}

/// Result of a single clipboard check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionOutcome {
    /// The change counter matches the last observation.
    Unchanged,
    /// The pasteboard already holds a file reference.
    AlreadyFile,
    /// The pasteboard holds no image data.
    NoImage,
    /// The image was written to `path` and the pasteboard now references it.
    Converted { path: PathBuf },
    /// The attempt was abandoned. The pasteboard was not modified unless the
    /// stage is [`FailureStage::WritePasteboard`], in which case it may have
    /// been cleared.
    Failed { stage: FailureStage, reason: String },
}

impl ConversionOutcome {
    pub fn is_converted(&self) -> bool {
        matches!(self, ConversionOutcome::Converted { .. })
    }

    fn failed(stage: FailureStage, reason: impl ToString) -> Self {
        ConversionOutcome::Failed {
            stage,
            reason: reason.to_string(),
        }
    }
}

/// Checks the pasteboard and, when it holds raw image bytes that are not
/// already a file reference, writes them as PNG and puts the file on the
/// pasteboard instead.
///
/// The last observed change counter is kept here. It is updated to the
/// post-write counter after a conversion so the watcher does not react to
/// its own write.
pub struct ConvertClipboardImage {
    pasteboard: Arc<dyn SystemPasteboardPort>,
    encoder: Arc<dyn PngEncoderPort>,
    file_store: Arc<dyn ConvertedFileStorePort>,
    clock: Arc<dyn ClockPort>,
    status: Arc<dyn StatusPort>,
    last_seen: Mutex<Option<ChangeCount>>,
}

impl ConvertClipboardImage {
    pub fn new(
        pasteboard: Arc<dyn SystemPasteboardPort>,
        encoder: Arc<dyn PngEncoderPort>,
        file_store: Arc<dyn ConvertedFileStorePort>,
        clock: Arc<dyn ClockPort>,
        status: Arc<dyn StatusPort>,
    ) -> Self {
        Self {
            pasteboard,
            encoder,
            file_store,
            clock,
            status,
            last_seen: Mutex::new(None),
        }
    }

    /// Record the current change counter without converting anything, so
    /// whatever was on the pasteboard at launch is left alone.
    pub fn prime(&self) {
        match self.pasteboard.change_count() {
            Ok(count) => {
                *self.lock_last_seen() = Some(count);
                debug!(change_count = %count, "Primed clipboard change counter");
            }
            Err(e) => warn!(error = %e, "Failed to read clipboard change counter"),
        }
    }

    pub fn last_seen(&self) -> Option<ChangeCount> {
        *self.lock_last_seen()
    }

    /// Run one check. `force` skips the change-counter comparison.
    pub fn execute(&self, force: bool) -> ConversionOutcome {
        let span = info_span!("usecase.convert_clipboard_image.execute", force);
        let _enter = span.enter();

        // Held for the whole check so manual and scheduled checks never
        // interleave.
        let mut last_seen = self.lock_last_seen();

        let current = match self.pasteboard.change_count() {
            Ok(count) => count,
            Err(e) => {
                warn!(error = %e, "Failed to read clipboard change counter");
                return ConversionOutcome::failed(FailureStage::ReadPasteboard, e);
            }
        };

        if !force && *last_seen == Some(current) {
            debug!(change_count = %current, "Clipboard unchanged");
            return ConversionOutcome::Unchanged;
        }
        *last_seen = Some(current);

        let snapshot = match self.pasteboard.read_snapshot() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(error = %e, "Failed to read clipboard contents");
                return ConversionOutcome::failed(FailureStage::ReadPasteboard, e);
            }
        };

        let Some(raw) = snapshot.convertible_image() else {
            if snapshot.has_file_reference() {
                debug!(
                    files = snapshot.file_references.len(),
                    "Clipboard already holds a file reference"
                );
                return ConversionOutcome::AlreadyFile;
            }
            debug!("Clipboard holds no image data");
            return ConversionOutcome::NoImage;
        };

        let png = match self.encoder.encode_png(raw) {
            Ok(png) => png,
            Err(e) => {
                error!(error = %e, format = %raw.format, "Failed to normalise clipboard image");
                return ConversionOutcome::failed(FailureStage::Encode, e);
            }
        };

        let at = TimestampMs::from_epoch_millis(self.clock.now_ms());
        let path = match self.file_store.write_png(&png, at) {
            Ok(path) => path,
            Err(e) => {
                error!(error = %e, "Failed to save image");
                return ConversionOutcome::failed(FailureStage::WriteFile, e);
            }
        };

        match self.pasteboard.replace_with_file(&path) {
            Ok(after) => *last_seen = Some(after),
            Err(e) => {
                error!(
                    error = %e,
                    path = %path.display(),
                    "Failed to put file on clipboard; the clipboard may have been cleared, the image is kept at path"
                );
                return ConversionOutcome::failed(FailureStage::WritePasteboard, e);
            }
        }
        drop(last_seen);

        info!(
            path = %path.display(),
            width = png.width(),
            height = png.height(),
            "Converted clipboard image"
        );
        self.status.flash_converted();

        ConversionOutcome::Converted { path }
    }

    fn lock_last_seen(&self) -> std::sync::MutexGuard<'_, Option<ChangeCount>> {
        self.last_seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
