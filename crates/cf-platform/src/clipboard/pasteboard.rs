use std::path::Path;

use cf_core::ports::{PasteboardError, SystemPasteboardPort};
use cf_core::{ChangeCount, PasteboardSnapshot, RawImage, RawImageFormat};
use clipboard_rs::common::RustImage;
use clipboard_rs::{Clipboard, ClipboardContext, ContentFormat};
use tracing::{debug, debug_span};

use super::change_count::ChangeCounter;

/// Raw image representations, in the order they are tried.
#[cfg(target_os = "macos")]
const IMAGE_FORMATS: &[(&str, RawImageFormat)] = &[
    ("public.png", RawImageFormat::Png),
    ("public.tiff", RawImageFormat::Tiff),
];

#[cfg(not(target_os = "macos"))]
const IMAGE_FORMATS: &[(&str, RawImageFormat)] = &[
    ("image/png", RawImageFormat::Png),
    ("image/tiff", RawImageFormat::Tiff),
    ("image/bmp", RawImageFormat::Bmp),
];

fn map_clipboard_err<T>(
    result: Result<T, Box<dyn std::error::Error + Send + Sync>>,
    wrap: fn(String) -> PasteboardError,
) -> Result<T, PasteboardError> {
    result.map_err(|e| wrap(e.to_string()))
}

/// The OS pasteboard through clipboard-rs.
///
/// A fresh `ClipboardContext` is opened per operation so the adapter can be
/// shared across threads and called from blocking tasks.
#[derive(Default)]
pub struct ClipboardRsPasteboard {
    counter: ChangeCounter,
}

impl ClipboardRsPasteboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn context() -> Result<ClipboardContext, PasteboardError> {
        map_clipboard_err(ClipboardContext::new(), PasteboardError::Unavailable)
    }
}

fn read_image(ctx: &ClipboardContext) -> Result<Option<RawImage>, PasteboardError> {
    let available = map_clipboard_err(ctx.available_formats(), PasteboardError::Read)?;

    for (format_id, format) in IMAGE_FORMATS {
        if !available.iter().any(|f| f == format_id) {
            continue;
        }
        if let Ok(bytes) = ctx.get_buffer(format_id) {
            if !bytes.is_empty() {
                return Ok(Some(RawImage::new(*format, bytes)));
            }
        }
    }

    // Generic image object: whatever the platform can decode into pixels.
    if ctx.has(ContentFormat::Image) {
        let image = map_clipboard_err(ctx.get_image(), PasteboardError::Read)?;
        let rgba = map_clipboard_err(image.get_dynamic_image(), PasteboardError::Read)?.to_rgba8();
        let (width, height) = rgba.dimensions();
        return Ok(Some(RawImage::new(
            RawImageFormat::Rgba8 { width, height },
            rgba.into_raw(),
        )));
    }

    Ok(None)
}

impl SystemPasteboardPort for ClipboardRsPasteboard {
    fn change_count(&self) -> Result<ChangeCount, PasteboardError> {
        let ctx = Self::context()?;
        self.counter.current(&ctx)
    }

    fn read_snapshot(&self) -> Result<PasteboardSnapshot, PasteboardError> {
        let span = debug_span!("platform.pasteboard.read_snapshot");
        span.in_scope(|| {
            let ctx = Self::context()?;
            let change_count = self.counter.current(&ctx)?;

            let file_references = if ctx.has(ContentFormat::Files) {
                map_clipboard_err(ctx.get_files(), PasteboardError::Read)?
            } else {
                Vec::new()
            };

            // A file reference wins, so skip decoding its icon preview.
            let image = if file_references.is_empty() {
                read_image(&ctx)?
            } else {
                None
            };

            debug!(
                change_count = %change_count,
                files = file_references.len(),
                image_format = image.as_ref().map(|i| i.format.as_str()),
                image_size_bytes = image.as_ref().map(RawImage::size_bytes),
                "Read pasteboard snapshot"
            );

            Ok(PasteboardSnapshot {
                change_count,
                file_references,
                image,
            })
        })
    }

    fn replace_with_file(&self, path: &Path) -> Result<ChangeCount, PasteboardError> {
        let span = debug_span!("platform.pasteboard.replace_with_file", path = %path.display());
        span.in_scope(|| {
            // `set_files` clears the pasteboard before writing, so a missing
            // file would leave it empty.
            if !path.is_file() {
                return Err(PasteboardError::Write(format!(
                    "{} does not exist",
                    path.display()
                )));
            }

            let ctx = Self::context()?;
            map_clipboard_err(
                ctx.set_files(vec![path.display().to_string()]),
                PasteboardError::Write,
            )?;

            let after = self.counter.current(&ctx)?;
            debug!(change_count = %after, "Pasteboard now holds file reference");
            Ok(after)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_rejected_before_touching_the_pasteboard() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("clipboard-1.png");

        let err = ClipboardRsPasteboard::new()
            .replace_with_file(&missing)
            .unwrap_err();

        assert!(matches!(err, PasteboardError::Write(reason) if reason.contains("does not exist")));
    }
}
