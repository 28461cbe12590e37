use std::io::Cursor;

use cf_core::ports::{ImageEncodeError, PngEncoderPort};
use cf_core::{PngImage, RawImage, RawImageFormat};
use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader, RgbaImage};
use tracing::debug_span;

/// Normalises pasteboard images to PNG with the `image` crate.
///
/// PNG input is validated and passed through byte for byte. Everything else
/// is decoded and re-encoded.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageCratePngEncoder;

impl ImageCratePngEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl PngEncoderPort for ImageCratePngEncoder {
    fn encode_png(&self, raw: &RawImage) -> Result<PngImage, ImageEncodeError> {
        let span = debug_span!(
            "platform.image.encode_png",
            format = %raw.format,
            size_bytes = raw.size_bytes()
        );
        span.in_scope(|| match raw.format {
            RawImageFormat::Png => passthrough_png(raw),
            RawImageFormat::Rgba8 { width, height } => {
                let pixels = RgbaImage::from_raw(width, height, raw.bytes.clone()).ok_or(
                    ImageEncodeError::InvalidPixelBuffer {
                        width,
                        height,
                        actual: raw.bytes.len(),
                    },
                )?;
                encode(DynamicImage::ImageRgba8(pixels))
            }
            RawImageFormat::Tiff => encode(decode(raw, ImageFormat::Tiff)?),
            RawImageFormat::Bmp => encode(decode(raw, ImageFormat::Bmp)?),
        })
    }
}

fn decode(raw: &RawImage, format: ImageFormat) -> Result<DynamicImage, ImageEncodeError> {
    image::load_from_memory_with_format(&raw.bytes, format).map_err(|e| ImageEncodeError::Decode {
        format: raw.format.to_string(),
        reason: e.to_string(),
    })
}

fn passthrough_png(raw: &RawImage) -> Result<PngImage, ImageEncodeError> {
    let (width, height) = ImageReader::with_format(Cursor::new(&raw.bytes), ImageFormat::Png)
        .into_dimensions()
        .map_err(|e| ImageEncodeError::Decode {
            format: raw.format.to_string(),
            reason: e.to_string(),
        })?;
    Ok(PngImage::new(raw.bytes.clone(), width, height))
}

fn encode(image: DynamicImage) -> Result<PngImage, ImageEncodeError> {
    let (width, height) = image.dimensions();
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| ImageEncodeError::Encode(e.to_string()))?;
    Ok(PngImage::new(bytes, width, height))
}
