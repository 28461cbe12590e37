use crate::clipboard::{PngImage, RawImage};
use crate::ports::errors::ImageEncodeError;

/// Normalises any supported pasteboard image representation to PNG.
pub trait PngEncoderPort: Send + Sync {
    fn encode_png(&self, image: &RawImage) -> Result<PngImage, ImageEncodeError>;
}
