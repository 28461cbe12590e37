use std::fmt;

/// Encoding of image bytes found on the pasteboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawImageFormat {
    Png,
    Tiff,
    Bmp,
    /// Decoded pixels from a generic image object, 8 bits per RGBA channel.
    Rgba8 { width: u32, height: u32 },
}

impl RawImageFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            RawImageFormat::Png => "png",
            RawImageFormat::Tiff => "tiff",
            RawImageFormat::Bmp => "bmp",
            RawImageFormat::Rgba8 { .. } => "rgba8",
        }
    }
}

impl fmt::Display for RawImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Image bytes as read from the pasteboard, before normalisation.
#[derive(Clone, PartialEq, Eq)]
pub struct RawImage {
    pub format: RawImageFormat,
    pub bytes: Vec<u8>,
}

impl RawImage {
    pub fn new(format: RawImageFormat, bytes: Vec<u8>) -> Self {
        Self { format, bytes }
    }

    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }
}

impl fmt::Debug for RawImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawImage")
            .field("format", &self.format)
            .field("size_bytes", &self.bytes.len())
            .finish()
    }
}

/// PNG-encoded image with its pixel dimensions.
#[derive(Clone, PartialEq, Eq)]
pub struct PngImage {
    bytes: Vec<u8>,
    width: u32,
    height: u32,
}

impl PngImage {
    pub fn new(bytes: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            bytes,
            width,
            height,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl fmt::Debug for PngImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PngImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("size_bytes", &self.bytes.len())
            .finish()
    }
}
