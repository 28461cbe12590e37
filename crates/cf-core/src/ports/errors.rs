use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasteboardError {
    #[error("pasteboard unavailable: {0}")]
    Unavailable(String),

    #[error("failed to read pasteboard: {0}")]
    Read(String),

    #[error("failed to write pasteboard: {0}")]
    Write(String),
}

#[derive(Debug, Error)]
pub enum ImageEncodeError {
    #[error("failed to decode {format} image: {reason}")]
    Decode { format: String, reason: String },

    #[error("pixel buffer of {actual} bytes does not match {width}x{height} RGBA")]
    InvalidPixelBuffer {
        width: u32,
        height: u32,
        actual: usize,
    },

    #[error("failed to encode png: {0}")]
    Encode(String),
}

#[derive(Debug, Error)]
pub enum FileStoreError {
    #[error("failed to prepare directory {path}: {source}")]
    Directory {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("no free file name for timestamp {0}")]
    NameExhausted(i64),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyMonitorError {
    #[error("global key monitoring is not supported on this platform")]
    Unsupported,

    #[error("key monitor is already running")]
    AlreadyRunning,

    #[error("failed to create event tap: {0}")]
    TapCreation(String),
}

#[derive(Debug, Error)]
pub enum AppDirsError {
    #[error("config dir unavailable")]
    ConfigDirUnavailable,

    #[error("data local dir unavailable")]
    DataLocalDirUnavailable,
}
