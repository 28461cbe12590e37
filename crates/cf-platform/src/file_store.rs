//! Converted PNG files on disk.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use cf_core::ports::{CleanupReport, ConvertedFileStorePort, FileStoreError};
use cf_core::{PngImage, TimestampMs};
use tracing::{debug, debug_span, warn};

const FILE_PREFIX: &str = "clipboard-";
const FILE_EXTENSION: &str = "png";
const MAX_NAME_SUFFIX: u32 = 99;

/// Writes `clipboard-<epoch-millis>.png` files into one directory and
/// removes old ones.
///
/// Only files matching that name pattern are ever deleted.
pub struct TempDirFileStore {
    dir: PathBuf,
}

impl TempDirFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn ensure_dir(&self) -> Result<(), FileStoreError> {
        fs::create_dir_all(&self.dir).map_err(|source| FileStoreError::Directory {
            path: self.dir.display().to_string(),
            source,
        })
    }

    fn candidate(&self, at: TimestampMs, suffix: u32) -> PathBuf {
        let name = if suffix == 0 {
            format!("{FILE_PREFIX}{}.{FILE_EXTENSION}", at.as_millis())
        } else {
            format!("{FILE_PREFIX}{}-{suffix}.{FILE_EXTENSION}", at.as_millis())
        };
        self.dir.join(name)
    }
}

impl ConvertedFileStorePort for TempDirFileStore {
    fn write_png(&self, image: &PngImage, at: TimestampMs) -> Result<PathBuf, FileStoreError> {
        let span = debug_span!("platform.file_store.write_png", ts_ms = at.as_millis());
        let _enter = span.enter();

        self.ensure_dir()?;

        for suffix in 0..=MAX_NAME_SUFFIX {
            let path = self.candidate(at, suffix);
            let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => file,
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
                Err(source) => {
                    return Err(FileStoreError::Write {
                        path: path.display().to_string(),
                        source,
                    })
                }
            };

            if let Err(source) = file.write_all(image.bytes()).and_then(|_| file.sync_all()) {
                drop(file);
                // Never leave a truncated PNG behind.
                let _ = fs::remove_file(&path);
                return Err(FileStoreError::Write {
                    path: path.display().to_string(),
                    source,
                });
            }

            debug!(
                path = %path.display(),
                size_bytes = image.bytes().len(),
                "Wrote converted image"
            );
            return Ok(path);
        }

        Err(FileStoreError::NameExhausted(at.as_millis()))
    }

    fn remove_older_than(&self, cutoff: TimestampMs) -> Result<CleanupReport, FileStoreError> {
        let span = debug_span!(
            "platform.file_store.remove_older_than",
            cutoff_ms = cutoff.as_millis()
        );
        let _enter = span.enter();

        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(CleanupReport::default()),
            Err(source) => {
                return Err(FileStoreError::Directory {
                    path: self.dir.display().to_string(),
                    source,
                })
            }
        };

        let mut report = CleanupReport::default();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "Failed to read directory entry");
                    report.failed += 1;
                    continue;
                }
            };
            let path = entry.path();
            if !is_converted_file(&path) {
                continue;
            }

            let modified = match entry.metadata().and_then(|m| {
                if m.is_file() {
                    m.modified().map(Some)
                } else {
                    Ok(None)
                }
            }) {
                Ok(Some(modified)) => modified,
                Ok(None) => continue,
                Err(e) => {
                    warn!(error = %e, path = %path.display(), "Failed to read file metadata");
                    report.failed += 1;
                    continue;
                }
            };

            if epoch_millis(modified) >= cutoff.as_millis() {
                report.retained += 1;
                continue;
            }

            match fs::remove_file(&path) {
                Ok(()) => {
                    debug!(path = %path.display(), "Removed stale converted image");
                    report.removed += 1;
                }
                Err(e) => {
                    warn!(error = %e, path = %path.display(), "Failed to remove stale file");
                    report.failed += 1;
                }
            }
        }

        Ok(report)
    }
}

fn is_converted_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    name.starts_with(FILE_PREFIX)
        && path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(FILE_EXTENSION))
}

fn epoch_millis(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(d) => i64::try_from(d.as_millis()).unwrap_or(i64::MAX),
        Err(e) => -i64::try_from(e.duration().as_millis()).unwrap_or(i64::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_clipboard_pngs_are_owned() {
        assert!(is_converted_file(Path::new("/tmp/clipboard-1.png")));
        assert!(is_converted_file(Path::new("/tmp/clipboard-1-2.PNG")));
        assert!(!is_converted_file(Path::new("/tmp/notes.png")));
        assert!(!is_converted_file(Path::new("/tmp/clipboard-1.tiff")));
    }

    #[test]
    fn epoch_millis_handles_pre_epoch_times() {
        let before = UNIX_EPOCH - std::time::Duration::from_millis(5);
        assert_eq!(epoch_millis(before), -5);
    }
}
