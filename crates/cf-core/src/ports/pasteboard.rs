use std::path::Path;

use crate::clipboard::{ChangeCount, PasteboardSnapshot};
use crate::ports::errors::PasteboardError;

/// The OS-wide shared clipboard.
pub trait SystemPasteboardPort: Send + Sync {
    /// Current change counter. Cheap; does not read contents.
    fn change_count(&self) -> Result<ChangeCount, PasteboardError>;

    /// Read file references and raw image bytes.
    fn read_snapshot(&self) -> Result<PasteboardSnapshot, PasteboardError>;

    /// Clear the pasteboard and put a single file reference on it.
    ///
    /// Returns the change counter observed after the write.
    fn replace_with_file(&self, path: &Path) -> Result<ChangeCount, PasteboardError>;
}
