use super::{ChangeCount, RawImage};

/// What the watcher sees on the pasteboard at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteboardSnapshot {
    pub change_count: ChangeCount,
    /// File URLs or paths currently on the pasteboard.
    pub file_references: Vec<String>,
    /// Raw image bytes, if any image representation is present.
    pub image: Option<RawImage>,
}

impl PasteboardSnapshot {
    pub fn empty(change_count: ChangeCount) -> Self {
        Self {
            change_count,
            file_references: Vec::new(),
            image: None,
        }
    }

    pub fn has_file_reference(&self) -> bool {
        !self.file_references.is_empty()
    }

    /// Raw image bytes that are safe to convert: present and not already
    /// accompanied by a file reference.
    pub fn convertible_image(&self) -> Option<&RawImage> {
        if self.has_file_reference() {
            return None;
        }
        self.image.as_ref()
    }
}
