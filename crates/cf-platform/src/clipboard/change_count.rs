//! Pasteboard change counter.
//!
//! macOS exposes `NSPasteboard.changeCount` directly. Elsewhere the counter
//! is synthesised: the clipboard content is hashed and the counter bumps
//! whenever the digest differs from the previous observation.

use cf_core::ports::PasteboardError;
use cf_core::ChangeCount;
use clipboard_rs::ClipboardContext;

#[cfg(target_os = "macos")]
mod imp {
    use super::*;
    use objc::runtime::Object;
    use objc::{class, msg_send, sel, sel_impl};

    #[link(name = "AppKit", kind = "framework")]
    extern "C" {}

    #[derive(Debug, Default)]
    pub struct ChangeCounter;

    impl ChangeCounter {
        pub fn current(&self, _ctx: &ClipboardContext) -> Result<ChangeCount, PasteboardError> {
            let count: isize = unsafe {
                let pasteboard: *mut Object = msg_send![class!(NSPasteboard), generalPasteboard];
                if pasteboard.is_null() {
                    return Err(PasteboardError::Unavailable(
                        "NSPasteboard.generalPasteboard returned nil".to_string(),
                    ));
                }
                msg_send![pasteboard, changeCount]
            };
            Ok(ChangeCount::new(count as i64))
        }
    }
}

#[cfg(not(target_os = "macos"))]
mod imp {
    use super::*;
    use clipboard_rs::Clipboard;
    use sha2::{Digest, Sha256};
    use std::sync::{Mutex, PoisonError};

    #[derive(Debug, Default)]
    pub struct ContentHashCounter {
        last: Option<[u8; 32]>,
        count: i64,
    }

    impl ContentHashCounter {
        pub fn observe(&mut self, digest: [u8; 32]) -> ChangeCount {
            if self.last != Some(digest) {
                self.last = Some(digest);
                self.count += 1;
            }
            ChangeCount::new(self.count)
        }
    }

    #[derive(Debug, Default)]
    pub struct ChangeCounter {
        state: Mutex<ContentHashCounter>,
    }

    impl ChangeCounter {
        pub fn current(&self, ctx: &ClipboardContext) -> Result<ChangeCount, PasteboardError> {
            let formats = ctx
                .available_formats()
                .map_err(|e| PasteboardError::Read(e.to_string()))?;

            let mut hasher = Sha256::new();
            for format in &formats {
                hasher.update(format.as_bytes());
                hasher.update([0u8]);
                if let Ok(buffer) = ctx.get_buffer(format) {
                    hasher.update((buffer.len() as u64).to_le_bytes());
                    hasher.update(&buffer);
                }
            }
            let digest: [u8; 32] = hasher.finalize().into();

            Ok(self
                .state
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .observe(digest))
        }
    }

}

pub use imp::ChangeCounter;
