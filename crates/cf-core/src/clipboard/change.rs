use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque, monotonically increasing pasteboard change counter.
///
/// On macOS this is `NSPasteboard.changeCount`. It is only ever compared for
/// equality with a previously observed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ChangeCount(i64);

impl ChangeCount {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for ChangeCount {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ChangeCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
