use tokio::sync::mpsc;

use crate::ports::errors::KeyMonitorError;
use crate::shortcut::KeyChord;

pub type KeyChordSender = mpsc::UnboundedSender<KeyChord>;
pub type KeyChordReceiver = mpsc::UnboundedReceiver<KeyChord>;

/// Global (system-wide) key-down monitor.
pub trait KeyMonitorPort: Send + Sync {
    /// Start delivering key-down chords into `sink`.
    ///
    /// Fails when the OS refuses the monitor, which usually means the
    /// accessibility permission is missing. The monitor holds `sink` while
    /// it delivers; dropping it tells the app that shortcuts stopped.
    fn start(&self, sink: KeyChordSender) -> Result<(), KeyMonitorError>;
}
