use cf_core::ports::{KeyChordSender, KeyMonitorError, KeyMonitorPort};
use tracing::warn;

/// Stand-in on platforms without a global key tap. Only "Convert Now"
/// works there.
#[derive(Debug, Default)]
pub struct UnsupportedKeyMonitor;

impl UnsupportedKeyMonitor {
    pub fn new() -> Self {
        Self
    }
}

impl KeyMonitorPort for UnsupportedKeyMonitor {
    fn start(&self, _sink: KeyChordSender) -> Result<(), KeyMonitorError> {
        warn!("Global key monitoring is only available on macOS");
        Err(KeyMonitorError::Unsupported)
    }
}
