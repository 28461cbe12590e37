use crate::status::WatcherStatus;

/// Presentation of watcher state (the menu-bar icon and menu).
pub trait StatusPort: Send + Sync {
    fn set_status(&self, status: WatcherStatus);

    /// Briefly signal that a conversion succeeded.
    fn flash_converted(&self);
}
