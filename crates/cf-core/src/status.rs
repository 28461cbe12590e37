/// What the menu bar shows about the watcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WatcherStatus {
    /// Permission has not been checked yet.
    #[default]
    Starting,
    /// The global key monitor is running.
    Listening,
    /// Accessibility access is missing; only manual conversion works.
    PermissionNeeded,
}

impl WatcherStatus {
    pub fn label(&self) -> &'static str {
        match self {
            WatcherStatus::Starting => "Checking permissions...",
            WatcherStatus::Listening => "✓ Listening for copy events",
            WatcherStatus::PermissionNeeded => "⚠️ Accessibility Permission Required",
        }
    }
}
