//! What the tray menu contains for each watcher state, independent of the
//! toolkit that renders it.

use cf_core::WatcherStatus;

pub mod menu_id {
    pub const CONVERT_NOW: &str = "convert_now";
    pub const OPEN_ACCESSIBILITY_SETTINGS: &str = "open_accessibility_settings";
    pub const LAUNCH_AT_LOGIN: &str = "launch_at_login";
    pub const QUIT: &str = "quit";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    /// Disabled status line.
    Label(&'static str),
    Separator,
    Action {
        id: &'static str,
        title: &'static str,
        accelerator: Option<&'static str>,
    },
    Toggle {
        id: &'static str,
        title: &'static str,
        checked: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayIconKind {
    Normal,
    Warning,
    Success,
}

impl TrayIconKind {
    pub fn for_status(status: WatcherStatus) -> Self {
        match status {
            WatcherStatus::PermissionNeeded => TrayIconKind::Warning,
            WatcherStatus::Starting | WatcherStatus::Listening => TrayIconKind::Normal,
        }
    }
}

const QUIT: MenuEntry = MenuEntry::Action {
    id: menu_id::QUIT,
    title: "Quit",
    accelerator: Some("CmdOrCtrl+Q"),
};

pub fn menu_layout(status: WatcherStatus, launch_at_login: bool) -> Vec<MenuEntry> {
    let launch_toggle = MenuEntry::Toggle {
        id: menu_id::LAUNCH_AT_LOGIN,
        title: "Launch at Login",
        checked: launch_at_login,
    };

    match status {
        WatcherStatus::Starting => vec![
            MenuEntry::Label(status.label()),
            MenuEntry::Separator,
            convert_now("Convert Now"),
            MenuEntry::Separator,
            QUIT,
        ],
        WatcherStatus::Listening => vec![
            MenuEntry::Label(status.label()),
            MenuEntry::Separator,
            convert_now("Convert Now"),
            MenuEntry::Separator,
            launch_toggle,
            MenuEntry::Separator,
            QUIT,
        ],
        WatcherStatus::PermissionNeeded => vec![
            MenuEntry::Label(status.label()),
            MenuEntry::Action {
                id: menu_id::OPEN_ACCESSIBILITY_SETTINGS,
                title: "Open Accessibility Settings...",
                accelerator: None,
            },
            MenuEntry::Separator,
            convert_now("Convert Now (manual)"),
            MenuEntry::Separator,
            launch_toggle,
            MenuEntry::Separator,
            QUIT,
        ],
    }
}

fn convert_now(title: &'static str) -> MenuEntry {
    MenuEntry::Action {
        id: menu_id::CONVERT_NOW,
        title,
        accelerator: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(entries: &[MenuEntry]) -> Vec<&'static str> {
        entries
            .iter()
            .filter_map(|entry| match entry {
                MenuEntry::Action { id, .. } | MenuEntry::Toggle { id, .. } => Some(*id),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn permission_needed_offers_settings_link() {
        let entries = menu_layout(WatcherStatus::PermissionNeeded, false);
        assert_eq!(
            entries[0],
            MenuEntry::Label("⚠️ Accessibility Permission Required")
        );
        assert_eq!(
            ids(&entries),
            vec![
                menu_id::OPEN_ACCESSIBILITY_SETTINGS,
                menu_id::CONVERT_NOW,
                menu_id::LAUNCH_AT_LOGIN,
                menu_id::QUIT
            ]
        );
    }

    #[test]
    fn listening_hides_settings_link() {
        let entries = menu_layout(WatcherStatus::Listening, true);
        assert_eq!(entries[0], MenuEntry::Label("✓ Listening for copy events"));
        assert!(!ids(&entries).contains(&menu_id::OPEN_ACCESSIBILITY_SETTINGS));
        assert!(entries.contains(&MenuEntry::Toggle {
            id: menu_id::LAUNCH_AT_LOGIN,
            title: "Launch at Login",
            checked: true,
        }));
    }

    #[test]
    fn starting_menu_is_minimal() {
        let entries = menu_layout(WatcherStatus::Starting, false);
        assert_eq!(ids(&entries), vec![menu_id::CONVERT_NOW, menu_id::QUIT]);
        assert_eq!(entries.last(), Some(&QUIT));
    }

    #[test]
    fn warning_icon_only_without_permission() {
        assert_eq!(
            TrayIconKind::for_status(WatcherStatus::PermissionNeeded),
            TrayIconKind::Warning
        );
        assert_eq!(
            TrayIconKind::for_status(WatcherStatus::Listening),
            TrayIconKind::Normal
        );
    }
}
