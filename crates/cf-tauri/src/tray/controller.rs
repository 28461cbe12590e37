use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use cf_app::App;
use cf_core::ports::StatusPort;
use cf_core::WatcherStatus;
use cf_platform::accessibility::ACCESSIBILITY_SETTINGS_URL;
use tauri::image::Image;
use tauri::menu::{CheckMenuItem, Menu, MenuItem, PredefinedMenuItem};
use tauri::tray::TrayIconBuilder;
use tauri::{AppHandle, Wry};
use tauri_plugin_opener::OpenerExt;
use tracing::{error, info, warn};

use super::layout::{menu_id, menu_layout, MenuEntry, TrayIconKind};
use super::FLASH_DURATION_MS;

const TRAY_ID: &str = "main";
const TOOLTIP: &str = "clipfile - converts clipboard images to files";

static ICON_NORMAL: &[u8] = include_bytes!("../../icons/tray.png");
static ICON_WARNING: &[u8] = include_bytes!("../../icons/tray-warning.png");
static ICON_SUCCESS: &[u8] = include_bytes!("../../icons/tray-success.png");

#[derive(Debug, Clone, Copy, Default)]
struct TrayState {
    status: WatcherStatus,
    launch_at_login: bool,
}

/// Owns the menu-bar icon. Implements [`StatusPort`] so use cases can
/// update it from any thread; all toolkit calls are marshalled onto the
/// main thread.
pub struct TrayController {
    app_handle: AppHandle,
    state: Arc<Mutex<TrayState>>,
    flash_generation: Arc<AtomicU64>,
}

impl TrayController {
    pub fn new(app_handle: AppHandle) -> Self {
        Self {
            app_handle,
            state: Arc::new(Mutex::new(TrayState::default())),
            flash_generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Create the tray icon and route menu clicks to `watcher`.
    pub fn install(self: &Arc<Self>, watcher: Arc<App>) -> tauri::Result<()> {
        let state = self.snapshot();
        let menu = build_menu(&self.app_handle, state)?;
        let controller = Arc::clone(self);

        TrayIconBuilder::with_id(TRAY_ID)
            .icon(icon(TrayIconKind::for_status(state.status))?)
            .icon_as_template(true)
            .tooltip(TOOLTIP)
            .menu(&menu)
            .on_menu_event(move |app, event| {
                controller.handle_menu_event(app, event.id().as_ref(), &watcher);
            })
            .build(&self.app_handle)?;

        Ok(())
    }

    pub fn set_launch_at_login(&self, enabled: bool) {
        self.lock_state().launch_at_login = enabled;
        self.refresh(None);
    }

    fn handle_menu_event(&self, app: &AppHandle, id: &str, watcher: &App) {
        match id {
            menu_id::CONVERT_NOW => {
                info!("Manual conversion requested");
                drop(watcher.convert_now());
            }
            menu_id::OPEN_ACCESSIBILITY_SETTINGS => {
                if let Err(e) = app.opener().open_url(ACCESSIBILITY_SETTINGS_URL, None::<&str>) {
                    error!(error = %e, "Failed to open accessibility settings");
                }
            }
            menu_id::LAUNCH_AT_LOGIN => {
                let enabled = match watcher.toggle_launch_at_login() {
                    Ok(enabled) => enabled,
                    Err(e) => {
                        error!(error = %format!("{e:#}"), "Failed to toggle launch at login");
                        watcher.launch_at_login_enabled().unwrap_or(false)
                    }
                };
                self.set_launch_at_login(enabled);
            }
            menu_id::QUIT => {
                info!("Quit requested from menu");
                app.exit(0);
            }
            other => warn!(id = other, "Unknown menu item"),
        }
    }

    fn snapshot(&self) -> TrayState {
        *self.lock_state()
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, TrayState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Re-render menu and icon. `icon_override` replaces the status icon,
    /// used for the success flash.
    fn refresh(&self, icon_override: Option<TrayIconKind>) {
        let handle = self.app_handle.clone();
        let state = self.snapshot();
        let result = self.app_handle.run_on_main_thread(move || {
            if let Err(e) = apply(&handle, state, icon_override) {
                error!(error = %e, "Failed to update tray");
            }
        });
        if let Err(e) = result {
            error!(error = %e, "Failed to schedule tray update");
        }
    }
}

impl StatusPort for TrayController {
    fn set_status(&self, status: WatcherStatus) {
        info!(status = status.label(), "Watcher status changed");
        self.lock_state().status = status;
        self.refresh(None);
    }

    fn flash_converted(&self) {
        let generation = self.flash_generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.refresh(Some(TrayIconKind::Success));

        let handle = self.app_handle.clone();
        let state = Arc::clone(&self.state);
        let flash_generation = Arc::clone(&self.flash_generation);
        tauri::async_runtime::spawn(async move {
            tokio::time::sleep(Duration::from_millis(FLASH_DURATION_MS)).await;
            // A newer flash restores the icon itself.
            if flash_generation.load(Ordering::SeqCst) != generation {
                return;
            }
            let current = *state.lock().unwrap_or_else(PoisonError::into_inner);
            let icon_handle = handle.clone();
            let _ = handle.run_on_main_thread(move || {
                if let Err(e) = apply(&icon_handle, current, None) {
                    error!(error = %e, "Failed to restore tray icon");
                }
            });
        });
    }
}

fn icon(kind: TrayIconKind) -> tauri::Result<Image<'static>> {
    Image::from_bytes(match kind {
        TrayIconKind::Normal => ICON_NORMAL,
        TrayIconKind::Warning => ICON_WARNING,
        TrayIconKind::Success => ICON_SUCCESS,
    })
}

fn apply(
    handle: &AppHandle,
    state: TrayState,
    icon_override: Option<TrayIconKind>,
) -> tauri::Result<()> {
    let Some(tray) = handle.tray_by_id(TRAY_ID) else {
        // Not installed yet; `install` renders the latest state.
        return Ok(());
    };

    let kind = icon_override.unwrap_or_else(|| TrayIconKind::for_status(state.status));
    tray.set_icon(Some(icon(kind)?))?;
    tray.set_icon_as_template(kind != TrayIconKind::Success)?;

    if icon_override.is_none() {
        tray.set_menu(Some(build_menu(handle, state)?))?;
    }
    Ok(())
}

fn build_menu(handle: &AppHandle, state: TrayState) -> tauri::Result<Menu<Wry>> {
    let menu = Menu::new(handle)?;

    for entry in menu_layout(state.status, state.launch_at_login) {
        match entry {
            MenuEntry::Label(text) => {
                menu.append(&MenuItem::new(handle, text, false, None::<&str>)?)?;
            }
            MenuEntry::Separator => {
                menu.append(&PredefinedMenuItem::separator(handle)?)?;
            }
            MenuEntry::Action {
                id,
                title,
                accelerator,
            } => {
                menu.append(&MenuItem::with_id(handle, id, title, true, accelerator)?)?;
            }
            MenuEntry::Toggle { id, title, checked } => {
                menu.append(&CheckMenuItem::with_id(
                    handle,
                    id,
                    title,
                    true,
                    checked,
                    None::<&str>,
                )?)?;
            }
        }
    }

    Ok(menu)
}
