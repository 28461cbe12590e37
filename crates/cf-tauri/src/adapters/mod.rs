pub mod autostart;

pub use autostart::TauriAutostart;
