pub mod config;
#[cfg(target_os = "macos")]
pub mod run;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, load_config_or_default, resolve_config_path};
#[cfg(target_os = "macos")]
pub use run::run_app;
pub use self::tracing::init_tracing_subscriber;
pub use wiring::wire_dependencies;
