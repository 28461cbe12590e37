//! clipfile application layer
//!
//! This crate contains the use cases and the debounced check scheduler.
//! It depends only on `cf-core` ports; adapters are injected through
//! [`AppDeps`].

pub mod app;
pub mod deps;
pub mod scheduler;
pub mod usecases;

#[cfg(test)]
mod test_support;

pub use app::App;
pub use deps::AppDeps;
pub use scheduler::ClipboardCheckScheduler;
