//! Core module - application infrastructure
//!
//! # Contents
//!
//! - [`GameState`] - `Loading → InGame`
//! - [`GameSettings`] - user preferences, persisted as JSON
//! - [`LaunchOptions`] - command-line overrides
//! - [`WindowConfig`] - primary window settings
//! - [`CorePlugin`] - wires the above into the app

pub mod error;
pub mod launch;
pub mod plugin;
pub mod resources;
pub mod settings_persistence;
pub mod states;
pub mod window_config;

// Re-export commonly used items
pub use error::{CoreError, CoreResult};
pub use launch::LaunchOptions;
pub use plugin::CorePlugin;
pub use resources::*;
pub use settings_persistence::SettingsStore;
pub use states::*;
pub use window_config::WindowConfig;
