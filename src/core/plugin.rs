//! Core plugin
//!
//! Provides fundamental application setup:
//! - Window configuration
//! - Settings resource and persistence
//! - State management setup
//!
//! Needs `StatesPlugin` (part of [`bevy::DefaultPlugins`]) added first; see
//! [`crate::app`] for the full plugin order.

use bevy::prelude::*;

use super::settings_persistence::{report_settings_source, save_settings_system, SettingsStore};
use super::states::{finish_loading, log_state_transitions};
use super::{GameSettings, GameState, WindowConfig};

/// Core plugin for the application
///
/// Holds the settings resolved in `main` (file plus command line) and the store they
/// were loaded from.
pub struct CorePlugin {
    pub settings: GameSettings,
    pub store: SettingsStore,
    pub window: WindowConfig,
}

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.window.clone())
            .insert_resource(self.settings.clone())
            .insert_resource(self.store.clone());

        app.init_state::<GameState>();

        app.register_type::<WindowConfig>();

        app.add_systems(Startup, (report_settings_source, finish_loading))
            .add_systems(Update, (log_state_transitions, save_settings_system));
    }
}
