//! Application assembly
//!
//! # Plugin Order
//!
//! 1. Platform plugins - [`bevy::DefaultPlugins`] in the binary, `MinimalPlugins` plus
//!    `StatesPlugin` in headless tests. `StatesPlugin` has to be in before
//!    [`CorePlugin`] calls `init_state`, or Bevy panics on the missing
//!    `StateTransition` schedule.
//! 2. [`CorePlugin`] - state, settings, window config
//! 3. [`bevy_egui::EguiPlugin`] - UI framework
//! 4. [`RenderingPlugin`], [`GamePlugin`], [`UiPlugin`]
//!
//! System errors go to Bevy's logging `error` handler rather than the default panic,
//! so a failed game setup stays on screen in the status panel.

use bevy::app::Plugins;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use crate::core::CorePlugin;
use crate::game::GamePlugin;
use crate::rendering::RenderingPlugin;
use crate::ui::UiPlugin;

/// Platform plugins followed by [`CorePlugin`]
pub fn core_app<M>(platform: impl Plugins<M>, core: CorePlugin) -> App {
    let mut app = App::new();
    app.set_error_handler(bevy::ecs::error::error)
        .add_plugins(platform)
        .add_plugins(core);
    app
}

/// The full game on top of `platform`
pub fn build_app<M>(platform: impl Plugins<M>, core: CorePlugin) -> App {
    let mut app = core_app(platform, core);
    app.add_plugins(EguiPlugin::default())
        .add_plugins((RenderingPlugin, GamePlugin, UiPlugin));
    app
}
