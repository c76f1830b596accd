//! Application states
//!
//! ```text
//! [Loading] → [InGame]
//! ```
//!
//! `Loading` lasts for the startup frame: settings are in place and the shared mesh and
//! material assets are built before the board and the game session are created on
//! entering `InGame`.

use bevy::prelude::*;

/// Primary game state controlling major application modes
#[derive(Clone, Copy, Resource, PartialEq, Eq, Hash, Debug, Default, States, Reflect)]
pub enum GameState {
    /// Startup: settings applied, assets being prepared
    #[default]
    Loading,

    /// Board on screen, turn cycle running
    InGame,
}

/// Leaves `Loading` once startup systems have run
pub fn finish_loading(mut next_state: ResMut<NextState<GameState>>) {
    info!("[STATE] Loading complete, entering InGame");
    next_state.set(GameState::InGame);
}

/// Logs every state change
pub fn log_state_transitions(state: Res<State<GameState>>) {
    if state.is_changed() {
        debug!("[STATE] Current state: {:?}", state.get());
    }
}
