//! Game plugin - turn cycle systems
//!
//! # Plugin Dependencies
//!
//! - [`crate::core::CorePlugin`] - state and settings
//! - [`crate::rendering::RenderingPlugin`] - piece assets used when the session spawns
//!   pieces
//!
//! # System Organization
//!
//! The session is created on entering `InGame`. From then on the [`GameSystems`] sets
//! run chained, `Input → Execution → Visual`, only while in `InGame`.

use bevy::prelude::*;

use super::system_sets::GameSystems;
use super::systems::{advance_turn_cycle, setup_game_session};
use crate::core::GameState;
use crate::input::handle_board_click;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                GameSystems::Input,
                GameSystems::Execution,
                GameSystems::Visual,
            )
                .chain()
                .run_if(in_state(GameState::InGame)),
        );

        app.add_systems(OnEnter(GameState::InGame), setup_game_session)
            .add_systems(
                Update,
                (
                    handle_board_click.in_set(GameSystems::Input),
                    advance_turn_cycle.in_set(GameSystems::Execution),
                ),
            );
    }
}
