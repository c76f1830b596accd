//! UI module - egui status panel
//!
//! One window showing the game status, the move log and the hints toggle. The board
//! itself has no egui widgets; all play happens by clicking squares.

pub mod game_ui;
pub mod styles;
pub mod system_params;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::core::GameState;
use crate::input::PointerOverUi;

pub use game_ui::*;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerOverUi>().add_systems(
            EguiPrimaryContextPass,
            game_status_ui.run_if(in_state(GameState::InGame)),
        );
    }
}
