//! Rendering module - 3D chess visualization
//!
//! Everything on screen except the egui panel.
//!
//! # Architecture
//!
//! - `board` - slab and the 64 square tiles
//! - `pieces` - procedural piece models and their shared assets
//! - `effects` - legal-move markers
//! - `camera` - orbit camera, lights
//! - `utils` - square colouring and materials
//!
//! Pieces are not spawned here: the game session decides which pieces exist and calls
//! [`pieces::spawn_piece_model`] through its scene adapter. Rendering only provides the
//! meshes and draws what the session leaves in the world.

use bevy::prelude::*;

use crate::core::GameState;
use crate::game::GameSystems;
use crate::input::PointerOverUi;

// Submodules
pub mod board;
pub mod camera;
pub mod effects;
pub mod pieces;
pub mod utils;

// Re-export commonly used items
pub use board::*;
pub use camera::*;
pub use effects::*;
pub use pieces::*;
pub use utils::*;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(SKY_COLOR))
            .init_resource::<SquareMaterials>()
            .init_resource::<PieceAssets>()
            .init_resource::<HintMesh>()
            .init_resource::<PointerOverUi>();

        app.add_systems(OnEnter(GameState::InGame), (create_board, setup_scene_camera))
            .add_systems(
                Update,
                (
                    (orbit_camera_input, orbit_camera_follow)
                        .chain()
                        .in_set(GameSystems::Input),
                    update_move_hints_system.in_set(GameSystems::Visual),
                )
                    .run_if(in_state(GameState::InGame)),
            );
    }
}
