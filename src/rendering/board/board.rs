//! Board creation
//!
//! A grey slab with the 64 squares laid on top. Squares are built in one pass and
//! spawned as a batch, all sharing a single cube mesh.

use bevy::prelude::*;
use chess_rules::BoardSquare;

use crate::core::GameState;
use crate::game::board_space::square_to_world;
use crate::rendering::utils::{is_light_square, BoardTile, SquareMaterials};

/// Marker on the slab under the squares
#[derive(Component)]
pub struct Board;

/// Slab thickness; its top face is at half this height
const SLAB_HEIGHT: f32 = 0.2;
const TILE_HEIGHT: f32 = 0.1;

pub(crate) fn create_board(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    materials: Res<SquareMaterials>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(8.0, SLAB_HEIGHT, 8.0))),
        MeshMaterial3d(materials.base.clone()),
        Transform::IDENTITY,
        Board,
        Name::new("Board"),
        DespawnOnExit(GameState::InGame),
    ));

    let tile_mesh = meshes.add(Cuboid::new(1.0, TILE_HEIGHT, 1.0));
    let tiles: Vec<_> = BoardSquare::all()
        .map(|square| {
            let material = if is_light_square(square) {
                materials.light.clone()
            } else {
                materials.dark.clone()
            };
            (
                Mesh3d(tile_mesh.clone()),
                MeshMaterial3d(material),
                Transform::from_translation(square_to_world(square, SLAB_HEIGHT / 2.0)),
                BoardTile(square),
                Name::new(format!("Square {square}")),
                DespawnOnExit(GameState::InGame),
            )
        })
        .collect();
    commands.spawn_batch(tiles);

    info!("[BOARD] Board created");
}
