//! Board rendering utilities - square component and materials
//!
//! - **BoardTile**: Component identifying which square a board tile depicts
//! - **SquareMaterials**: Shared materials for the slab, the squares and the move
//!   highlights
//!
//! # Chess Board Coloring
//!
//! Light squares are those with an even `row + col`. Row 0 is rank 8, so a8 and h1 come
//! out light as on a real board.

use bevy::prelude::*;
use chess_rules::BoardSquare;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardTile(pub BoardSquare);

/// Returns true if this square is a light square
pub fn is_light_square(square: BoardSquare) -> bool {
    (square.row() + square.col()).is_multiple_of(2)
}

#[derive(Resource)]
pub struct SquareMaterials {
    pub light: Handle<StandardMaterial>,
    pub dark: Handle<StandardMaterial>,
    pub base: Handle<StandardMaterial>,
    /// Translucent marker over legal destinations
    pub highlight: Handle<StandardMaterial>,
}

impl FromWorld for SquareMaterials {
    fn from_world(world: &mut World) -> Self {
        let mut materials = world.resource_mut::<Assets<StandardMaterial>>();
        SquareMaterials {
            light: materials.add(Color::WHITE),
            dark: materials.add(Color::BLACK),
            base: materials.add(Color::srgb_u8(0x80, 0x80, 0x80)),
            highlight: materials.add(StandardMaterial {
                base_color: Color::srgba(0.0, 1.0, 0.0, 0.5),
                alpha_mode: AlphaMode::Blend,
                ..default()
            }),
        }
    }
}
