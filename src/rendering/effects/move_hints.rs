//! Move hints visualization system
//!
//! Shows a translucent green block over each legal destination of the selected piece
//! when `show_hints` is enabled. Markers are rebuilt only when the set of destinations
//! (or the setting) actually changes, not on every frame the session is touched.

use bevy::prelude::*;
use chess_rules::BoardSquare;

use crate::core::{GameSettings, GameState};
use crate::game::board_space::square_to_world;
use crate::game::GameSession;
use crate::rendering::utils::SquareMaterials;

/// Marker component for highlight blocks
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveHint(pub BoardSquare);

/// Height of the marker centre, just above the square tops
const HINT_ELEVATION: f32 = 0.15;

#[derive(Resource)]
pub struct HintMesh(pub Handle<Mesh>);

impl FromWorld for HintMesh {
    fn from_world(world: &mut World) -> Self {
        let mut meshes = world.resource_mut::<Assets<Mesh>>();
        HintMesh(meshes.add(Cuboid::new(1.0, 0.1, 1.0)))
    }
}

/// Squares that should carry a marker
pub fn visible_hints(settings: &GameSettings, highlights: &[BoardSquare]) -> Vec<BoardSquare> {
    if settings.show_hints {
        highlights.to_vec()
    } else {
        Vec::new()
    }
}

pub fn update_move_hints_system(
    mut commands: Commands,
    settings: Res<GameSettings>,
    session: Option<Res<GameSession>>,
    hint_query: Query<Entity, With<MoveHint>>,
    materials: Res<SquareMaterials>,
    mesh: Res<HintMesh>,
    mut shown: Local<Vec<BoardSquare>>,
) {
    let wanted = session
        .as_ref()
        .map(|session| visible_hints(&settings, session.highlights()))
        .unwrap_or_default();
    if *shown == wanted {
        return;
    }

    for entity in hint_query.iter() {
        commands.entity(entity).despawn();
    }
    for square in &wanted {
        commands.spawn((
            Mesh3d(mesh.0.clone()),
            MeshMaterial3d(materials.highlight.clone()),
            Transform::from_translation(square_to_world(*square, HINT_ELEVATION)),
            MoveHint(*square),
            Name::new(format!("Move Hint {square}")),
            DespawnOnExit(GameState::InGame),
        ));
    }
    *shown = wanted;
}
