//! Board picking
//!
//! A left click casts a ray from the camera through the cursor against the scene's
//! meshes, and the first hit decides the square:
//! - part of a piece: the square that piece stands on, wherever on the model the ray
//!   landed (a king's head can reach over the square behind it)
//! - anything else (a tile, the slab, a move marker): the square under the hit point,
//!   via [`world_to_square`]
//! - nothing: the ray is intersected with the plane of the square tops instead
//!
//! Anything off the board is dropped before the session sees it.

use bevy::picking::mesh_picking::ray_cast::{MeshRayCast, MeshRayCastSettings};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use chess_rules::BoardSquare;

use crate::game::board_space::world_to_square;
use crate::game::session::{ClickOutcome, PieceRegistry};
use crate::game::systems::PieceSceneParams;
use crate::game::GameSession;
use crate::rendering::camera::SceneCamera;
use crate::rendering::pieces::PieceModel;

/// Height of the square tops, where clicks are resolved
pub const PICK_PLANE_HEIGHT: f32 = 0.15;

/// Set while the cursor is over an egui panel, so clicks there don't reach the board
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PointerOverUi(pub bool);

/// First thing a click ray ran into
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickHit<H> {
    Piece(H),
    Surface(Vec3),
    Nothing,
}

/// Square hit by `ray` on the plane of the square tops, `None` if it misses the board
pub fn ray_to_square(ray: Ray3d) -> Option<BoardSquare> {
    let plane_origin = Vec3::Y * PICK_PLANE_HEIGHT;
    let distance = ray.intersect_plane(plane_origin, InfinitePlane3d::new(Vec3::Y))?;
    world_to_square(ray.get_point(distance))
}

/// Square a click resolves to
pub fn pick_square<H: Copy + PartialEq>(
    hit: PickHit<H>,
    ray: Ray3d,
    pieces: &PieceRegistry<H>,
) -> Option<BoardSquare> {
    match hit {
        // An untracked model is on its way out; treat it as scenery
        PickHit::Piece(handle) => pieces.square_of(handle).or_else(|| ray_to_square(ray)),
        PickHit::Surface(point) => world_to_square(point),
        PickHit::Nothing => ray_to_square(ray),
    }
}

/// The piece model `entity` belongs to, itself or an ancestor
pub fn owning_piece(
    entity: Entity,
    parents: &Query<&ChildOf>,
    models: &Query<(), With<PieceModel>>,
) -> Option<Entity> {
    std::iter::once(entity)
        .chain(parents.iter_ancestors(entity))
        .find(|candidate| models.contains(*candidate))
}

#[allow(clippy::too_many_arguments)]
pub fn handle_board_click(
    buttons: Res<ButtonInput<MouseButton>>,
    over_ui: Res<PointerOverUi>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<SceneCamera>>,
    mut ray_cast: MeshRayCast,
    parents: Query<&ChildOf>,
    models: Query<(), With<PieceModel>>,
    session: Option<ResMut<GameSession>>,
    mut scene: PieceSceneParams,
) {
    if !buttons.just_pressed(MouseButton::Left) || over_ui.0 {
        return;
    }
    let Some(mut session) = session else {
        return;
    };
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        warn!("[INPUT] No scene camera to pick with");
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_transform, cursor) else {
        return;
    };

    let hit = match ray_cast.cast_ray(ray, &MeshRayCastSettings::default()).first() {
        Some((entity, mesh_hit)) => match owning_piece(*entity, &parents, &models) {
            Some(piece) => PickHit::Piece(piece),
            None => PickHit::Surface(mesh_hit.point),
        },
        None => PickHit::Nothing,
    };
    let Some(square) = pick_square(hit, ray, session.pieces()) else {
        debug!("[INPUT] Click off the board");
        return;
    };

    match session.on_square_clicked(square, &mut scene) {
        ClickOutcome::Ignored => debug!("[INPUT] Click on {} ignored", square),
        ClickOutcome::Selected(square) => debug!("[INPUT] Selected {}", square),
        ClickOutcome::MoveStarted(record) => info!("[INPUT] Move {}", record),
        ClickOutcome::Rejected => debug!("[INPUT] Move to {} rejected", square),
    }
}
