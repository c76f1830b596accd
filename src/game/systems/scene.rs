//! Bevy side of [`PieceScene`]
//!
//! Spawning and despawning go through `Commands` and so land at the end of the system;
//! positions are written straight into the piece's `Transform`. A piece spawned this
//! frame has no queryable transform until the commands are applied, which only matters
//! if the same frame tried to animate it. The session never does.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use chess_rules::{BoardPiece, BoardSquare};

use crate::game::session::PieceScene;
use crate::rendering::pieces::{spawn_piece_model, PieceAssets, PieceModel};

#[derive(SystemParam)]
pub struct PieceSceneParams<'w, 's> {
    pub commands: Commands<'w, 's>,
    pub transforms: Query<'w, 's, &'static mut Transform, With<PieceModel>>,
    pub assets: Res<'w, PieceAssets>,
}

impl PieceScene for PieceSceneParams<'_, '_> {
    type Handle = Entity;

    fn spawn_piece(&mut self, square: BoardSquare, piece: BoardPiece, position: Vec3) -> Entity {
        spawn_piece_model(&mut self.commands, &self.assets, square, piece, position)
    }

    fn despawn_piece(&mut self, handle: Entity) {
        match self.commands.get_entity(handle) {
            Ok(mut entity) => entity.despawn(),
            Err(_) => debug!("[SCENE] Piece {:?} already gone", handle),
        }
    }

    fn piece_position(&self, handle: Entity) -> Option<Vec3> {
        self.transforms.get(handle).ok().map(|t| t.translation)
    }

    fn set_piece_position(&mut self, handle: Entity, position: Vec3) {
        if let Ok(mut transform) = self.transforms.get_mut(handle) {
            transform.translation = position;
        }
    }
}
