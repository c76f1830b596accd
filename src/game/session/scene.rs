//! The turn controller's view of the rendered scene
//!
//! The controller decides which pieces exist and where they fly; the scene owns their
//! visual lifetime. In the app this is a `SystemParam` over `Commands` and piece
//! transforms, in tests a plain map.

use std::fmt::Debug;

use bevy::math::Vec3;
use chess_rules::{BoardPiece, BoardSquare};

pub trait PieceScene {
    type Handle: Copy + Eq + Debug;

    /// Create the visual for `piece` standing on `square`
    fn spawn_piece(&mut self, square: BoardSquare, piece: BoardPiece, position: Vec3)
        -> Self::Handle;

    fn despawn_piece(&mut self, handle: Self::Handle);

    /// Current position, `None` if the object is gone
    fn piece_position(&self, handle: Self::Handle) -> Option<Vec3>;

    fn set_piece_position(&mut self, handle: Self::Handle, position: Vec3);
}
