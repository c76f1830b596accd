//! Board ↔ world coordinate mapping
//!
//! The board lies in the XZ plane centred on the origin, one world unit per square.
//! Row 0 (rank 8) is at the back (`z = -3.5`), column 0 (file a) on the left
//! (`x = -3.5`):
//!
//! ```text
//! x = col - 3.5        col = floor(x + 4)
//! z = row - 3.5        row = floor(z + 4)
//! ```

use bevy::prelude::*;
use chess_rules::BoardSquare;

/// Half the board width in world units
pub const BOARD_HALF_EXTENT: f32 = 4.0;

/// Centre of `square` at height `elevation`
pub fn square_to_world(square: BoardSquare, elevation: f32) -> Vec3 {
    Vec3::new(
        f32::from(square.col()) - 3.5,
        elevation,
        f32::from(square.row()) - 3.5,
    )
}

/// Square under a point on (or above) the board, `None` off the board
pub fn world_to_square(point: Vec3) -> Option<BoardSquare> {
    if !point.x.is_finite() || !point.z.is_finite() {
        return None;
    }
    let col = (point.x + BOARD_HALF_EXTENT).floor() as i32;
    let row = (point.z + BOARD_HALF_EXTENT).floor() as i32;
    BoardSquare::try_from_coords(row, col).ok()
}
