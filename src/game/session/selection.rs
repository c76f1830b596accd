//! Selection state
//!
//! At most one square is selected at a time. The selected square always holds a piece
//! of the side to move.

use chess_rules::BoardSquare;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Idle,
    Selected(BoardSquare),
}

impl Selection {
    pub fn square(&self) -> Option<BoardSquare> {
        match self {
            Selection::Idle => None,
            Selection::Selected(square) => Some(*square),
        }
    }

    pub fn clear(&mut self) {
        *self = Selection::Idle;
    }
}
