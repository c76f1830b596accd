//! Terminal-state bookkeeping
//!
//! shakmaty answers checkmate, stalemate and insufficient material from the position
//! alone. Repetition needs history, so every position reached is counted by its
//! Zobrist key (placement, side to move, castling rights, legal en passant square).

use shakmaty::zobrist::Zobrist64;
use shakmaty::{EnPassantMode, Position};

use super::game::ChessGame;

/// Half-moves without capture or pawn move after which the game is drawn
const FIFTY_MOVE_HALFMOVES: u32 = 100;

impl ChessGame {
    pub(super) fn record_position(&mut self) {
        let key = self.position_key();
        *self.repetitions.entry(key).or_insert(0) += 1;
    }

    /// How many times the current position has occurred, including now
    pub fn repetition_count(&self) -> u32 {
        self.repetitions
            .get(&self.position_key())
            .copied()
            .unwrap_or(0)
    }

    pub fn is_fifty_move_draw(&self) -> bool {
        self.position.halfmoves() >= FIFTY_MOVE_HALFMOVES
    }

    fn position_key(&self) -> Zobrist64 {
        self.position.zobrist_hash::<Zobrist64>(EnPassantMode::Legal)
    }
}
