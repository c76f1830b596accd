//! The rules-engine surface consumed by the turn cycle
//!
//! The turn controller only ever talks to a [`RulesEngine`]; [`crate::ChessGame`] is the
//! shakmaty-backed implementation used by the application, and tests substitute
//! scripted engines where a specific position is awkward to reach.

use crate::error::RulesResult;
use crate::types::{BoardGrid, BoardPiece, BoardSquare, MoveRecord, MoveRequest, PieceColor};

/// Operations the turn cycle needs from a chess rules implementation
pub trait RulesEngine {
    /// Current board, `[row][col]` with row 0 = rank 8
    fn board(&self) -> BoardGrid;

    /// Side to move
    fn turn(&self) -> PieceColor;

    /// Every legal move in the current position
    fn legal_moves(&self) -> Vec<MoveRecord>;

    /// Legal moves whose origin is `square`
    fn legal_moves_from(&self, square: BoardSquare) -> Vec<MoveRecord> {
        self.legal_moves()
            .into_iter()
            .filter(|m| m.from == square)
            .collect()
    }

    /// Apply a move
    ///
    /// - `Ok(Some(record))` - the move was legal and is now on the board
    /// - `Ok(None)` - well-formed but illegal; position unchanged
    /// - `Err(_)` - malformed request; position unchanged
    fn apply_move(&mut self, request: MoveRequest) -> RulesResult<Option<MoveRecord>>;

    fn is_checkmate(&self) -> bool;
    fn is_stalemate(&self) -> bool;
    fn is_threefold_repetition(&self) -> bool;
    fn is_insufficient_material(&self) -> bool;

    /// Any draw, including the ones with dedicated predicates
    fn is_draw(&self) -> bool;

    fn is_game_over(&self) -> bool {
        self.is_checkmate() || self.is_draw()
    }

    fn piece_at(&self, square: BoardSquare) -> Option<BoardPiece> {
        self.board()[square.row() as usize][square.col() as usize]
    }

    /// Occupied squares in grid order
    fn occupied_squares(&self) -> Vec<BoardSquare> {
        BoardSquare::all()
            .filter(|sq| self.piece_at(*sq).is_some())
            .collect()
    }
}

/// How a finished game ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerminalState {
    Checkmate { winner: PieceColor },
    Stalemate,
    ThreefoldRepetition,
    InsufficientMaterial,
    /// Draw without a dedicated predicate (fifty-move rule)
    Draw,
}

/// Classifies the engine's position, `None` while the game is ongoing
///
/// Precedence: checkmate > stalemate > threefold repetition > insufficient material
/// > other draw. Several predicates can hold at once (a stalemate with bare kings is
/// also insufficient material); the first match wins.
pub fn terminal_state<R: RulesEngine + ?Sized>(engine: &R) -> Option<TerminalState> {
    if engine.is_checkmate() {
        return Some(TerminalState::Checkmate {
            winner: engine.turn().opposite(),
        });
    }
    if engine.is_stalemate() {
        return Some(TerminalState::Stalemate);
    }
    if engine.is_threefold_repetition() {
        return Some(TerminalState::ThreefoldRepetition);
    }
    if engine.is_insufficient_material() {
        return Some(TerminalState::InsufficientMaterial);
    }
    if engine.is_draw() {
        return Some(TerminalState::Draw);
    }
    None
}
