//! Game lifecycle and conversions between shakmaty and board types

use std::collections::HashMap;

use shakmaty::fen::Fen;
use shakmaty::zobrist::Zobrist64;
use shakmaty::{CastlingMode, Chess, Color, Position, Role, Square};

use crate::engine::RulesEngine;
use crate::error::{RulesError, RulesResult};
use crate::types::{
    BoardGrid, BoardPiece, BoardSquare, MoveRecord, MoveRequest, PieceColor, PieceType,
};

/// A chess game: the current position plus the history needed for repetition draws
#[derive(Clone, Debug)]
pub struct ChessGame {
    pub(super) position: Chess,
    /// Occurrences of each position (placement, side to move, castling, en passant)
    pub(super) repetitions: HashMap<Zobrist64, u32>,
}

impl Default for ChessGame {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessGame {
    /// Standard starting position
    pub fn new() -> Self {
        Self::from_position(Chess::default())
    }

    /// Start from a FEN string
    pub fn from_fen(fen: &str) -> RulesResult<Self> {
        let invalid = |message: String| RulesError::InvalidPosition {
            fen: fen.to_string(),
            message,
        };
        let parsed: Fen = fen.parse().map_err(|e| invalid(format!("{e}")))?;
        let position: Chess = parsed
            .into_position(CastlingMode::Standard)
            .map_err(|e| invalid(format!("{e}")))?;
        Ok(Self::from_position(position))
    }

    fn from_position(position: Chess) -> Self {
        let mut game = Self {
            position,
            repetitions: HashMap::new(),
        };
        game.record_position();
        game
    }

    /// Parse both squares and apply the move
    ///
    /// Unparseable notation is an error, exactly like a malformed request.
    pub fn apply_notation(&mut self, from: &str, to: &str) -> RulesResult<Option<MoveRecord>> {
        let request = MoveRequest::new(from.parse()?, to.parse()?);
        self.apply_move(request)
    }
}

impl RulesEngine for ChessGame {
    fn board(&self) -> BoardGrid {
        let mut grid: BoardGrid = [[None; 8]; 8];
        let board = self.position.board();
        for square in BoardSquare::all() {
            grid[square.row() as usize][square.col() as usize] = board
                .piece_at(to_shakmaty(square))
                .map(|piece| BoardPiece::new(piece_type(piece.role), piece_color(piece.color)));
        }
        grid
    }

    fn turn(&self) -> PieceColor {
        piece_color(self.position.turn())
    }

    fn legal_moves(&self) -> Vec<MoveRecord> {
        self.collect_legal_moves()
    }

    fn apply_move(&mut self, request: MoveRequest) -> RulesResult<Option<MoveRecord>> {
        self.play_request(request)
    }

    fn piece_at(&self, square: BoardSquare) -> Option<BoardPiece> {
        self.position
            .board()
            .piece_at(to_shakmaty(square))
            .map(|piece| BoardPiece::new(piece_type(piece.role), piece_color(piece.color)))
    }

    fn is_checkmate(&self) -> bool {
        self.position.is_checkmate()
    }

    fn is_stalemate(&self) -> bool {
        self.position.is_stalemate()
    }

    fn is_threefold_repetition(&self) -> bool {
        self.repetition_count() >= 3
    }

    fn is_insufficient_material(&self) -> bool {
        self.position.is_insufficient_material()
    }

    fn is_draw(&self) -> bool {
        self.is_stalemate()
            || self.is_threefold_repetition()
            || self.is_insufficient_material()
            || self.is_fifty_move_draw()
    }
}

pub(super) fn to_shakmaty(square: BoardSquare) -> Square {
    let rank_index = u32::from(7 - square.row());
    Square::new(rank_index * 8 + u32::from(square.col()))
}

pub(super) fn from_shakmaty(square: Square) -> BoardSquare {
    let col = square.file().char() as u8 - b'a';
    let rank = square.rank().char() as u8 - b'0';
    BoardSquare::from_grid(8 - rank, col)
}

pub(super) fn piece_color(color: Color) -> PieceColor {
    match color {
        Color::White => PieceColor::White,
        Color::Black => PieceColor::Black,
    }
}

pub(super) fn piece_type(role: Role) -> PieceType {
    match role {
        Role::King => PieceType::King,
        Role::Queen => PieceType::Queen,
        Role::Bishop => PieceType::Bishop,
        Role::Knight => PieceType::Knight,
        Role::Rook => PieceType::Rook,
        Role::Pawn => PieceType::Pawn,
    }
}

pub(super) fn role(piece_type: PieceType) -> Role {
    match piece_type {
        PieceType::King => Role::King,
        PieceType::Queen => Role::Queen,
        PieceType::Bishop => Role::Bishop,
        PieceType::Knight => Role::Knight,
        PieceType::Rook => Role::Rook,
        PieceType::Pawn => Role::Pawn,
    }
}
