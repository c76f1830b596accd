//! Board coordinates, pieces and move records
//!
//! [`BoardSquare`] keeps the two square representations in step: algebraic notation
//! (`"e2"`) and the zero-based `(row, col)` pair of the printed board, where row 0 is
//! rank 8. The conversion is exact in both directions:
//!
//! ```text
//! file = 'a' + col        col = file - 'a'
//! rank = 8 - row          row = 8 - rank
//! ```

use crate::error::{RulesError, RulesResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Side of a piece or of the player to move
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceColor {
    #[default]
    White,
    Black,
}

impl PieceColor {
    pub fn opposite(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceColor::White => "White",
            PieceColor::Black => "Black",
        }
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PieceColor {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "white" | "w" => Ok(PieceColor::White),
            "black" | "b" => Ok(PieceColor::Black),
            _ => Err(RulesError::InvalidColor {
                name: s.to_string(),
            }),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceType {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

impl PieceType {
    /// Upper-case letter used when printing promotions (`e7-e8=Q`)
    pub fn letter(self) -> char {
        match self {
            PieceType::King => 'K',
            PieceType::Queen => 'Q',
            PieceType::Bishop => 'B',
            PieceType::Knight => 'N',
            PieceType::Rook => 'R',
            PieceType::Pawn => 'P',
        }
    }
}

/// A piece as reported by the board grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoardPiece {
    pub piece_type: PieceType,
    pub color: PieceColor,
}

impl BoardPiece {
    pub const fn new(piece_type: PieceType, color: PieceColor) -> Self {
        Self { piece_type, color }
    }
}

/// 8×8 grid indexed `[row][col]`, row 0 = rank 8
pub type BoardGrid = [[Option<BoardPiece>; 8]; 8];

/// One square of the board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardSquare {
    row: u8,
    col: u8,
}

impl BoardSquare {
    /// Builds a square from grid coordinates, `None` outside the board
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Grid constructor for coordinates already known to be on the board
    pub(crate) const fn from_grid(row: u8, col: u8) -> Self {
        Self {
            row: row & 7,
            col: col & 7,
        }
    }

    /// Same as [`BoardSquare::new`] for signed inputs such as floored world coordinates
    pub fn try_from_coords(row: i32, col: i32) -> RulesResult<Self> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(RulesError::OutOfBoard { row, col })
        }
    }

    pub fn from_algebraic(notation: &str) -> RulesResult<Self> {
        let invalid = || RulesError::InvalidSquare {
            notation: notation.to_string(),
        };
        let mut chars = notation.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return Err(invalid());
        }
        let col = file as u8 - b'a';
        let rank = rank as u8 - b'0';
        Ok(Self { row: 8 - rank, col })
    }

    pub const fn row(self) -> u8 {
        self.row
    }

    pub const fn col(self) -> u8 {
        self.col
    }

    /// File letter `a`..=`h`
    pub fn file(self) -> char {
        (b'a' + self.col) as char
    }

    /// Rank number 1..=8
    pub const fn rank(self) -> u8 {
        8 - self.row
    }

    /// All 64 squares in grid order (a8, b8, .., h1)
    pub fn all() -> impl Iterator<Item = BoardSquare> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| BoardSquare { row, col }))
    }
}

impl fmt::Display for BoardSquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl FromStr for BoardSquare {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BoardSquare::from_algebraic(s)
    }
}

/// A move as requested by input or by the bot
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MoveRequest {
    pub from: BoardSquare,
    pub to: BoardSquare,
    /// Promotion piece; `None` lets the engine default to a queen
    pub promotion: Option<PieceType>,
}

impl MoveRequest {
    pub const fn new(from: BoardSquare, to: BoardSquare) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }
}

/// Immutable record of a move the rules engine has applied (or lists as legal)
///
/// Castling is reported as the king's two-square move (`e1-g1`), matching how a
/// player clicks it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MoveRecord {
    pub from: BoardSquare,
    pub to: BoardSquare,
    pub mover: PieceColor,
    pub piece: PieceType,
    pub promotion: Option<PieceType>,
    pub captured: Option<PieceType>,
}

impl MoveRecord {
    pub fn request(&self) -> MoveRequest {
        MoveRequest {
            from: self.from,
            to: self.to,
            promotion: self.promotion,
        }
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.captured.is_some() { 'x' } else { '-' };
        write!(f, "{}{}{}", self.from, sep, self.to)?;
        if let Some(promotion) = self.promotion {
            write!(f, "={}", promotion.letter())?;
        }
        Ok(())
    }
}
