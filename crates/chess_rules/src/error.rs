//! Error types for the rules adapter
//!
//! An illegal-but-well-formed move is not an error: [`crate::RulesEngine::apply_move`]
//! reports it as `Ok(None)`. Everything here is a malformed input or a position the
//! underlying move generator refuses to load.

use thiserror::Error;

/// Errors that can occur in the rules adapter
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// Square text is not a file letter followed by a rank digit
    #[error("Invalid square notation: {notation:?}")]
    InvalidSquare { notation: String },

    /// Side name other than white/black
    #[error("Invalid side: {name:?} (expected white or black)")]
    InvalidColor { name: String },

    /// Row or column outside 0..8
    #[error("Square coordinates out of range: row {row}, col {col}")]
    OutOfBoard { row: i32, col: i32 },

    /// The move generator rejected a move it had listed as legal
    #[error("Rules engine refused move {from}-{to}: {message}")]
    MoveRejected {
        from: String,
        to: String,
        message: String,
    },

    /// FEN text could not be parsed or describes an illegal setup
    #[error("Invalid start position {fen:?}: {message}")]
    InvalidPosition { fen: String, message: String },
}

/// Result type alias for rules operations
pub type RulesResult<T> = Result<T, RulesError>;
