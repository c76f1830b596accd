//! Error types for game module
//!
//! Covers the turn cycle: session setup and keeping on-screen pieces in step with the
//! rules engine.

use chess_rules::{BoardSquare, RulesError};

/// Errors that can occur in game logic
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// No on-screen piece tracked at a square the rules engine moved from
    #[error("No piece entity tracked at {square}")]
    PieceNotFound { square: BoardSquare },

    /// A tracked entity has no readable position
    #[error("Piece entity at {square} has no position")]
    MissingTransform { square: BoardSquare },

    /// Rules engine refused the request or the setup
    #[error(transparent)]
    Rules(#[from] RulesError),
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
