//! Chess rules adapter
//!
//! Wraps the `shakmaty` move generator behind the small [`RulesEngine`] surface the
//! turn cycle needs: an 8×8 board grid, legal moves (global and per square), move
//! application by `{from, to}` and the terminal-state predicates.
//!
//! ## Module Organization
//!
//! - `types` - Board squares, pieces, move requests and applied move records
//! - `engine` - The [`RulesEngine`] trait and terminal-state precedence
//! - `api` - [`ChessGame`], the shakmaty-backed implementation
//! - `error` - [`RulesError`]
//!
//! Square coordinates follow the board grid as it is printed: row 0 is rank 8,
//! column 0 is the a-file.

pub mod api;
pub mod engine;
pub mod error;
pub mod types;

pub use api::ChessGame;
pub use engine::{terminal_state, RulesEngine, TerminalState};
pub use error::{RulesError, RulesResult};
pub use types::{BoardGrid, BoardPiece, BoardSquare, MoveRecord, MoveRequest, PieceColor, PieceType};
