//! shakmaty-backed rules engine
//!
//! ## Module Organization
//!
//! - `game` - Game lifecycle (new game, start from FEN, board grid, side to move)
//! - `moves` - Legal-move listing and move application
//! - `state` - Terminal-state predicates and repetition bookkeeping

mod game;
mod moves;
mod state;

pub use game::ChessGame;
