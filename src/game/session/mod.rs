//! The game session: one turn controller plus its collaborators
//!
//! - [`TurnController`] - selection, move attempts, animation and bot timing
//! - [`PieceRegistry`] - which scene object stands on which square
//! - [`PieceScene`] - spawn/move/despawn surface the controller drives
//! - [`Selection`] - `Idle` or `Selected(square)`

pub mod controller;
pub mod registry;
pub mod scene;
pub mod selection;

pub use controller::{ClickOutcome, SessionConfig, TurnController};
pub use registry::{PieceRegistry, TrackedPiece};
pub use scene::PieceScene;
pub use selection::Selection;
