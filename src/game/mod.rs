//! Chess game logic module
//!
//! Pure turn-cycle logic with a thin ECS layer on top. Everything below `session`,
//! `animation`, `board_space`, `status` and `ai` is plain Rust and tested without an
//! `App`; `systems` adapts it to Bevy.
//!
//! # Module Organization
//!
//! - `session` - turn controller, piece registry, selection, scene trait
//! - `animation` - fixed-step Bezier flight of a moved piece
//! - `board_space` - square ↔ world coordinates
//! - `status` - human-readable game status
//! - `ai` - bot move selection
//! - `systems` - `GameSession` resource and the systems driving it
//! - `plugin` - [`GamePlugin`], wiring the systems into [`GameSystems`] sets
//!
//! # Frame Order
//!
//! 1. Input - a click becomes a square and is handed to the session
//! 2. Execution - the session advances the piece in flight or the bot timer
//! 3. Visual - highlights follow the session

pub mod ai;
pub mod animation;
pub mod board_space;
pub mod error;
pub mod plugin;
pub mod session;
pub mod status;
pub mod system_sets;
pub mod systems;

pub use error::{GameError, GameResult};
pub use plugin::GamePlugin;
pub use status::GameStatus;
pub use system_sets::GameSystems;
pub use systems::GameSession;
