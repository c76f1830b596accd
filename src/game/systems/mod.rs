//! Chess game systems
//!
//! - [`session`] - the `GameSession` resource and its creation on entering `InGame`
//! - [`turn_cycle`] - per-frame animation and bot timing
//! - [`scene`] - the `PieceScene` implementation the session drives
//!
//! Board clicks are handled in [`crate::input`] and forwarded to the session.

pub mod scene;
pub mod session;
pub mod turn_cycle;

pub use scene::PieceSceneParams;
pub use session::{build_rules, setup_game_session, GameSession};
pub use turn_cycle::advance_turn_cycle;
