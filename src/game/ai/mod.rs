//! Bot opponent
//!
//! The bot plays whichever side the human does not. It has no search: it asks a
//! [`MoveSelector`] for one move from the full legal list. The turn controller decides
//! *when* to ask (after the human's move has finished animating and the reply delay
//! has elapsed).

pub mod selector;

pub use selector::{MoveSelector, RandomMoveSelector};
