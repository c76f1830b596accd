//! Visual effects layered over the board

pub mod move_hints;

pub use move_hints::*;
