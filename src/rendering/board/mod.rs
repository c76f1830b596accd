//! Chess board rendering

pub mod board;

pub use board::*;
