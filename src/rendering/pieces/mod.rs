//! Chess pieces rendering module
//!
//! Procedural piece models and the assets they share.

pub mod pieces;

// Re-export all public items
pub use pieces::*;
