//! Input module - board clicks
//!
//! Clicks are ray cast against the scene meshes. A hit on a piece selects the square
//! the piece stands on; a hit anywhere else becomes the square under the hit point.

pub mod pointer;

// Re-export commonly used items
pub use pointer::*;
