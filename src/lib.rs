//! chess3d - a 3D chessboard played against a random-move bot
//!
//! - [`app`] - plugin order and app assembly
//! - [`core`] - states, settings, window and command-line configuration
//! - [`game`] - turn controller, move animation, bot
//! - [`input`] - board picking
//! - [`rendering`] - board, pieces, highlights, camera
//! - [`ui`] - egui status panel
//!
//! Chess rules come from the `chess_rules` workspace crate.

pub mod app;
pub mod core;
pub mod game;
pub mod input;
pub mod rendering;
pub mod ui;
