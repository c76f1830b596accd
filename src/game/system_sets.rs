//! System organization using SystemSets
//!
//! Systems run in this order each frame:
//! 1. **Input** - board clicks
//! 2. **Execution** - animation progress, bot reply
//! 3. **Visual** - move-hint markers
//!
//! A click that starts a move is therefore animated the same frame, and highlights
//! always reflect the session state after both.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SystemSet)]
pub enum GameSystems {
    /// Pointer input
    Input,

    /// Turn cycle: piece in flight, bot timer
    Execution,

    /// Highlights and other visual feedback
    Visual,
}
