//! Square → on-screen piece mapping
//!
//! The turn controller is the only writer. Handles are whatever the scene hands out
//! (`Entity` in the app, plain integers in tests).

use std::collections::HashMap;

use chess_rules::{BoardPiece, BoardSquare};

use crate::game::error::{GameError, GameResult};

/// A scene object and the piece it depicts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackedPiece<H> {
    pub handle: H,
    pub piece: BoardPiece,
}

#[derive(Debug, Clone)]
pub struct PieceRegistry<H> {
    entries: HashMap<BoardSquare, TrackedPiece<H>>,
}

impl<H> Default for PieceRegistry<H> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<H: Copy> PieceRegistry<H> {
    pub fn get(&self, square: BoardSquare) -> Option<&TrackedPiece<H>> {
        self.entries.get(&square)
    }

    pub fn handle_at(&self, square: BoardSquare) -> Option<H> {
        self.entries.get(&square).map(|tracked| tracked.handle)
    }

    /// Square of the piece shown by `handle`
    pub fn square_of(&self, handle: H) -> Option<BoardSquare>
    where
        H: PartialEq,
    {
        self.entries
            .iter()
            .find(|(_, tracked)| tracked.handle == handle)
            .map(|(square, _)| *square)
    }

    /// Track a piece, returning whatever was tracked there before
    pub fn insert(&mut self, square: BoardSquare, tracked: TrackedPiece<H>) -> Option<TrackedPiece<H>> {
        self.entries.insert(square, tracked)
    }

    pub fn remove(&mut self, square: BoardSquare) -> Option<TrackedPiece<H>> {
        self.entries.remove(&square)
    }

    /// Move the entry at `from` to `to`
    ///
    /// Returns the entry that was displaced at `to` (a captured piece), which the caller
    /// must despawn.
    pub fn relocate(
        &mut self,
        from: BoardSquare,
        to: BoardSquare,
    ) -> GameResult<Option<TrackedPiece<H>>> {
        let moving = self
            .entries
            .remove(&from)
            .ok_or(GameError::PieceNotFound { square: from })?;
        Ok(self.entries.insert(to, moving))
    }

    /// Tracked squares in grid order
    pub fn squares(&self) -> Vec<BoardSquare> {
        let mut squares: Vec<_> = self.entries.keys().copied().collect();
        squares.sort();
        squares
    }

    pub fn iter(&self) -> impl Iterator<Item = (BoardSquare, &TrackedPiece<H>)> {
        self.entries.iter().map(|(square, tracked)| (*square, tracked))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
