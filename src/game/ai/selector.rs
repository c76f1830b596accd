//! Move selection strategies
//!
//! The bot is anything that can pick one entry from a list of legal moves. The only
//! strategy shipped is a uniform random pick; tests seed it for reproducible games.

use chess_rules::MoveRecord;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chooses the bot's reply from the full legal-move list
pub trait MoveSelector: Send + Sync {
    fn name(&self) -> &'static str;

    /// `None` only when `legal_moves` is empty
    fn select(&mut self, legal_moves: &[MoveRecord]) -> Option<MoveRecord>;
}

/// Uniform random choice over legal moves
#[derive(Debug, Clone)]
pub struct RandomMoveSelector {
    rng: StdRng,
}

impl RandomMoveSelector {
    /// Seeded from the OS
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Same seed, same sequence of choices
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::seeded)
    }
}

impl Default for RandomMoveSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSelector for RandomMoveSelector {
    fn name(&self) -> &'static str {
        "random"
    }

    fn select(&mut self, legal_moves: &[MoveRecord]) -> Option<MoveRecord> {
        if legal_moves.is_empty() {
            return None;
        }
        let index = self.rng.random_range(0..legal_moves.len());
        Some(legal_moves[index])
    }
}
