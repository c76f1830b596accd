//! Game status shown to the player
//!
//! Derived from the rules engine after every refresh; nothing reads it back into the
//! turn cycle.

use std::fmt;

use chess_rules::{terminal_state, PieceColor, RulesEngine, TerminalState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing {
        to_move: PieceColor,
        human_to_move: bool,
    },
    Finished(TerminalState),
}

impl GameStatus {
    /// Classify the engine's position from the human's point of view
    pub fn evaluate<R: RulesEngine + ?Sized>(rules: &R, human: PieceColor) -> Self {
        match terminal_state(rules) {
            Some(terminal) => GameStatus::Finished(terminal),
            None => {
                let to_move = rules.turn();
                GameStatus::Ongoing {
                    to_move,
                    human_to_move: to_move == human,
                }
            }
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, GameStatus::Finished(_))
    }

    pub fn message(&self) -> String {
        match self {
            GameStatus::Ongoing {
                to_move,
                human_to_move: true,
            } => format!("Your move ({to_move})"),
            GameStatus::Ongoing { to_move, .. } => format!("{to_move} to move"),
            GameStatus::Finished(TerminalState::Checkmate { winner }) => {
                format!("Checkmate! {winner} wins.")
            }
            GameStatus::Finished(TerminalState::Stalemate) => "Draw by stalemate.".to_string(),
            GameStatus::Finished(TerminalState::ThreefoldRepetition) => {
                "Draw by threefold repetition.".to_string()
            }
            GameStatus::Finished(TerminalState::InsufficientMaterial) => {
                "Draw by insufficient material.".to_string()
            }
            GameStatus::Finished(TerminalState::Draw) => "Draw.".to_string(),
        }
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        GameStatus::Ongoing {
            to_move: PieceColor::White,
            human_to_move: true,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}
