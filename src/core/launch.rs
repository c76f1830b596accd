//! Command-line options
//!
//! Every flag overrides the matching [`GameSettings`] field for this run only.

use clap::Parser;

use chess_rules::PieceColor;

use super::GameSettings;

#[derive(Parser, Debug, Clone, Default, PartialEq)]
#[command(name = "chess3d", about = "3D chess against a random-move bot")]
pub struct LaunchOptions {
    /// Side you play: white or black
    #[arg(long, value_name = "COLOR")]
    pub human: Option<PieceColor>,

    /// Seed for the bot's move choice
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start position in FEN
    #[arg(long, value_name = "FEN")]
    pub fen: Option<String>,

    /// Log filter, e.g. "info,chess3d=debug"
    #[arg(long = "log", value_name = "FILTER")]
    pub log_filter: Option<String>,

    /// Hide legal-move markers
    #[arg(long)]
    pub no_hints: bool,
}

impl LaunchOptions {
    pub fn apply_to(&self, settings: &mut GameSettings) {
        if let Some(human) = self.human {
            settings.human = human;
        }
        if let Some(seed) = self.seed {
            settings.bot.seed = Some(seed);
        }
        if let Some(fen) = &self.fen {
            settings.start_fen = Some(fen.clone());
        }
        if let Some(filter) = &self.log_filter {
            settings.log_filter = filter.clone();
        }
        if self.no_hints {
            settings.show_hints = false;
        }
    }
}
