//! Core resources for game-wide configuration
//!
//! [`GameSettings`] is built once before the app starts (file, then command line) and is
//! read by the session, the animation, the bot and the renderer. Only `show_hints` is
//! changed at runtime, from the status panel.

use bevy::prelude::*;
use chess_rules::PieceColor;
use serde::{Deserialize, Serialize};

use super::error::{CoreError, CoreResult};

/// User-tunable game configuration
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Piece flight between squares
    pub animation: AnimationSettings,

    /// Opponent behaviour
    pub bot: BotSettings,

    /// Side the human plays
    pub human: PieceColor,

    /// Start position, standard setup when absent
    pub start_fen: Option<String>,

    /// Whether to show legal destinations of the selected piece
    pub show_hints: bool,

    /// `EnvFilter`-style log directive handed to Bevy's `LogPlugin`
    pub log_filter: String,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            animation: AnimationSettings::default(),
            bot: BotSettings::default(),
            human: PieceColor::White,
            start_fen: None,
            show_hints: true,
            log_filter: "info,wgpu=error,naga=warn".to_string(),
        }
    }
}

impl GameSettings {
    /// Reject values the animation and bot timers cannot work with
    pub fn validate(&self) -> CoreResult<()> {
        let anim = &self.animation;
        if anim.steps == 0 {
            return Err(invalid("animation.steps", "must be at least 1"));
        }
        if !anim.duration_secs.is_finite() || anim.duration_secs < 0.0 {
            return Err(invalid(
                "animation.duration_secs",
                format!("{} is not a non-negative duration", anim.duration_secs),
            ));
        }
        if !anim.arc_height.is_finite() || !anim.piece_elevation.is_finite() {
            return Err(invalid("animation", "heights must be finite"));
        }
        if !self.bot.reply_delay_secs.is_finite() || self.bot.reply_delay_secs < 0.0 {
            return Err(invalid(
                "bot.reply_delay_secs",
                format!("{} is not a non-negative delay", self.bot.reply_delay_secs),
            ));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, message: impl Into<String>) -> CoreError {
    CoreError::InvalidSetting {
        field,
        message: message.into(),
    }
}

/// Fixed-step Bezier flight of a moved piece
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    /// Number of interpolation steps per move
    pub steps: u32,
    /// Total flight time in seconds
    pub duration_secs: f32,
    /// Height of the Bezier control point
    pub arc_height: f32,
    /// Resting height of pieces above the board origin
    pub piece_elevation: f32,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            steps: 30,
            duration_secs: 1.0,
            arc_height: 1.5,
            piece_elevation: 0.15,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotSettings {
    /// Pause between the end of the human's move and the bot's reply
    pub reply_delay_secs: f32,
    /// Fixed RNG seed for reproducible games
    pub seed: Option<u64>,
}

impl Default for BotSettings {
    fn default() -> Self {
        Self {
            reply_delay_secs: 0.3,
            seed: None,
        }
    }
}

/// Fatal startup failure, kept for the status panel
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct InitFailure(pub String);
