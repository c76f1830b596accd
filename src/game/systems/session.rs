//! Game session resource and its setup

use bevy::ecs::error::BevyError;
use bevy::prelude::*;
use chess_rules::ChessGame;

use super::scene::PieceSceneParams;
use crate::core::{GameSettings, InitFailure};
use crate::game::ai::RandomMoveSelector;
use crate::game::error::GameError;
use crate::game::session::{SessionConfig, TurnController};

/// The one turn controller of the running game
///
/// Holds the rules engine, the selection, the square → entity mapping, the piece in
/// flight and the pending bot reply. Nothing about the game lives outside it.
#[derive(Resource, Deref, DerefMut)]
pub struct GameSession(pub TurnController<ChessGame, Entity>);

/// Rules engine for the configured start position
pub fn build_rules(settings: &GameSettings) -> Result<ChessGame, GameError> {
    match settings.start_fen.as_deref() {
        Some(fen) => Ok(ChessGame::from_fen(fen)?),
        None => Ok(ChessGame::new()),
    }
}

/// Create the session on entering `InGame` and place the starting pieces
///
/// An unusable start position or settings leave the game without a session: the
/// failure is kept in [`InitFailure`] for the status panel and returned to Bevy's error
/// handler, which [`crate::app`] sets to log rather than panic.
pub fn setup_game_session(
    settings: Res<GameSettings>,
    mut scene: PieceSceneParams,
) -> Result {
    let rules = settings
        .validate()
        .map_err(BevyError::from)
        .and_then(|()| build_rules(&settings).map_err(BevyError::from));

    let rules = match rules {
        Ok(rules) => rules,
        Err(e) => {
            error!("[SESSION] Cannot start game: {}", e);
            scene.commands.insert_resource(InitFailure(e.to_string()));
            return Err(e);
        }
    };

    let selector = Box::new(RandomMoveSelector::from_seed(settings.bot.seed));
    let mut controller = TurnController::new(rules, selector, SessionConfig::from_settings(&settings));
    controller.start(&mut scene);

    scene.commands.insert_resource(GameSession(controller));
    Ok(())
}
