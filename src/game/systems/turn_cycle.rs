//! Per-frame driver of the turn cycle

use bevy::prelude::*;

use super::scene::PieceSceneParams;
use super::session::GameSession;

/// Advance the piece in flight or the bot's reply timer by this frame's time
pub fn advance_turn_cycle(
    time: Res<Time>,
    session: Option<ResMut<GameSession>>,
    mut scene: PieceSceneParams,
) {
    let Some(mut session) = session else {
        return;
    };
    // Read through `Deref` so idle frames don't mark the session changed
    if !session.is_busy() {
        return;
    }
    session.tick(time.delta_secs(), &mut scene);
}
