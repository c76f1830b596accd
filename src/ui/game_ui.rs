//! In-game status panel
//!
//! A small egui window in the top-left corner with:
//! - Game status ("Your move (White)", "Checkmate! Black wins.", ...)
//! - Which side the human plays, and whether the bot is about to move
//! - Move hints toggle
//! - Move log
//!
//! If the game could not be set up, the window shows why and offers to quit instead.
//!
//! The window also reports whether the cursor is over egui so board picking can ignore
//! clicks meant for the panel.

use bevy::prelude::*;
use bevy_egui::egui;
use chess_rules::{MoveRecord, PieceColor};

use crate::game::GameStatus;
use crate::ui::styles::UiColors;
use crate::ui::system_params::GameUIParams;

/// Pair moves into numbered lines, `1. e2-e4  e7-e5`
///
/// A log that starts with a Black move (custom start position) opens with `1. ...`.
pub fn move_log_lines(history: &[MoveRecord]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut moves = history.iter().peekable();
    let mut number = 1;

    if let Some(first) = moves.peek() {
        if first.mover == PieceColor::Black {
            lines.push(format!("{number}. ...  {first}"));
            moves.next();
            number += 1;
        }
    }

    while let Some(white) = moves.next() {
        match moves.next() {
            Some(black) => lines.push(format!("{number}. {white}  {black}")),
            None => lines.push(format!("{number}. {white}")),
        }
        number += 1;
    }
    lines
}

pub fn game_status_ui(mut params: GameUIParams) -> Result {
    let ctx = params.contexts.ctx_mut()?;

    egui::Window::new("chess3d")
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::LEFT_TOP, [12.0, 12.0])
        .frame(
            egui::Frame::default()
                .fill(UiColors::BG_OVERLAY)
                .corner_radius(8.0)
                .inner_margin(12.0)
                .stroke(egui::Stroke::new(1.0, UiColors::BORDER)),
        )
        .show(ctx, |ui| {
            ui.set_min_width(220.0);

            if let Some(failure) = params.init_failure.as_ref() {
                ui.label(
                    egui::RichText::new("Game could not start")
                        .size(16.0)
                        .color(UiColors::DANGER)
                        .strong(),
                );
                ui.label(egui::RichText::new(&failure.0).color(UiColors::DANGER));
                ui.add_space(6.0);
                if ui.button("Quit").clicked() {
                    params.exit.write(AppExit::from_code(1));
                }
                return;
            }

            let Some(session) = params.session.as_ref() else {
                ui.label("Setting up board...");
                return;
            };

            let status = session.status();
            let status_color = match status {
                GameStatus::Finished(_) => UiColors::ACCENT_GOLD,
                GameStatus::Ongoing { .. } => UiColors::TEXT_PRIMARY,
            };
            ui.label(
                egui::RichText::new(status.message())
                    .size(18.0)
                    .color(status_color)
                    .strong(),
            );

            let human = session.config().human;
            ui.label(
                egui::RichText::new(format!("You play {human}"))
                    .color(UiColors::TEXT_SECONDARY),
            );
            if session.is_bot_reply_pending() {
                ui.label(egui::RichText::new("Bot is thinking...").color(UiColors::TEXT_SECONDARY));
            }

            ui.add_space(6.0);
            let mut show_hints = params.settings.show_hints;
            if ui.checkbox(&mut show_hints, "Show move hints").changed() {
                params.settings.show_hints = show_hints;
            }

            ui.separator();
            ui.label(egui::RichText::new("Moves").color(UiColors::TEXT_PRIMARY));
            egui::ScrollArea::vertical()
                .max_height(240.0)
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    let lines = move_log_lines(session.history());
                    if lines.is_empty() {
                        ui.label(egui::RichText::new("-").color(UiColors::TEXT_SECONDARY));
                    }
                    for line in lines {
                        ui.label(
                            egui::RichText::new(line)
                                .monospace()
                                .color(UiColors::TEXT_SECONDARY),
                        );
                    }
                });
        });

    let over = ctx.is_pointer_over_area();
    params.pointer_over_ui.set_if_neq(crate::input::PointerOverUi(over));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_rules::{ChessGame, RulesEngine};

    fn play(game: &mut ChessGame, moves: &[(&str, &str)]) -> Vec<MoveRecord> {
        moves
            .iter()
            .map(|(from, to)| game.apply_notation(from, to).unwrap().unwrap())
            .collect()
    }

    #[test]
    fn test_empty_log() {
        assert!(move_log_lines(&[]).is_empty());
    }

    #[test]
    fn test_moves_paired_by_number() {
        let mut game = ChessGame::new();
        let history = play(&mut game, &[("e2", "e4"), ("e7", "e5"), ("g1", "f3")]);
        assert_eq!(
            move_log_lines(&history),
            vec!["1. e2-e4  e7-e5".to_string(), "2. g1-f3".to_string()]
        );
    }

    #[test]
    fn test_log_starting_with_black() {
        let mut game = ChessGame::from_fen(
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1",
        )
        .unwrap();
        assert_eq!(game.turn(), PieceColor::Black);
        let history = play(&mut game, &[("e7", "e5"), ("g1", "f3")]);
        assert_eq!(
            move_log_lines(&history),
            vec!["1. ...  e7-e5".to_string(), "2. g1-f3".to_string()]
        );
    }
}
