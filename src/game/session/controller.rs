//! Turn controller
//!
//! Owns the authoritative rules engine and everything the turn cycle needs around it:
//! the selection, the highlighted destinations, the square → piece mapping, the piece
//! currently in flight and the pending bot reply.
//!
//! # Turn cycle
//!
//! ```text
//! click ──► select / attempt move ──► rules engine applies ──► animation starts
//!                                                                     │
//!            bot reply ◄── reply delay ◄── (human mover) ◄── refresh ◄┘ finished
//!                │
//!                └──► rules engine applies ──► animation ──► refresh ──► human's turn
//! ```
//!
//! Nothing here is scheduled by callbacks. The app calls [`TurnController::tick`] once
//! per frame with the frame time; tests call it directly with whatever time step they
//! like.
//!
//! # Input guard
//!
//! Clicks are ignored while a piece is in flight, while the bot's reply is pending, when
//! it is not the human's turn and once the game is over. The bot is therefore never
//! consulted before the human's move is both on the board and in the mapping.

use bevy::log::{debug, error, info, warn};
use bevy::math::Vec3;
use chess_rules::{BoardSquare, MoveRecord, MoveRequest, PieceColor, RulesEngine};

use super::registry::{PieceRegistry, TrackedPiece};
use super::scene::PieceScene;
use super::selection::Selection;
use crate::core::{AnimationSettings, GameSettings};
use crate::game::ai::MoveSelector;
use crate::game::animation::MoveAnimation;
use crate::game::board_space::square_to_world;
use crate::game::error::GameError;
use crate::game::status::GameStatus;

/// Timing and side assignment for a session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    pub human: PieceColor,
    pub animation: AnimationSettings,
    pub reply_delay_secs: f32,
}

impl SessionConfig {
    pub fn from_settings(settings: &GameSettings) -> Self {
        Self {
            human: settings.human,
            animation: settings.animation,
            reply_delay_secs: settings.bot.reply_delay_secs,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::from_settings(&GameSettings::default())
    }
}

/// What a click did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Guarded out, or an Idle click on a square without a movable piece
    Ignored,
    Selected(BoardSquare),
    MoveStarted(MoveRecord),
    /// Illegal or malformed move; selection kept
    Rejected,
}

#[derive(Debug, Clone)]
struct InFlightMove<H> {
    record: MoveRecord,
    handle: H,
    animation: MoveAnimation,
}

pub struct TurnController<R, H> {
    rules: R,
    selector: Box<dyn MoveSelector>,
    config: SessionConfig,
    selection: Selection,
    highlights: Vec<BoardSquare>,
    pieces: PieceRegistry<H>,
    status: GameStatus,
    in_flight: Option<InFlightMove<H>>,
    bot_reply_in: Option<f32>,
    history: Vec<MoveRecord>,
}

impl<R: RulesEngine, H: Copy + Eq + std::fmt::Debug> TurnController<R, H> {
    pub fn new(rules: R, selector: Box<dyn MoveSelector>, config: SessionConfig) -> Self {
        let status = GameStatus::evaluate(&rules, config.human);
        Self {
            rules,
            selector,
            config,
            selection: Selection::Idle,
            highlights: Vec::new(),
            pieces: PieceRegistry::default(),
            status,
            in_flight: None,
            bot_reply_in: None,
            history: Vec::new(),
        }
    }

    /// Populate the scene and, if the bot moves first, schedule its opening move
    pub fn start<S: PieceScene<Handle = H>>(&mut self, scene: &mut S) {
        self.refresh(scene);
        info!(
            "[SESSION] Game started: human plays {}, bot '{}' plays {}",
            self.config.human,
            self.selector.name(),
            self.config.human.opposite()
        );
        if !self.status.is_finished() && self.rules.turn() != self.config.human {
            self.bot_reply_in = Some(self.config.reply_delay_secs);
        }
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Legal destinations of the selected piece, in rules-engine order
    pub fn highlights(&self) -> &[BoardSquare] {
        &self.highlights
    }

    pub fn pieces(&self) -> &PieceRegistry<H> {
        &self.pieces
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Every applied move, oldest first
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn is_animating(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn is_bot_reply_pending(&self) -> bool {
        self.bot_reply_in.is_some()
    }

    /// Whether [`Self::tick`] has anything to do
    pub fn is_busy(&self) -> bool {
        self.is_animating() || self.is_bot_reply_pending()
    }

    pub fn is_accepting_input(&self) -> bool {
        !self.is_busy()
            && !self.status.is_finished()
            && self.rules.turn() == self.config.human
    }

    /// Handle a click on `square`
    pub fn on_square_clicked<S: PieceScene<Handle = H>>(
        &mut self,
        square: BoardSquare,
        scene: &mut S,
    ) -> ClickOutcome {
        if !self.is_accepting_input() {
            debug!("[SESSION] Click on {} ignored, not accepting input", square);
            return ClickOutcome::Ignored;
        }

        match self.selection {
            Selection::Idle => self.select(square),
            Selection::Selected(from) => {
                if self.holds_piece_to_move(square) {
                    return self.select(square);
                }
                self.attempt_move(from, square, scene)
            }
        }
    }

    fn holds_piece_to_move(&self, square: BoardSquare) -> bool {
        self.rules
            .piece_at(square)
            .is_some_and(|piece| piece.color == self.rules.turn())
    }

    fn select(&mut self, square: BoardSquare) -> ClickOutcome {
        self.highlights.clear();
        if !self.holds_piece_to_move(square) {
            self.selection.clear();
            return ClickOutcome::Ignored;
        }

        for legal in self.rules.legal_moves_from(square) {
            // Promotions list one move per piece choice, all to the same square
            if !self.highlights.contains(&legal.to) {
                self.highlights.push(legal.to);
            }
        }
        self.selection = Selection::Selected(square);
        debug!(
            "[SESSION] Selected {} ({} destinations)",
            square,
            self.highlights.len()
        );
        ClickOutcome::Selected(square)
    }

    fn attempt_move<S: PieceScene<Handle = H>>(
        &mut self,
        from: BoardSquare,
        to: BoardSquare,
        scene: &mut S,
    ) -> ClickOutcome {
        match self.rules.apply_move(MoveRequest::new(from, to)) {
            Ok(Some(record)) => {
                self.highlights.clear();
                self.selection.clear();
                info!("[SESSION] {} played {}", record.mover, record);
                self.history.push(record);
                self.begin_animation(record, scene);
                ClickOutcome::MoveStarted(record)
            }
            Ok(None) => {
                debug!("[SESSION] Rejected {}-{}", from, to);
                ClickOutcome::Rejected
            }
            Err(e) => {
                warn!("[SESSION] Malformed move {}-{}: {}", from, to, e);
                ClickOutcome::Rejected
            }
        }
    }

    fn begin_animation<S: PieceScene<Handle = H>>(&mut self, record: MoveRecord, scene: &mut S) {
        let handle = self.pieces.handle_at(record.from);
        let start = handle.and_then(|h| scene.piece_position(h));

        let (Some(handle), Some(start)) = (handle, start) else {
            let err = match handle {
                Some(_) => GameError::MissingTransform {
                    square: record.from,
                },
                None => GameError::PieceNotFound {
                    square: record.from,
                },
            };
            error!("[ANIM] Skipping animation of {}: {}", record, err);
            self.after_move(record, scene);
            return;
        };

        let end = square_to_world(record.to, self.config.animation.piece_elevation);
        debug!("[ANIM] {} from {} to {}", record, start, end);
        self.in_flight = Some(InFlightMove {
            record,
            handle,
            animation: MoveAnimation::new(start, end, &self.config.animation),
        });
    }

    /// Advance the piece in flight or the bot's reply timer
    pub fn tick<S: PieceScene<Handle = H>>(&mut self, delta_secs: f32, scene: &mut S) {
        if let Some(flight) = self.in_flight.as_mut() {
            let frame = flight.animation.tick(delta_secs);
            scene.set_piece_position(flight.handle, frame.position);
            if frame.finished {
                if let Some(flight) = self.in_flight.take() {
                    self.complete_move(flight, scene);
                }
            }
            return;
        }

        if let Some(remaining) = self.bot_reply_in.as_mut() {
            *remaining -= delta_secs;
            if *remaining <= 0.0 {
                self.bot_reply_in = None;
                self.maybe_reply_with_bot(scene);
            }
        }
    }

    fn complete_move<S: PieceScene<Handle = H>>(&mut self, flight: InFlightMove<H>, scene: &mut S) {
        let record = flight.record;
        scene.set_piece_position(flight.handle, flight.animation.end());

        match self.pieces.relocate(record.from, record.to) {
            Ok(Some(captured)) => {
                debug!("[ANIM] {} captured on {}", record, record.to);
                scene.despawn_piece(captured.handle);
            }
            Ok(None) => {}
            Err(e) => warn!("[ANIM] Mapping out of step after {}: {}", record, e),
        }

        self.after_move(record, scene);
    }

    fn after_move<S: PieceScene<Handle = H>>(&mut self, record: MoveRecord, scene: &mut S) {
        self.refresh(scene);
        info!("[SESSION] {}", self.status.message());

        if record.mover == self.config.human && !self.status.is_finished() {
            debug!(
                "[BOT] Reply scheduled in {:.2}s",
                self.config.reply_delay_secs
            );
            self.bot_reply_in = Some(self.config.reply_delay_secs);
        }
    }

    /// Rebuild the mapping from the rules engine's board and recompute the status
    ///
    /// Entries still matching the board keep their scene object. Anything the board no
    /// longer has at that square (captures en passant, castled rooks, promoted pawns) is
    /// despawned and the missing pieces are spawned in place.
    pub fn refresh<S: PieceScene<Handle = H>>(&mut self, scene: &mut S) {
        let stale: Vec<BoardSquare> = self
            .pieces
            .iter()
            .filter(|(square, tracked)| self.rules.piece_at(*square) != Some(tracked.piece))
            .map(|(square, _)| square)
            .collect();
        for square in stale {
            if let Some(tracked) = self.pieces.remove(square) {
                scene.despawn_piece(tracked.handle);
            }
        }

        for square in self.rules.occupied_squares() {
            if self.pieces.get(square).is_some() {
                continue;
            }
            let Some(piece) = self.rules.piece_at(square) else {
                continue;
            };
            let position = square_to_world(square, self.config.animation.piece_elevation);
            let handle = scene.spawn_piece(square, piece, position);
            self.pieces.insert(square, TrackedPiece { handle, piece });
        }

        self.status = GameStatus::evaluate(&self.rules, self.config.human);
    }

    /// Let the bot play one move, if it is the bot's turn and the board is idle
    pub fn maybe_reply_with_bot<S: PieceScene<Handle = H>>(&mut self, scene: &mut S) {
        if self.in_flight.is_some()
            || self.rules.turn() == self.config.human
            || self.status.is_finished()
        {
            return;
        }

        let legal = self.rules.legal_moves();
        let Some(choice) = self.selector.select(&legal) else {
            debug!("[BOT] No legal moves");
            return;
        };

        match self.rules.apply_move(choice.request()) {
            Ok(Some(record)) => {
                info!("[BOT] {} played {}", record.mover, record);
                self.history.push(record);
                self.begin_animation(record, scene);
            }
            Ok(None) => warn!("[BOT] Chose illegal move {}", choice),
            Err(e) => warn!("[BOT] Move {} failed: {}", choice, e),
        }
    }
}
