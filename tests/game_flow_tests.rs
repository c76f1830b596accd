//! Integration tests for the turn cycle
//!
//! Drives a [`TurnController`] over the real shakmaty-backed rules engine with an
//! in-memory scene in place of Bevy entities. Time is advanced by hand in 60 fps
//! frames.

use std::collections::HashMap;

use bevy::math::Vec3;
use chess3d::core::{AnimationSettings, GameSettings};
use chess3d::game::ai::{MoveSelector, RandomMoveSelector};
use chess3d::game::board_space::square_to_world;
use chess3d::game::session::{ClickOutcome, PieceScene, Selection, SessionConfig, TurnController};
use chess3d::game::GameStatus;
use chess_rules::{
    terminal_state, BoardGrid, BoardPiece, BoardSquare, ChessGame, MoveRecord, MoveRequest,
    PieceColor, PieceType, RulesEngine, RulesError, RulesResult, TerminalState,
};

const FRAME: f32 = 1.0 / 60.0;

/// Scene objects are plain ids with a piece and a position
#[derive(Default)]
struct FakeScene {
    next_id: u32,
    objects: HashMap<u32, (BoardPiece, Vec3)>,
    despawned: Vec<u32>,
}

impl FakeScene {
    /// Drop an object without telling the controller
    fn lose(&mut self, handle: u32) {
        self.objects.remove(&handle);
    }
}

impl PieceScene for FakeScene {
    type Handle = u32;

    fn spawn_piece(&mut self, _square: BoardSquare, piece: BoardPiece, position: Vec3) -> u32 {
        self.next_id += 1;
        self.objects.insert(self.next_id, (piece, position));
        self.next_id
    }

    fn despawn_piece(&mut self, handle: u32) {
        self.objects.remove(&handle);
        self.despawned.push(handle);
    }

    fn piece_position(&self, handle: u32) -> Option<Vec3> {
        self.objects.get(&handle).map(|(_, position)| *position)
    }

    fn set_piece_position(&mut self, handle: u32, position: Vec3) {
        if let Some(object) = self.objects.get_mut(&handle) {
            object.1 = position;
        }
    }
}

/// Plays a fixed list of moves, in order
struct ScriptedSelector {
    moves: Vec<(BoardSquare, BoardSquare)>,
    asked: usize,
}

impl ScriptedSelector {
    fn new(moves: &[(&str, &str)]) -> Self {
        Self {
            moves: moves.iter().map(|(from, to)| (sq(from), sq(to))).collect(),
            asked: 0,
        }
    }
}

impl MoveSelector for ScriptedSelector {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn select(&mut self, legal_moves: &[MoveRecord]) -> Option<MoveRecord> {
        let (from, to) = *self.moves.get(self.asked)?;
        self.asked += 1;
        legal_moves.iter().copied().find(|m| m.from == from && m.to == to)
    }
}

type Controller = TurnController<ChessGame, u32>;

fn sq(name: &str) -> BoardSquare {
    name.parse().unwrap()
}

fn config(human: PieceColor) -> SessionConfig {
    SessionConfig {
        human,
        ..SessionConfig::default()
    }
}

fn started(game: ChessGame, selector: Box<dyn MoveSelector>, human: PieceColor) -> (Controller, FakeScene) {
    let mut controller = Controller::new(game, selector, config(human));
    let mut scene = FakeScene::default();
    controller.start(&mut scene);
    (controller, scene)
}

fn new_game() -> (Controller, FakeScene) {
    started(
        ChessGame::new(),
        Box::new(RandomMoveSelector::seeded(7)),
        PieceColor::White,
    )
}

/// Tick until nothing is in flight or pending, with a frame cap
fn run_until_idle(controller: &mut Controller, scene: &mut FakeScene) -> usize {
    let mut frames = 0;
    while controller.is_busy() {
        controller.tick(FRAME, scene);
        frames += 1;
        assert!(frames < 1_000, "turn cycle never settled");
    }
    frames
}

/// Tick until the current animation lands, leaving any bot timer untouched
fn finish_animation(controller: &mut Controller, scene: &mut FakeScene) {
    let mut frames = 0;
    while controller.is_animating() {
        controller.tick(FRAME, scene);
        frames += 1;
        assert!(frames < 1_000, "animation never finished");
    }
}

fn click(controller: &mut Controller, scene: &mut FakeScene, square: &str) -> ClickOutcome {
    controller.on_square_clicked(sq(square), scene)
}

/// Mapping keys equal occupied squares, and each scene object depicts its square
fn assert_in_sync(controller: &Controller, scene: &FakeScene) {
    assert_eq!(
        controller.pieces().squares(),
        controller.rules().occupied_squares(),
        "mapping out of step with the board"
    );
    assert_eq!(scene.objects.len(), controller.pieces().len());
    for (square, tracked) in controller.pieces().iter() {
        let (piece, position) = scene.objects[&tracked.handle];
        assert_eq!(Some(piece), controller.rules().piece_at(square));
        assert_eq!(tracked.piece, piece);
        assert_eq!(position, square_to_world(square, 0.15), "{square} misplaced");
    }
}

#[test]
fn test_start_populates_scene() {
    //! Starting a game spawns one object per occupied square, at rest on its square
    let (controller, scene) = new_game();
    assert_eq!(controller.pieces().len(), 32);
    assert_in_sync(&controller, &scene);
    assert!(controller.is_accepting_input());
    assert_eq!(controller.status().message(), "Your move (White)");
}

#[test]
fn test_idle_clicks_on_empty_and_opponent_squares() {
    let (mut controller, mut scene) = new_game();

    assert_eq!(click(&mut controller, &mut scene, "e4"), ClickOutcome::Ignored);
    assert_eq!(controller.selection(), Selection::Idle);
    assert!(controller.highlights().is_empty());

    assert_eq!(click(&mut controller, &mut scene, "e7"), ClickOutcome::Ignored);
    assert_eq!(controller.selection(), Selection::Idle);
    assert!(controller.highlights().is_empty());
}

#[test]
fn test_select_shows_destinations() {
    let (mut controller, mut scene) = new_game();

    assert_eq!(
        click(&mut controller, &mut scene, "e2"),
        ClickOutcome::Selected(sq("e2"))
    );
    let mut highlights = controller.highlights().to_vec();
    highlights.sort();
    assert_eq!(highlights, vec![sq("e4"), sq("e3")]);
}

#[test]
fn test_human_move_starts_one_animation() {
    //! e2 then e4 applies the move, clears the highlights and starts exactly one flight
    let (mut controller, mut scene) = new_game();
    let pawn = controller.pieces().handle_at(sq("e2")).unwrap();

    click(&mut controller, &mut scene, "e2");
    let outcome = click(&mut controller, &mut scene, "e4");

    let ClickOutcome::MoveStarted(record) = outcome else {
        panic!("expected a move, got {outcome:?}");
    };
    assert_eq!(record.from, sq("e2"));
    assert_eq!(record.to, sq("e4"));
    assert_eq!(record.mover, PieceColor::White);
    assert_eq!(record.piece, PieceType::Pawn);

    assert!(controller.highlights().is_empty());
    assert_eq!(controller.selection(), Selection::Idle);
    assert!(controller.is_animating());
    assert!(!controller.is_bot_reply_pending());
    assert_eq!(controller.history(), &[record]);
    // Rules engine already moved, the mapping follows when the flight lands
    assert_eq!(controller.rules().turn(), PieceColor::Black);
    assert_eq!(controller.pieces().handle_at(sq("e2")), Some(pawn));

    // Piece rises above its resting height mid-flight
    for _ in 0..30 {
        controller.tick(FRAME, &mut scene);
    }
    let mid = scene.piece_position(pawn).unwrap();
    assert!(mid.y > 0.5, "piece did not arc: {mid}");
}

#[test]
fn test_rejected_move_keeps_selection() {
    let (mut controller, mut scene) = new_game();

    click(&mut controller, &mut scene, "e2");
    let before = controller.highlights().to_vec();

    assert_eq!(click(&mut controller, &mut scene, "e5"), ClickOutcome::Rejected);
    assert_eq!(controller.selection(), Selection::Selected(sq("e2")));
    assert_eq!(controller.highlights(), before.as_slice());
    assert!(!controller.is_animating());

    // Opponent piece as destination is just another illegal move
    assert_eq!(click(&mut controller, &mut scene, "d7"), ClickOutcome::Rejected);
    assert_eq!(controller.selection(), Selection::Selected(sq("e2")));
}

#[test]
fn test_reselecting_another_own_piece() {
    let (mut controller, mut scene) = new_game();

    click(&mut controller, &mut scene, "e2");
    assert_eq!(
        click(&mut controller, &mut scene, "g1"),
        ClickOutcome::Selected(sq("g1"))
    );
    assert_eq!(controller.selection(), Selection::Selected(sq("g1")));
    let mut highlights = controller.highlights().to_vec();
    highlights.sort();
    assert_eq!(highlights, vec![sq("f3"), sq("h3")]);
}

#[test]
fn test_clicks_ignored_while_busy() {
    let (mut controller, mut scene) = new_game();

    click(&mut controller, &mut scene, "e2");
    click(&mut controller, &mut scene, "e4");

    // During the flight
    assert_eq!(click(&mut controller, &mut scene, "d2"), ClickOutcome::Ignored);
    assert_eq!(controller.selection(), Selection::Idle);

    // During the bot's reply delay
    finish_animation(&mut controller, &mut scene);
    assert!(controller.is_bot_reply_pending());
    assert_eq!(click(&mut controller, &mut scene, "d2"), ClickOutcome::Ignored);
    assert_eq!(controller.selection(), Selection::Idle);
    assert_eq!(controller.history().len(), 1);
}

#[test]
fn test_bot_replies_exactly_once() {
    //! After the human's move lands, one bot move is applied before input reopens
    let (mut controller, mut scene) = new_game();

    click(&mut controller, &mut scene, "e2");
    click(&mut controller, &mut scene, "e4");
    finish_animation(&mut controller, &mut scene);

    // Human's move is in both the board and the mapping before the bot is consulted
    assert_in_sync(&controller, &scene);
    assert!(controller.pieces().get(sq("e4")).is_some());
    assert_eq!(controller.history().len(), 1);

    run_until_idle(&mut controller, &mut scene);

    assert_eq!(controller.history().len(), 2);
    let reply = controller.history()[1];
    assert_eq!(reply.mover, PieceColor::Black);
    assert_eq!(controller.rules().turn(), PieceColor::White);
    assert!(controller.is_accepting_input());
    assert_in_sync(&controller, &scene);

    // Nothing else happens while the human thinks
    for _ in 0..120 {
        controller.tick(FRAME, &mut scene);
    }
    assert_eq!(controller.history().len(), 2);
}

#[test]
fn test_reply_delay_is_respected() {
    let (mut controller, mut scene) = new_game();

    click(&mut controller, &mut scene, "d2");
    click(&mut controller, &mut scene, "d4");
    finish_animation(&mut controller, &mut scene);

    // Default delay is 0.3s: 15 frames is too early
    for _ in 0..15 {
        controller.tick(FRAME, &mut scene);
    }
    assert_eq!(controller.history().len(), 1);
    assert!(controller.is_bot_reply_pending());

    for _ in 0..5 {
        controller.tick(FRAME, &mut scene);
    }
    assert_eq!(controller.history().len(), 2);
    assert!(controller.is_animating());
}

#[test]
fn test_several_full_turns_stay_in_sync() {
    let (mut controller, mut scene) = new_game();

    for (from, to) in [("e2", "e4"), ("g1", "f3"), ("f1", "c4")] {
        if !controller.is_accepting_input() {
            break;
        }
        let outcome = click(&mut controller, &mut scene, from);
        if outcome != ClickOutcome::Selected(sq(from)) {
            // Random replies can block a scripted line; stop cleanly
            break;
        }
        if !matches!(click(&mut controller, &mut scene, to), ClickOutcome::MoveStarted(_)) {
            break;
        }
        run_until_idle(&mut controller, &mut scene);
        assert_in_sync(&controller, &scene);
    }
    assert!(controller.history().len() >= 2);
    assert_eq!(controller.history().len() % 2, 0);
}

#[test]
fn test_capture_despawns_victim() {
    let game = ChessGame::from_fen(
        "rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2",
    )
    .unwrap();
    let (mut controller, mut scene) = started(
        game,
        Box::new(RandomMoveSelector::seeded(3)),
        PieceColor::White,
    );
    let victim = controller.pieces().handle_at(sq("d5")).unwrap();
    let attacker = controller.pieces().handle_at(sq("e4")).unwrap();

    click(&mut controller, &mut scene, "e4");
    let ClickOutcome::MoveStarted(record) = click(&mut controller, &mut scene, "d5") else {
        panic!("capture refused");
    };
    assert_eq!(record.captured, Some(PieceType::Pawn));
    finish_animation(&mut controller, &mut scene);

    assert!(scene.despawned.contains(&victim));
    assert_eq!(controller.pieces().handle_at(sq("d5")), Some(attacker));
    assert_eq!(controller.pieces().len(), 31);
    assert_in_sync(&controller, &scene);
}

#[test]
fn test_castling_moves_rook_by_refresh() {
    let game =
        ChessGame::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1").unwrap();
    let (mut controller, mut scene) = started(
        game,
        Box::new(RandomMoveSelector::seeded(11)),
        PieceColor::White,
    );
    let king = controller.pieces().handle_at(sq("e1")).unwrap();

    click(&mut controller, &mut scene, "e1");
    assert!(controller.highlights().contains(&sq("g1")));
    click(&mut controller, &mut scene, "g1");
    finish_animation(&mut controller, &mut scene);

    assert_eq!(controller.pieces().handle_at(sq("g1")), Some(king));
    assert!(controller.pieces().get(sq("h1")).is_none());
    assert_eq!(
        controller.pieces().get(sq("f1")).map(|t| t.piece.piece_type),
        Some(PieceType::Rook)
    );
    assert_in_sync(&controller, &scene);
}

#[test]
fn test_promotion_respawns_as_queen() {
    let game = ChessGame::from_fen("8/4P3/8/8/8/8/k7/4K3 w - - 0 1").unwrap();
    let (mut controller, mut scene) = started(
        game,
        Box::new(RandomMoveSelector::seeded(5)),
        PieceColor::White,
    );
    let pawn = controller.pieces().handle_at(sq("e7")).unwrap();

    click(&mut controller, &mut scene, "e7");
    // Four promotion choices, one destination
    assert_eq!(controller.highlights(), &[sq("e8")]);
    let ClickOutcome::MoveStarted(record) = click(&mut controller, &mut scene, "e8") else {
        panic!("promotion refused");
    };
    assert_eq!(record.promotion, Some(PieceType::Queen));
    finish_animation(&mut controller, &mut scene);

    let tracked = controller.pieces().get(sq("e8")).unwrap();
    assert_eq!(tracked.piece, BoardPiece::new(PieceType::Queen, PieceColor::White));
    assert_ne!(tracked.handle, pawn);
    assert!(scene.despawned.contains(&pawn));
    assert_in_sync(&controller, &scene);
}

#[test]
fn test_checkmate_ends_game_without_bot_move() {
    //! Scholar's mate: the status reports the winner and the bot never moves
    let game = ChessGame::from_fen(
        "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4",
    )
    .unwrap();
    let (mut controller, mut scene) = started(
        game,
        Box::new(RandomMoveSelector::seeded(1)),
        PieceColor::White,
    );

    click(&mut controller, &mut scene, "h5");
    assert!(matches!(
        click(&mut controller, &mut scene, "f7"),
        ClickOutcome::MoveStarted(_)
    ));
    finish_animation(&mut controller, &mut scene);

    assert_eq!(
        controller.status(),
        GameStatus::Finished(TerminalState::Checkmate {
            winner: PieceColor::White
        })
    );
    assert_eq!(controller.status().message(), "Checkmate! White wins.");
    assert!(!controller.is_bot_reply_pending());

    for _ in 0..120 {
        controller.tick(FRAME, &mut scene);
    }
    controller.maybe_reply_with_bot(&mut scene);
    assert_eq!(controller.history().len(), 1);
    assert_eq!(click(&mut controller, &mut scene, "e1"), ClickOutcome::Ignored);
    assert_in_sync(&controller, &scene);
}

#[test]
fn test_stalemate_reported() {
    let game = ChessGame::from_fen("k7/8/8/2Q5/8/8/8/2K5 w - - 0 1").unwrap();
    let (mut controller, mut scene) = started(
        game,
        Box::new(RandomMoveSelector::seeded(1)),
        PieceColor::White,
    );

    click(&mut controller, &mut scene, "c5");
    click(&mut controller, &mut scene, "b6");
    run_until_idle(&mut controller, &mut scene);

    assert_eq!(
        controller.status(),
        GameStatus::Finished(TerminalState::Stalemate)
    );
    assert_eq!(controller.status().message(), "Draw by stalemate.");
    assert_eq!(controller.history().len(), 1);
}

#[test]
fn test_threefold_repetition_reported() {
    let selector = ScriptedSelector::new(&[("g8", "f6"), ("f6", "g8"), ("g8", "f6"), ("f6", "g8")]);
    let (mut controller, mut scene) =
        started(ChessGame::new(), Box::new(selector), PieceColor::White);

    for (from, to) in [("g1", "f3"), ("f3", "g1"), ("g1", "f3"), ("f3", "g1")] {
        assert!(controller.is_accepting_input(), "blocked before {from}-{to}");
        click(&mut controller, &mut scene, from);
        assert!(matches!(
            click(&mut controller, &mut scene, to),
            ClickOutcome::MoveStarted(_)
        ));
        run_until_idle(&mut controller, &mut scene);
    }

    assert_eq!(controller.history().len(), 8);
    assert_eq!(
        controller.status(),
        GameStatus::Finished(TerminalState::ThreefoldRepetition)
    );
    assert!(!controller.is_accepting_input());
    assert_in_sync(&controller, &scene);
}

#[test]
fn test_missing_entity_skips_animation_and_resyncs() {
    //! A lost scene object is logged; the move still counts and the board is rebuilt
    let (mut controller, mut scene) = new_game();
    let pawn = controller.pieces().handle_at(sq("e2")).unwrap();
    scene.lose(pawn);

    click(&mut controller, &mut scene, "e2");
    let outcome = click(&mut controller, &mut scene, "e4");
    assert!(matches!(outcome, ClickOutcome::MoveStarted(_)));

    assert!(!controller.is_animating());
    assert!(controller.is_bot_reply_pending());
    assert!(controller.pieces().get(sq("e2")).is_none());
    assert_in_sync(&controller, &scene);

    run_until_idle(&mut controller, &mut scene);
    assert_eq!(controller.history().len(), 2);
    assert_in_sync(&controller, &scene);
}

#[test]
fn test_human_black_waits_for_bot_opening() {
    let (mut controller, mut scene) = started(
        ChessGame::new(),
        Box::new(RandomMoveSelector::seeded(21)),
        PieceColor::Black,
    );

    assert!(controller.is_bot_reply_pending());
    assert_eq!(controller.status().message(), "White to move");
    assert_eq!(click(&mut controller, &mut scene, "e7"), ClickOutcome::Ignored);

    run_until_idle(&mut controller, &mut scene);

    assert_eq!(controller.history().len(), 1);
    assert_eq!(controller.history()[0].mover, PieceColor::White);
    assert!(controller.is_accepting_input());
    assert_eq!(controller.status().message(), "Your move (Black)");
    assert_eq!(
        click(&mut controller, &mut scene, "e7"),
        ClickOutcome::Selected(sq("e7"))
    );
}

#[test]
fn test_seeded_bots_play_identically() {
    let play = || {
        let (mut controller, mut scene) = started(
            ChessGame::new(),
            Box::new(RandomMoveSelector::seeded(2024)),
            PieceColor::White,
        );
        click(&mut controller, &mut scene, "e2");
        click(&mut controller, &mut scene, "e4");
        run_until_idle(&mut controller, &mut scene);
        controller.history().to_vec()
    };
    assert_eq!(play(), play());
}

#[test]
fn test_animation_settings_are_used() {
    //! Steps and duration come from configuration, not from the distance travelled
    let settings = GameSettings {
        animation: AnimationSettings {
            steps: 10,
            duration_secs: 0.5,
            ..AnimationSettings::default()
        },
        ..GameSettings::default()
    };
    let mut controller = Controller::new(
        ChessGame::new(),
        Box::new(RandomMoveSelector::seeded(1)),
        SessionConfig::from_settings(&settings),
    );
    let mut scene = FakeScene::default();
    controller.start(&mut scene);

    click(&mut controller, &mut scene, "e2");
    click(&mut controller, &mut scene, "e3");
    let mut frames = 0;
    while controller.is_animating() {
        controller.tick(FRAME, &mut scene);
        frames += 1;
        assert!(frames < 100);
    }
    assert!((29..=32).contains(&frames), "took {frames} frames");
}

/// Rules engine with hand-set answers, for states a real game can't easily combine
struct ScriptedRules {
    grid: BoardGrid,
    turn: PieceColor,
    legal: Vec<MoveRecord>,
    apply_error: Option<RulesError>,
    checkmate: bool,
    stalemate: bool,
    repetition: bool,
    insufficient: bool,
    other_draw: bool,
}

impl ScriptedRules {
    fn new(turn: PieceColor) -> Self {
        Self {
            grid: [[None; 8]; 8],
            turn,
            legal: Vec::new(),
            apply_error: None,
            checkmate: false,
            stalemate: false,
            repetition: false,
            insufficient: false,
            other_draw: false,
        }
    }

    fn put(&mut self, square: &str, piece: BoardPiece) {
        let square = sq(square);
        self.grid[square.row() as usize][square.col() as usize] = Some(piece);
    }
}

impl RulesEngine for ScriptedRules {
    fn board(&self) -> BoardGrid {
        self.grid
    }

    fn turn(&self) -> PieceColor {
        self.turn
    }

    fn legal_moves(&self) -> Vec<MoveRecord> {
        self.legal.clone()
    }

    fn apply_move(&mut self, request: MoveRequest) -> RulesResult<Option<MoveRecord>> {
        if let Some(error) = &self.apply_error {
            return Err(error.clone());
        }
        Ok(self
            .legal
            .iter()
            .copied()
            .find(|m| m.from == request.from && m.to == request.to))
    }

    fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    fn is_stalemate(&self) -> bool {
        self.stalemate
    }

    fn is_threefold_repetition(&self) -> bool {
        self.repetition
    }

    fn is_insufficient_material(&self) -> bool {
        self.insufficient
    }

    fn is_draw(&self) -> bool {
        self.stalemate || self.repetition || self.insufficient || self.other_draw
    }
}

#[test]
fn test_status_precedence_with_overlapping_conditions() {
    //! With every predicate true, peel them off one at a time
    let mut rules = ScriptedRules::new(PieceColor::White);
    rules.checkmate = true;
    rules.stalemate = true;
    rules.repetition = true;
    rules.insufficient = true;
    rules.other_draw = true;

    assert_eq!(
        terminal_state(&rules),
        Some(TerminalState::Checkmate {
            winner: PieceColor::Black
        })
    );
    rules.checkmate = false;
    assert_eq!(terminal_state(&rules), Some(TerminalState::Stalemate));
    rules.stalemate = false;
    assert_eq!(terminal_state(&rules), Some(TerminalState::ThreefoldRepetition));
    rules.repetition = false;
    assert_eq!(terminal_state(&rules), Some(TerminalState::InsufficientMaterial));
    rules.insufficient = false;
    assert_eq!(terminal_state(&rules), Some(TerminalState::Draw));
    rules.other_draw = false;
    assert_eq!(terminal_state(&rules), None);
}

#[test]
fn test_session_reports_highest_ranked_ending() {
    let mut rules = ScriptedRules::new(PieceColor::White);
    rules.put("e1", BoardPiece::new(PieceType::King, PieceColor::White));
    rules.put("e8", BoardPiece::new(PieceType::King, PieceColor::Black));
    rules.stalemate = true;
    rules.insufficient = true;

    let mut controller: TurnController<ScriptedRules, u32> = TurnController::new(
        rules,
        Box::new(RandomMoveSelector::seeded(3)),
        config(PieceColor::White),
    );
    let mut scene = FakeScene::default();
    controller.start(&mut scene);

    assert_eq!(controller.status().message(), "Draw by stalemate.");
    assert!(!controller.is_bot_reply_pending());
    assert_eq!(
        controller.on_square_clicked(sq("e1"), &mut scene),
        ClickOutcome::Ignored
    );
}

#[test]
fn test_malformed_move_is_rejected_without_side_effects() {
    //! An engine error on a listed move keeps the selection and the board as they were
    let pawn = BoardPiece::new(PieceType::Pawn, PieceColor::White);
    let mut rules = ScriptedRules::new(PieceColor::White);
    rules.put("e2", pawn);
    rules.legal.push(MoveRecord {
        from: sq("e2"),
        to: sq("e4"),
        mover: PieceColor::White,
        piece: PieceType::Pawn,
        promotion: None,
        captured: None,
    });
    rules.apply_error = Some(RulesError::InvalidSquare {
        notation: "e9".to_string(),
    });

    let mut controller: TurnController<ScriptedRules, u32> = TurnController::new(
        rules,
        Box::new(RandomMoveSelector::seeded(3)),
        config(PieceColor::White),
    );
    let mut scene = FakeScene::default();
    controller.start(&mut scene);
    let handle = controller.pieces().handle_at(sq("e2")).expect("pawn tracked");
    let home = scene.piece_position(handle);

    assert_eq!(
        controller.on_square_clicked(sq("e2"), &mut scene),
        ClickOutcome::Selected(sq("e2"))
    );
    assert_eq!(
        controller.on_square_clicked(sq("e4"), &mut scene),
        ClickOutcome::Rejected
    );

    assert_eq!(controller.selection(), Selection::Selected(sq("e2")));
    assert_eq!(controller.highlights(), &[sq("e4")]);
    assert!(!controller.is_animating());
    assert!(!controller.is_bot_reply_pending());
    assert!(controller.history().is_empty());
    assert_eq!(controller.pieces().squares(), vec![sq("e2")]);
    assert_eq!(scene.piece_position(handle), home);
    assert!(controller.is_accepting_input());
}
