//! Integration tests for the game engine lifecycle

use blocktris::core::{GameEngine, Phase, ScriptedPieces};
use blocktris::term::ScoreBoard;
use blocktris::types::{GameAction, PieceKind};

type Engine = GameEngine<ScriptedPieces, ScoreBoard>;

fn started(kind: PieceKind) -> Engine {
    let mut engine = GameEngine::new(ScriptedPieces::repeat(kind), ScoreBoard::default());
    engine.init(0);
    engine
}

/// Hard drop an O piece so its left column lands on `x`.
fn drop_o_at(engine: &mut Engine, x: i8) {
    let spawn_x = engine.active().unwrap().x;
    let (action, steps) = if x < spawn_x {
        (GameAction::MoveLeft, spawn_x - x)
    } else {
        (GameAction::MoveRight, x - spawn_x)
    };
    for _ in 0..steps {
        assert!(engine.apply_action(action));
    }
    assert!(engine.apply_action(GameAction::HardDrop));
}

#[test]
fn test_game_lifecycle() {
    let mut engine = GameEngine::new(ScriptedPieces::repeat(PieceKind::T), ScoreBoard::default());
    assert_eq!(engine.phase(), Phase::Idle);
    assert!(engine.active().is_none());

    // Idle ignores everything but a start.
    assert!(!engine.apply_action(GameAction::MoveLeft));
    assert!(!engine.apply_action(GameAction::TogglePause));
    assert!(!engine.tick(10_000));

    assert!(engine.apply_action(GameAction::Restart));
    assert_eq!(engine.phase(), Phase::Running);
    assert!(engine.active().is_some());
    assert_eq!(engine.last_drop_ms(), 10_000);
}

#[test]
fn test_moves_stop_at_walls() {
    let mut engine = started(PieceKind::O);
    assert_eq!(engine.active().unwrap().x, 4);

    for _ in 0..4 {
        assert!(engine.move_left());
    }
    assert!(!engine.move_left());
    assert_eq!(engine.active().unwrap().x, 0);

    for _ in 0..8 {
        assert!(engine.move_right());
    }
    assert!(!engine.move_right());
    assert_eq!(engine.active().unwrap().x, 8);
}

#[test]
fn test_rotation_blocked_at_wall_is_reverted() {
    let mut engine = started(PieceKind::I);
    assert!(engine.rotate());
    while engine.move_right() {}
    let vertical = engine.active().unwrap();
    assert_eq!(vertical.x, 9);

    // Horizontal I would reach x = 12.
    assert!(!engine.rotate());
    assert_eq!(engine.active().unwrap(), vertical);
}

#[test]
fn test_hard_drop_scores_two_per_row() {
    let mut engine = started(PieceKind::O);
    assert_eq!(engine.hard_drop(), 18);
    assert_eq!(engine.score(), 36);
    assert_eq!(engine.display().score, 36);

    assert!(engine.board().is_occupied(4, 19));
    assert!(engine.board().is_occupied(5, 18));
    assert_eq!(engine.active().unwrap().y, 0);
}

#[test]
fn test_soft_drop_moves_one_row_without_points() {
    let mut engine = started(PieceKind::T);
    assert!(engine.apply_action(GameAction::SoftDrop));
    assert_eq!(engine.active().unwrap().y, 1);
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.last_drop_ms(), 0);
}

#[test]
fn test_tick_drops_once_per_interval() {
    let mut engine = started(PieceKind::T);

    assert!(!engine.tick(1000));
    assert_eq!(engine.active().unwrap().y, 0);

    assert!(engine.tick(1001));
    assert_eq!(engine.active().unwrap().y, 1);
    assert_eq!(engine.last_drop_ms(), 1001);

    // A long stall still drops only one row.
    assert!(engine.tick(9000));
    assert_eq!(engine.active().unwrap().y, 2);
}

#[test]
fn test_two_lines_from_five_o_pieces() {
    let mut engine = started(PieceKind::O);
    for x in [0, 2, 4, 6, 8] {
        drop_o_at(&mut engine, x);
    }

    assert_eq!(engine.lines(), 2);
    assert_eq!(engine.score(), 5 * 36 + 200);
    assert_eq!(engine.board().filled_count(), 0);

    let ev = engine.take_last_event().unwrap();
    assert_eq!(ev.kind, PieceKind::O);
    assert_eq!(ev.lines_cleared, 2);
    assert_eq!(ev.line_clear_score, 200);
    assert!(!ev.topped_out);
    assert!(engine.take_last_event().is_none());

    assert_eq!(
        *engine.display(),
        ScoreBoard {
            score: 380,
            level: 1,
            lines: 2
        }
    );
}

#[test]
fn test_ten_lines_raise_level_and_speed() {
    let mut engine = started(PieceKind::O);
    for _ in 0..5 {
        for x in [0, 2, 4, 6, 8] {
            drop_o_at(&mut engine, x);
        }
    }

    assert_eq!(engine.lines(), 10);
    assert_eq!(engine.level(), 2);
    assert_eq!(engine.drop_interval_ms(), 900);
    // Every clear happened at level 1.
    assert_eq!(engine.score(), 25 * 36 + 5 * 200);
    assert_eq!(engine.display().level, 2);
}

#[test]
fn test_game_over_when_stack_reaches_spawn() {
    let mut engine = started(PieceKind::O);
    for _ in 0..9 {
        engine.hard_drop();
        assert!(!engine.is_game_over());
    }
    engine.hard_drop();
    assert!(engine.is_game_over());
    assert!(engine.take_last_event().unwrap().topped_out);

    // Frozen: nothing changes any more.
    let frozen = engine.snapshot();
    assert!(!engine.apply_action(GameAction::MoveLeft));
    assert!(!engine.apply_action(GameAction::Rotate));
    assert!(!engine.apply_action(GameAction::HardDrop));
    assert!(!engine.apply_action(GameAction::TogglePause));
    assert!(!engine.tick(60_000));
    assert_eq!(engine.snapshot(), frozen);
}

#[test]
fn test_pause_freezes_gravity_but_applies_input() {
    let mut engine = started(PieceKind::T);
    assert!(engine.apply_action(GameAction::TogglePause));
    assert!(engine.is_paused());

    assert!(!engine.tick(5000));
    assert_eq!(engine.active().unwrap().y, 0);

    assert!(engine.apply_action(GameAction::MoveLeft));
    assert!(engine.apply_action(GameAction::Rotate));
    assert!(engine.apply_action(GameAction::SoftDrop));
    let piece = engine.active().unwrap();
    assert_eq!((piece.x, piece.y), (2, 1));
    assert_eq!((piece.shape.width(), piece.shape.height()), (2, 3));

    // Still paused: the next tick is inert.
    assert!(!engine.tick(9000));
    assert_eq!(engine.active().unwrap().y, 1);

    assert!(engine.apply_action(GameAction::TogglePause));
    assert!(engine.tick(9001));
    assert_eq!(engine.active().unwrap().y, 2);
}

#[test]
fn test_restart_resets_everything() {
    let mut engine = started(PieceKind::O);
    for x in [0, 2, 4, 6, 8, 0] {
        drop_o_at(&mut engine, x);
    }
    engine.tick(4242);
    assert!(engine.score() > 0);

    assert!(engine.apply_action(GameAction::Restart));
    assert_eq!(engine.phase(), Phase::Running);
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.lines(), 0);
    assert_eq!(engine.level(), 1);
    assert_eq!(engine.board().filled_count(), 0);
    assert_eq!(engine.last_drop_ms(), 4242);
    assert_eq!(*engine.display(), ScoreBoard::default());
}

#[test]
fn test_snapshot_tracks_board_codes() {
    let mut engine = started(PieceKind::L);
    engine.hard_drop();

    let snap = engine.snapshot();
    assert_eq!(snap.board[19][3], PieceKind::L.code());
    assert_eq!(snap.board[18][5], PieceKind::L.code());
    assert_eq!(snap.board[18][3], 0);
    assert_eq!(snap.score, 36);
    assert_eq!(snap.phase, Phase::Running);
    assert!(snap.playable());
}
