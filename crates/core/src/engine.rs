//! Game engine module - owns the complete game state
//!
//! This module ties together the board, the active piece, the piece source, scoring and
//! the score display. It runs the spawn → fall → land → clear → respawn cycle, driven by
//! an external frame clock through [`GameEngine::tick`] and by input through
//! [`GameEngine::apply_action`].
//!
//! Gameplay operations act while the game is running or paused; only gravity stops on
//! pause. Before the first `init` and once the game is over they return without touching
//! any state.

use std::num::NonZeroU32;

use crate::board::Board;
use crate::display::ScoreDisplay;
use crate::pieces::ActivePiece;
use crate::rng::PieceSource;
use crate::scoring::{drop_interval_ms, hard_drop_score, level_for_lines, line_clear_score};
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, LockEvent};

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Created but never started; no active piece.
    Idle,
    Running,
    Paused,
    /// Terminal until the next `init`.
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameEngine<P, D = ()> {
    board: Board,
    active: Option<ActivePiece>,
    pieces: P,
    display: D,
    phase: Phase,
    score: u32,
    lines: u32,
    level: NonZeroU32,
    drop_interval_ms: u32,
    /// Clock time of the last gravity drop.
    last_drop_ms: u64,
    /// Latest timestamp seen from the frame clock.
    clock_ms: u64,
    /// Last landing event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl<P: PieceSource, D: ScoreDisplay> GameEngine<P, D> {
    /// Create an idle engine. Nothing moves until [`GameEngine::init`].
    pub fn new(pieces: P, display: D) -> Self {
        let level = NonZeroU32::MIN;
        Self {
            board: Board::new(),
            active: None,
            pieces,
            display,
            phase: Phase::Idle,
            score: 0,
            lines: 0,
            level,
            drop_interval_ms: drop_interval_ms(level),
            last_drop_ms: 0,
            clock_ms: 0,
            last_event: None,
        }
    }

    /// Start (or restart) a game at clock time `now_ms`.
    pub fn init(&mut self, now_ms: u64) {
        self.board.clear();
        self.score = 0;
        self.lines = 0;
        self.level = NonZeroU32::MIN;
        self.drop_interval_ms = drop_interval_ms(self.level);
        self.phase = Phase::Running;
        self.last_drop_ms = now_ms;
        self.clock_ms = now_ms;
        self.last_event = None;
        self.spawn_piece();
        self.refresh_display();
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn started(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn is_paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level.get()
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn last_drop_ms(&self) -> u64 {
        self.last_drop_ms
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = self.active;
        out.phase = self.phase;
        out.score = self.score;
        out.level = self.level.get();
        out.lines = self.lines;
        out.drop_interval_ms = self.drop_interval_ms;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Take and clear the last landing event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Draw the next kind and place it at the spawn position.
    ///
    /// Returns false (and ends the game) if the new piece overlaps settled cells.
    pub fn spawn_piece(&mut self) -> bool {
        let piece = ActivePiece::new(self.pieces.next_kind());
        self.active = Some(piece);

        if self.board.collides(&piece, 0, 0) {
            self.phase = Phase::GameOver;
            return false;
        }
        true
    }

    /// The active piece, if gameplay may touch it.
    ///
    /// Paused games still take input; the front-end keeps the paused frame on screen.
    fn playable_piece(&self) -> Option<ActivePiece> {
        match self.phase {
            Phase::Running | Phase::Paused => self.active,
            Phase::Idle | Phase::GameOver => None,
        }
    }

    /// Try to move the active piece
    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(mut piece) = self.playable_piece() else {
            return false;
        };

        if self.board.collides(&piece, dx, dy) {
            return false;
        }

        piece.translate(dx, dy);
        self.active = Some(piece);
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(1, 0)
    }

    /// Rotate clockwise in place, or leave the piece untouched if the result collides.
    pub fn rotate(&mut self) -> bool {
        let Some(piece) = self.playable_piece() else {
            return false;
        };

        // `self.active` keeps the pre-rotation shape until the candidate is proven free.
        let mut rotated = piece;
        rotated.rotate();
        if self.board.collides(&rotated, 0, 0) {
            return false;
        }

        self.active = Some(rotated);
        true
    }

    /// One row of gravity.
    ///
    /// Moves the piece down if it can; otherwise lands it (merge, clear, respawn) and
    /// returns false.
    pub fn step(&mut self) -> bool {
        let Some(piece) = self.playable_piece() else {
            return false;
        };

        if self.try_move(0, 1) {
            return true;
        }

        self.land(piece);
        false
    }

    /// Drop straight to the floor, score 2 points per row, then land.
    ///
    /// Returns the number of rows travelled.
    pub fn hard_drop(&mut self) -> u32 {
        let Some(mut piece) = self.playable_piece() else {
            return 0;
        };

        let mut rows: u32 = 0;
        while !self.board.collides(&piece, 0, 1) {
            piece.translate(0, 1);
            rows += 1;
        }
        self.active = Some(piece);
        self.score = self.score.saturating_add(hard_drop_score(rows));

        self.step();
        self.refresh_display();
        rows
    }

    /// Flip between running and paused. Idle and finished games ignore it.
    pub fn toggle_pause(&mut self) -> bool {
        self.phase = match self.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
            Phase::Idle | Phase::GameOver => return false,
        };
        true
    }

    /// Advance the frame clock to `now_ms`.
    ///
    /// Performs at most one gravity step per call, once strictly more than the drop
    /// interval has passed since the last one. Missed intervals are not caught up.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.clock_ms = now_ms;
        if self.phase != Phase::Running {
            return false;
        }

        if now_ms.saturating_sub(self.last_drop_ms) > u64::from(self.drop_interval_ms) {
            self.step();
            self.last_drop_ms = now_ms;
            return true;
        }

        false
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => {
                // Lands count as applied input too.
                let was_playable = self.playable_piece().is_some();
                self.step();
                was_playable
            }
            GameAction::Rotate => self.rotate(),
            GameAction::HardDrop => {
                let was_playable = self.playable_piece().is_some();
                self.hard_drop();
                was_playable
            }
            GameAction::TogglePause => self.toggle_pause(),
            GameAction::Restart => {
                self.init(self.clock_ms);
                true
            }
        }
    }

    /// Merge, clear, score and respawn in one go.
    fn land(&mut self, piece: ActivePiece) {
        self.board.merge(&piece);
        self.active = None;

        let lines_cleared = self.board.clear_full_lines().len() as u32;
        let mut points = 0;
        if lines_cleared > 0 {
            points = line_clear_score(lines_cleared, self.level);
            self.score = self.score.saturating_add(points);
            self.lines = self.lines.saturating_add(lines_cleared);
            self.level = level_for_lines(self.lines);
            self.drop_interval_ms = drop_interval_ms(self.level);
            self.refresh_display();
        }

        let fits = self.spawn_piece();
        self.last_event = Some(LockEvent {
            kind: piece.kind,
            lines_cleared,
            line_clear_score: points,
            topped_out: !fits,
        });
    }

    fn refresh_display(&mut self) {
        self.display.show(self.score, self.level.get(), self.lines);
    }
}
