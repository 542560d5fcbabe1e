//! Terminal Blocktris runner (default binary).
//!
//! This is the primary gameplay entrypoint.
//! It uses crossterm for input and the framebuffer-based renderer from `blocktris::term`.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event};

use blocktris::core::{GameEngine, GameSnapshot, UniformPieces};
use blocktris::input::{handle_key_event, should_quit};
use blocktris::term::{FrameBuffer, GameView, ScoreBoard, TerminalRenderer, Viewport};
use blocktris::types::FRAME_MS;

/// Monotonic milliseconds since the runner started.
struct FrameClock {
    origin: Instant,
}

impl FrameClock {
    fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

fn seed_from_time() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let clock = FrameClock::new();
    let mut engine = GameEngine::new(UniformPieces::new(seed_from_time()), ScoreBoard::default());

    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut panel = ScoreBoard::default();
    let mut fb = FrameBuffer::new(0, 0);
    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut last_frame = Instant::now();

    loop {
        // Gravity first so input in this frame sees the current clock.
        engine.tick(clock.now_ms());

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        if engine.is_paused() {
            // Input still reaches the engine; the screen keeps the frame from pause time.
            snap.phase = engine.phase();
        } else {
            engine.snapshot_into(&mut snap);
            panel = *engine.display();
        }
        view.render_into(&snap, &panel, Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;

        // Input until the next frame is due. Every event is applied on receipt.
        let mut timeout = frame.saturating_sub(last_frame.elapsed());
        while event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        engine.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
            timeout = frame.saturating_sub(last_frame.elapsed());
        }
        last_frame = Instant::now();
    }
}
