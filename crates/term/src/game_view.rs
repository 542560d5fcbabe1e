//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Phase};
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::score_board::ScoreBoard;
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const BORDER: Style = Style::new(Rgb::new(200, 200, 200), Rgb::BLACK);
const EMPTY: Style = Style::new(Rgb::new(90, 90, 100), WELL_BG).dim();
const LABEL: Style = Style::new(Rgb::new(220, 220, 220), Rgb::BLACK).bold();
const VALUE: Style = Style::new(Rgb::new(200, 200, 200), Rgb::BLACK);
const HELP: Style = VALUE.dim();
const BANNER: Style = Style::new(Rgb::new(255, 255, 255), Rgb::BLACK).bold();

const KEY_HELP: [&str; 7] = [
    "←→ move",
    "↓  drop",
    "↑  rotate",
    "x  hard drop",
    "␣  pause",
    "r  restart",
    "q  quit",
];

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Outer rectangle of the playfield, border included.
#[derive(Debug, Clone, Copy)]
struct Well {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render the snapshot and score readouts into `fb`, resizing it to `viewport`.
    ///
    /// Reusing one framebuffer across frames keeps this allocation-free.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        scores: &ScoreBoard,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.reset(viewport.width, viewport.height);
        let well = self.place_well(viewport);
        self.draw_border(fb, well);

        for (y, row) in snap.board.iter().enumerate() {
            for (x, &code) in row.iter().enumerate() {
                let (x, y) = (x as u16, y as u16);
                match PieceKind::from_code(code) {
                    Some(kind) => self.draw_block(fb, well, x, y, kind),
                    None => self.paint_cell(fb, well, x, y, '·', EMPTY),
                }
            }
        }

        if let Some(active) = &snap.active {
            // Rows above the playfield are not drawn.
            for (x, y) in active.minos() {
                if (0..BOARD_WIDTH as i8).contains(&x) && (0..BOARD_HEIGHT as i8).contains(&y) {
                    self.draw_block(fb, well, x as u16, y as u16, active.kind);
                }
            }
        }

        self.draw_panel(fb, scores, viewport, well);

        let banner: &[&str] = match snap.phase {
            Phase::Running => &[],
            Phase::Idle => &["PRESS R TO START"],
            Phase::Paused => &["PAUSED"],
            Phase::GameOver => &["GAME OVER", "", "PRESS R TO PLAY AGAIN"],
        };
        for (line, text) in banner.iter().enumerate() {
            self.draw_banner(fb, well, line as u16, text);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, scores: &ScoreBoard, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, scores, viewport, &mut fb);
        fb
    }

    fn place_well(&self, viewport: Viewport) -> Well {
        let w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let h = BOARD_HEIGHT as u16 * self.cell_h + 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        Well {
            x: viewport.width.saturating_sub(w) / 2,
            y,
            w,
            h,
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, well: Well) {
        let right = well.x + well.w - 1;
        let bottom = well.y + well.h - 1;

        fb.fill(well.x + 1, well.y, well.w - 2, 1, '─', BORDER);
        fb.fill(well.x + 1, bottom, well.w - 2, 1, '─', BORDER);
        fb.fill(well.x, well.y + 1, 1, well.h - 2, '│', BORDER);
        fb.fill(right, well.y + 1, 1, well.h - 2, '│', BORDER);

        fb.put(well.x, well.y, '┌', BORDER);
        fb.put(right, well.y, '┐', BORDER);
        fb.put(well.x, bottom, '└', BORDER);
        fb.put(right, bottom, '┘', BORDER);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, well: Well, x: u16, y: u16, kind: PieceKind) {
        let style = Style::new(Rgb::from_hex(kind.color()), WELL_BG).bold();
        self.paint_cell(fb, well, x, y, '█', style);
    }

    fn paint_cell(&self, fb: &mut FrameBuffer, well: Well, x: u16, y: u16, ch: char, style: Style) {
        fb.fill(
            well.x + 1 + x * self.cell_w,
            well.y + 1 + y * self.cell_h,
            self.cell_w,
            self.cell_h,
            ch,
            style,
        );
    }

    /// Score readouts and key help to the right of the well, when there is room.
    fn draw_panel(&self, fb: &mut FrameBuffer, scores: &ScoreBoard, viewport: Viewport, well: Well) {
        let x = well.x.saturating_add(well.w).saturating_add(2);
        if viewport.width.saturating_sub(x) < 12 {
            return;
        }

        let mut y = well.y;
        for (label, value) in [
            ("SCORE", scores.score),
            ("LEVEL", scores.level),
            ("LINES", scores.lines),
        ] {
            fb.text(x, y, label, LABEL);
            fb.number(x, y + 1, value, VALUE);
            y += 3;
        }

        for (line, help) in KEY_HELP.iter().enumerate() {
            fb.text(x, y + line as u16, help, HELP);
        }
    }

    /// Centered text on the well, `line` rows below its middle.
    fn draw_banner(&self, fb: &mut FrameBuffer, well: Well, line: u16, text: &str) {
        if text.is_empty() {
            return;
        }
        let width = text.chars().count() as u16;
        let x = well.x + well.w.saturating_sub(width) / 2;
        fb.text(x, well.y + well.h / 2 + line, text, BANNER);
    }
}
