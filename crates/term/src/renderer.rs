//! Flushes framebuffers to the real terminal.
//!
//! The first frame, and any frame after a resize or [`TerminalRenderer::invalidate`], is
//! painted in full. After that only the runs of glyphs that changed are rewritten.

use std::io::{self, Write};
use std::ops::Range;

use anyhow::Result;
use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, Glyph, Rgb, Style};

/// Owns stdout while the game is on screen.
///
/// `enter` switches to raw mode on the alternate screen; `exit` must run on every exit
/// path to give the terminal back.
pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// What the terminal currently shows.
    shown: Option<FrameBuffer>,
    out: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: None,
            out: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.out.clear();
        self.out.queue(terminal::EnterAlternateScreen)?;
        self.out.queue(cursor::Hide)?;
        self.out.queue(terminal::DisableLineWrap)?;
        self.flush()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.out.clear();
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        self.out.queue(terminal::EnableLineWrap)?;
        self.out.queue(cursor::Show)?;
        self.out.queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Paint the next frame in full (after a resize event, for example).
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Put `frame` on screen.
    ///
    /// On return `frame` holds the previously shown buffer, so the caller can draw the
    /// next frame into it without allocating.
    pub fn present(&mut self, frame: &mut FrameBuffer) -> Result<()> {
        let shown = self
            .shown
            .take()
            .filter(|s| s.width() == frame.width() && s.height() == frame.height());

        self.out.clear();
        encode_frame(shown.as_ref(), frame, &mut self.out)?;
        self.flush()?;

        let mut back = shown.unwrap_or_else(|| FrameBuffer::new(frame.width(), frame.height()));
        std::mem::swap(&mut back, frame);
        self.shown = Some(back);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.write_all(&self.out)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode `next` as terminal commands: every row when there is no `shown` frame,
/// otherwise only the runs that differ from it.
fn encode_frame(shown: Option<&FrameBuffer>, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut pen: Option<Style> = None;
    if shown.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    for y in 0..next.height() {
        let row = next.row(y);
        match shown {
            Some(shown) => {
                for span in changed_spans(shown.row(y), row) {
                    paint(out, &mut pen, span.start as u16, y, &row[span])?;
                }
            }
            None => paint(out, &mut pen, 0, y, row)?,
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Maximal runs of columns where `new` differs from `old`.
fn changed_spans<'a>(old: &'a [Glyph], new: &'a [Glyph]) -> impl Iterator<Item = Range<usize>> + 'a {
    let mut x = 0;
    std::iter::from_fn(move || {
        while x < new.len() && old.get(x) == Some(&new[x]) {
            x += 1;
        }
        if x == new.len() {
            return None;
        }
        let start = x;
        while x < new.len() && old.get(x) != Some(&new[x]) {
            x += 1;
        }
        Some(start..x)
    })
}

/// Move to `(x, y)` and print `glyphs`, switching style only when it changes.
fn paint(out: &mut Vec<u8>, pen: &mut Option<Style>, x: u16, y: u16, glyphs: &[Glyph]) -> Result<()> {
    out.queue(cursor::MoveTo(x, y))?;
    for glyph in glyphs {
        if *pen != Some(glyph.style) {
            set_style(out, glyph.style)?;
            *pen = Some(glyph.style);
        }
        out.queue(Print(glyph.ch))?;
    }
    Ok(())
}

fn set_style(out: &mut Vec<u8>, style: Style) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(color(style.fg)))?;
    out.queue(SetBackgroundColor(color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
