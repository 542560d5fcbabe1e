//! Character grid the game view paints into and the renderer flushes.
//!
//! Writes outside the grid are clipped silently, so drawing code never has to check the
//! terminal size.

/// 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// From a `0xRRGGBB` value, as stored in `PieceKind::color`.
    pub const fn from_hex(hex: u32) -> Self {
        Self::new((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }
}

/// Colors plus the two attributes the game uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl Style {
    /// Light grey on black.
    pub const PLAIN: Style = Style::new(Rgb::new(220, 220, 220), Rgb::BLACK);

    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub const fn dim(self) -> Self {
        Self { dim: true, ..self }
    }
}

/// One terminal character and its style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub style: Style,
}

impl Glyph {
    pub const BLANK: Glyph = Glyph {
        ch: ' ',
        style: Style::PLAIN,
    };
}

/// Row-major grid of glyphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let mut fb = Self {
            width: 0,
            height: 0,
            glyphs: Vec::new(),
        };
        fb.reset(width, height);
        fb
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Blank every glyph at the given size, reusing the allocation.
    pub fn reset(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.glyphs.clear();
        self.glyphs
            .resize(width as usize * height as usize, Glyph::BLANK);
    }

    /// Row `y`, or an empty slice below the grid.
    pub fn row(&self, y: u16) -> &[Glyph] {
        if y >= self.height {
            return &[];
        }
        let start = y as usize * self.width as usize;
        &self.glyphs[start..start + self.width as usize]
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        self.row(y).get(x as usize).copied()
    }

    pub fn put(&mut self, x: u16, y: u16, ch: char, style: Style) {
        if x < self.width && y < self.height {
            let i = y as usize * self.width as usize + x as usize;
            self.glyphs[i] = Glyph { ch, style };
        }
    }

    /// Write `text` left to right; returns the column after the last character.
    pub fn text(&mut self, x: u16, y: u16, text: &str, style: Style) -> u16 {
        let mut col = x;
        for ch in text.chars() {
            self.put(col, y, ch, style);
            col = col.saturating_add(1);
        }
        col
    }

    /// Write `value` in decimal without allocating.
    pub fn number(&mut self, x: u16, y: u16, value: u32, style: Style) -> u16 {
        let mut digits = [0u8; 10];
        let mut start = digits.len();
        let mut n = value;
        loop {
            start -= 1;
            digits[start] = b'0' + (n % 10) as u8;
            n /= 10;
            if n == 0 {
                break;
            }
        }

        let mut col = x;
        for &d in &digits[start..] {
            self.put(col, y, d as char, style);
            col = col.saturating_add(1);
        }
        col
    }

    pub fn fill(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: Style) {
        for row in y..y.saturating_add(h) {
            for col in x..x.saturating_add(w) {
                self.put(col, row, ch, style);
            }
        }
    }

    /// Characters of row `y` (tests and debugging).
    pub fn row_text(&self, y: u16) -> String {
        self.row(y).iter().map(|g| g.ch).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_writes_digits_left_to_right() {
        let mut fb = FrameBuffer::new(12, 1);
        assert_eq!(fb.number(1, 0, 40213, Style::PLAIN), 6);
        assert_eq!(fb.row_text(0), " 40213      ");

        fb.number(0, 0, 0, Style::PLAIN);
        assert_eq!(fb.get(0, 0).unwrap().ch, '0');

        let mut wide = FrameBuffer::new(10, 1);
        wide.number(0, 0, u32::MAX, Style::PLAIN);
        assert_eq!(wide.row_text(0), "4294967295");
    }

    #[test]
    fn from_hex_splits_channels() {
        assert_eq!(Rgb::from_hex(0xf0a000), Rgb::new(0xf0, 0xa0, 0x00));
    }

    #[test]
    fn writes_outside_are_clipped() {
        let mut fb = FrameBuffer::new(3, 2);
        assert_eq!(fb.text(1, 1, "abcdef", Style::PLAIN), 7);
        assert_eq!(fb.row_text(1), " ab");
        fb.put(5, 5, 'z', Style::PLAIN);
        fb.fill(2, 0, 4, 4, '#', Style::PLAIN);
        assert_eq!(fb.row_text(0), "  #");
        assert!(fb.row(2).is_empty());
        assert_eq!(fb.get(3, 0), None);
    }

    #[test]
    fn reset_blanks_and_resizes() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.put(0, 0, 'x', Style::PLAIN.bold());
        fb.reset(4, 1);
        assert_eq!((fb.width(), fb.height()), (4, 1));
        assert_eq!(fb.row(0), &[Glyph::BLANK; 4]);
    }
}
