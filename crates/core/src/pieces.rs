//! Pieces module - tetromino shape matrices and the active falling piece
//!
//! Shapes are small boolean matrices (at most 4x4) stored inline so pieces stay `Copy`.
//! Rotation is naive: the matrix is turned 90° clockwise and nothing else happens.
//! There are no wall kicks; callers test the rotated shape and revert on collision.

use crate::types::{PieceKind, BOARD_WIDTH};

/// Largest side of any shape matrix
pub const MAX_SHAPE_SIZE: usize = 4;

/// Boolean occupancy matrix of a piece, indexed `[row][col]`.
///
/// Cells outside `width x height` are always `false`, so derived equality
/// compares exactly the visible matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    cells: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from rows of `0`/`1` values.
    ///
    /// # Panics
    ///
    /// Panics if `rows` is empty, larger than 4x4, or ragged.
    ///
    /// ```
    /// use blocktris_core::Shape;
    ///
    /// let t = Shape::from_rows(&[&[0, 1, 0], &[1, 1, 1]]);
    /// assert_eq!((t.width(), t.height()), (3, 2));
    /// assert!(t.is_filled(1, 0));
    /// assert!(!t.is_filled(0, 0));
    /// ```
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        assert!(
            !rows.is_empty() && rows.len() <= MAX_SHAPE_SIZE,
            "shape needs 1..=4 rows"
        );
        let width = rows[0].len();
        assert!(
            width > 0 && width <= MAX_SHAPE_SIZE,
            "shape needs 1..=4 columns"
        );

        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), width, "shape rows must have equal length");
            for (x, &v) in row.iter().enumerate() {
                cells[y][x] = v != 0;
            }
        }

        Self {
            width: width as u8,
            height: rows.len() as u8,
            cells,
        }
    }

    /// Canonical spawn shape for a piece kind
    pub fn canonical(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => Self::from_rows(&[&[1, 1, 1, 1]]),
            PieceKind::O => Self::from_rows(&[&[1, 1], &[1, 1]]),
            PieceKind::T => Self::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
            PieceKind::S => Self::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
            PieceKind::Z => Self::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
            PieceKind::J => Self::from_rows(&[&[1, 0, 0], &[1, 1, 1]]),
            PieceKind::L => Self::from_rows(&[&[0, 0, 1], &[1, 1, 1]]),
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the cell at column `x`, row `y` is occupied.
    /// Out-of-matrix coordinates are empty.
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        x < self.width as usize && y < self.height as usize && self.cells[y][x]
    }

    /// Occupied cells as `(dx, dy)` offsets from the shape origin, row by row.
    pub fn minos(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.height as usize).flat_map(move |y| {
            (0..self.width as usize)
                .filter(move |&x| self.cells[y][x])
                .map(move |x| (x as i8, y as i8))
        })
    }

    /// New matrix rotated 90° clockwise (transpose, then reverse each row).
    pub fn rotated_cw(&self) -> Self {
        let w = self.width as usize;
        let h = self.height as usize;
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];

        // Row r of the result is column r of the source, read bottom to top.
        for (r, row) in cells.iter_mut().enumerate().take(w) {
            for (c, cell) in row.iter_mut().enumerate().take(h) {
                *cell = self.cells[h - 1 - c][r];
            }
        }

        Self {
            width: self.height,
            height: self.width,
            cells,
        }
    }
}

/// The currently falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Create a piece at the top row, horizontally centered (rounded left).
    pub fn new(kind: PieceKind) -> Self {
        let shape = Shape::canonical(kind);
        Self {
            kind,
            shape,
            x: ((BOARD_WIDTH - shape.width()) / 2) as i8,
            y: 0,
        }
    }

    /// Shift the origin. No validation; callers check collisions first.
    pub fn translate(&mut self, dx: i8, dy: i8) {
        self.x += dx;
        self.y += dy;
    }

    /// Replace the shape with its clockwise rotation. No validation.
    pub fn rotate(&mut self) {
        self.shape = self.shape.rotated_cw();
    }

    /// Occupied cells in board coordinates.
    pub fn minos(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .minos()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// RGB color of the piece's kind.
    pub fn color(&self) -> u32 {
        self.kind.color()
    }
}
