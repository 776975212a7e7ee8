//! Pieces module - the tetromino catalog and shape matrices.
//!
//! Shapes are small 0/1 matrices anchored at a top-left origin. Rotation is
//! computed on the matrix itself (transpose, then reverse row order) rather
//! than with a fixed pivot cell, so a rotated piece may shift apparent
//! position for non-square shapes. That is accepted behavior, not a bug.

use crate::grid::Grid;
use blockfall_types::PieceKind;

/// Maximum shape extent along either axis.
pub const SHAPE_MAX: usize = 4;

/// A piece shape: occupied cells relative to the origin, row-major.
///
/// `rows`/`cols` give the live extent; cells outside it are always false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeGrid {
    rows: u8,
    cols: u8,
    cells: [[bool; SHAPE_MAX]; SHAPE_MAX],
}

impl ShapeGrid {
    /// Build a shape from 0/1 rows. All rows must share one length.
    fn from_rows(rows: &[&[u8]]) -> Self {
        debug_assert!(!rows.is_empty() && rows.len() <= SHAPE_MAX);
        let cols = rows[0].len();
        debug_assert!(cols > 0 && cols <= SHAPE_MAX);
        debug_assert!(rows.iter().all(|r| r.len() == cols));

        let mut cells = [[false; SHAPE_MAX]; SHAPE_MAX];
        for (y, row) in rows.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                cells[y][x] = v != 0;
            }
        }
        Self {
            rows: rows.len() as u8,
            cols: cols as u8,
            cells,
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether the cell at (cx, cy) within the shape extent is occupied.
    pub fn is_set(&self, cx: u8, cy: u8) -> bool {
        cx < self.cols && cy < self.rows && self.cells[cy as usize][cx as usize]
    }

    /// Iterate occupied cells as (cx, cy) offsets from the origin.
    pub fn iter_cells(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        (0..self.rows).flat_map(move |cy| {
            (0..self.cols).filter_map(move |cx| self.cells[cy as usize][cx as usize].then_some((cx, cy)))
        })
    }

    /// Return this shape rotated a quarter turn: transpose, then reverse
    /// row order. Four applications restore the original matrix.
    pub fn rotated(&self) -> ShapeGrid {
        let mut cells = [[false; SHAPE_MAX]; SHAPE_MAX];
        // new[i][j] = old[j][cols - 1 - i]
        for i in 0..self.cols as usize {
            for j in 0..self.rows as usize {
                cells[i][j] = self.cells[j][self.cols as usize - 1 - i];
            }
        }
        ShapeGrid {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }

    /// Placement validator: true iff every occupied cell lands in bounds on
    /// an empty grid cell. Pure predicate; used both for move/rotate
    /// validation and for the one-row-lower landing check.
    pub fn fits(&self, grid: &Grid, x: i8, y: i8) -> bool {
        self.iter_cells()
            .all(|(cx, cy)| grid.is_empty(x + cx as i8, y + cy as i8))
    }
}

/// Look up the catalog shape for a piece kind.
///
/// Matrices follow the classic layouts; each kind keeps a fixed color tag in
/// the presentation layer (I cyan, O yellow, Z red, S green, T purple,
/// L orange, J blue).
pub fn catalog_shape(kind: PieceKind) -> ShapeGrid {
    match kind {
        PieceKind::I => ShapeGrid::from_rows(&[&[1, 1, 1, 1]]),
        PieceKind::O => ShapeGrid::from_rows(&[&[1, 1], &[1, 1]]),
        PieceKind::Z => ShapeGrid::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
        PieceKind::S => ShapeGrid::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
        PieceKind::T => ShapeGrid::from_rows(&[&[1, 1, 1], &[0, 1, 0]]),
        PieceKind::L => ShapeGrid::from_rows(&[&[1, 1, 1], &[1, 0, 0]]),
        PieceKind::J => ShapeGrid::from_rows(&[&[1, 1, 1], &[0, 0, 1]]),
    }
}

/// An active piece instance: a kind plus an independently-mutable copy of
/// its catalog shape. Rotations replace the shape; the catalog is never
/// touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: ShapeGrid,
}

impl Piece {
    /// Create a fresh piece with a copy of the catalog shape.
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: catalog_shape(kind),
        }
    }
}
