//! Shape module - tetromino matrices and the 90° rotation transform
//!
//! A shape is a small row-major matrix of filled/empty cells (at most 4x4).
//! Rotation transposes and mirrors the matrix, so a 1x4 bar becomes 4x1.
//! There is no rotation system beyond that: no pivots and no wall kicks.

use crate::types::{PieceKind, MAX_SHAPE_DIM};

/// Offset of a single mino relative to the shape's top-left corner
pub type MinoOffset = (i8, i8);

/// Filled/empty matrix of a piece.
///
/// Cells outside `rows x cols` are always empty, which keeps equality
/// meaningful after rotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from row strings; `#` marks a filled cell.
    ///
    /// Rows longer than the widest row are not expected; short rows are padded
    /// with empty cells.
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        let height = rows.len().min(MAX_SHAPE_DIM);
        let mut width = 0;
        for (y, row) in rows.iter().take(height).enumerate() {
            for (x, ch) in row.chars().take(MAX_SHAPE_DIM).enumerate() {
                cells[y][x] = ch == '#';
                width = width.max(x + 1);
            }
        }
        Self {
            rows: height as u8,
            cols: width as u8,
            cells,
        }
    }

    /// Spawn orientation for a piece kind.
    pub fn of(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => Self::from_rows(&["####"]),
            PieceKind::O => Self::from_rows(&["##", "##"]),
            PieceKind::T => Self::from_rows(&[".#.", "###"]),
            PieceKind::S => Self::from_rows(&[".##", "##."]),
            PieceKind::Z => Self::from_rows(&["##.", ".##"]),
            PieceKind::J => Self::from_rows(&["#..", "###"]),
            PieceKind::L => Self::from_rows(&["..#", "###"]),
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Iterate filled cells as (dx, dy) offsets, row by row.
    pub fn minos(&self) -> impl Iterator<Item = MinoOffset> + '_ {
        (0..self.rows as usize).flat_map(move |y| {
            (0..self.cols as usize)
                .filter(move |&x| self.cells[y][x])
                .map(move |x| (x as i8, y as i8))
        })
    }

    /// Rotate 90° clockwise.
    ///
    /// Row `i` of the result is column `i` of the source read bottom to top.
    pub fn rotated_cw(&self) -> Self {
        let rows = self.rows as usize;
        let cols = self.cols as usize;
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (i, out_row) in cells.iter_mut().enumerate().take(cols) {
            for (k, out) in out_row.iter_mut().enumerate().take(rows) {
                *out = self.cells[rows - 1 - k][i];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_four_minos() {
        for kind in PieceKind::ALL {
            assert_eq!(Shape::of(kind).minos().count(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn t_rotates_clockwise() {
        let t = Shape::of(PieceKind::T);
        let r = t.rotated_cw();
        // .#.      #.
        // ###  ->  ##
        //          #.
        assert_eq!(r, Shape::from_rows(&["#.", "##", "#."]));
        assert_eq!((r.rows(), r.cols()), (3, 2));
    }

    #[test]
    fn i_becomes_vertical() {
        let r = Shape::of(PieceKind::I).rotated_cw();
        assert_eq!((r.rows(), r.cols()), (4, 1));
        let minos: Vec<_> = r.minos().collect();
        assert_eq!(minos, vec![(0, 0), (0, 1), (0, 2), (0, 3)]);
    }

    #[test]
    fn four_rotations_are_identity() {
        for kind in PieceKind::ALL {
            let s = Shape::of(kind);
            let back = s.rotated_cw().rotated_cw().rotated_cw().rotated_cw();
            assert_eq!(s, back, "{:?}", kind);
        }
    }

    #[test]
    fn minos_are_row_major() {
        let l = Shape::of(PieceKind::L);
        let minos: Vec<_> = l.minos().collect();
        assert_eq!(minos, vec![(2, 0), (0, 1), (1, 1), (2, 1)]);
    }
}
