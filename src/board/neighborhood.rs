//! King-move neighborhoods.
//!
//! The 3x3 block of squares centred on a square, clipped to the board.
//! Edge squares get a 2x3 or 3x2 block and corner squares a 2x2 block.
//! Pure geometry: no board contents are consulted.

use std::ops::RangeInclusive;

use super::position::Position;

/// Inclusive row and column bounds of a clipped 3x3 block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Neighborhood {
    pub min_row: usize,
    pub max_row: usize,
    pub min_col: usize,
    pub max_col: usize,
}

impl Neighborhood {
    /// The block around `pos` on a `dim` x `dim` board.
    pub fn around(pos: Position, dim: usize) -> Self {
        let last = dim.saturating_sub(1);
        Neighborhood {
            min_row: pos.row.saturating_sub(1),
            max_row: (pos.row + 1).min(last),
            min_col: pos.col.saturating_sub(1),
            max_col: (pos.col + 1).min(last),
        }
    }

    pub fn rows(&self) -> RangeInclusive<usize> {
        self.min_row..=self.max_row
    }

    pub fn cols(&self) -> RangeInclusive<usize> {
        self.min_col..=self.max_col
    }

    /// Number of squares covered, the centre included.
    pub fn area(&self) -> usize {
        self.rows().count() * self.cols().count()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.rows().contains(&pos.row) && self.cols().contains(&pos.col)
    }

    /// Squares in the block, row-major, the centre included.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let cols = self.cols();
        self.rows()
            .flat_map(move |row| cols.clone().map(move |col| Position::new(row, col)))
    }
}
