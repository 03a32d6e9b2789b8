//! Line occupancy counting.
//!
//! A piece slides exactly as many squares as there are pieces on the whole
//! line it moves along, so every legality query starts by counting the four
//! lines through the piece. Counts always cover the full line, both sides
//! of the piece and the piece itself.

use crate::board::{Axis, BoardError, Grid, Position};

/// Occupancy of the four lines through a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineCounts {
    pub row: usize,
    pub col: usize,
    /// The "\" diagonal, top-left to bottom-right.
    pub diagonal: usize,
    /// The "/" diagonal, bottom-left to top-right.
    pub anti_diagonal: usize,
}

impl LineCounts {
    /// Returns the count for one axis.
    pub const fn along(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.row,
            Axis::Column => self.col,
            Axis::Diagonal => self.diagonal,
            Axis::AntiDiagonal => self.anti_diagonal,
        }
    }
}

/// Counts the pieces on each line through the piece at `pos`.
///
/// Fails with `EmptySquare` when `pos` holds no piece.
pub fn line_counts(grid: &Grid, pos: Position) -> Result<LineCounts, BoardError> {
    grid.piece(pos)?;
    Ok(LineCounts {
        row: line_count(grid, pos, Axis::Row),
        col: line_count(grid, pos, Axis::Column),
        diagonal: line_count(grid, pos, Axis::Diagonal),
        anti_diagonal: line_count(grid, pos, Axis::AntiDiagonal),
    })
}

/// Counts occupied squares on the full `axis` line through `pos`.
///
/// Walks outward from `pos` in both directions until the edge, so the
/// line's entry point on the board never has to be located first.
pub(crate) fn line_count(grid: &Grid, pos: Position, axis: Axis) -> usize {
    let dim = grid.dim();
    let mut count = usize::from(!grid.at(pos).is_empty());
    for direction in axis.directions() {
        count += (1..dim)
            .map_while(|distance| pos.step(direction, distance, dim))
            .filter(|&sq| !grid.at(sq).is_empty())
            .count();
    }
    count
}
