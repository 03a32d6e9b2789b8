//! Legal move generation.
//!
//! For a piece on a given square, computes every destination it may slide
//! to. Along each axis the slide distance equals that axis's line count.
//! Own pieces may be jumped, opposing pieces may not, and the landing square
//! must be empty or hold an opposing piece (which is captured).
//!
//! Output order is fixed: axes in [`ALL_AXES`] order (row, column, "\",
//! "/"), and within each axis the direction listed first by
//! [`Axis::directions`] before its opposite.

pub mod lines;

pub use lines::{line_counts, LineCounts};

use crate::board::{Axis, BoardError, Color, Direction, Grid, Position, ALL_AXES};

/// A legal slide of one piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    pub direction: Direction,
}

impl Move {
    pub fn axis(&self) -> Axis {
        self.direction.axis()
    }
}

/// Returns every legal move for the piece at `pos`.
///
/// Fails with `EmptySquare` when `pos` holds no piece and `OutOfBounds`
/// when it is off the board.
pub fn legal_moves(grid: &Grid, pos: Position) -> Result<Vec<Move>, BoardError> {
    let color = grid.piece(pos)?;
    let counts = line_counts(grid, pos)?;

    let mut moves = Vec::new();
    for axis in ALL_AXES {
        let distance = counts.along(axis);
        for direction in axis.directions() {
            if let Some(to) = slide_target(grid, pos, color, direction, distance) {
                moves.push(Move { from: pos, to, direction });
            }
        }
    }
    Ok(moves)
}

/// Returns the destination squares for the piece at `pos`, in scan order.
pub fn legal_destinations(grid: &Grid, pos: Position) -> Result<Vec<Position>, BoardError> {
    Ok(legal_moves(grid, pos)?.into_iter().map(|m| m.to).collect())
}

/// Returns every legal move for every piece of `color`, pieces taken in
/// row-major order.
pub fn all_legal_moves(grid: &Grid, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();
    for pos in grid.pieces(color) {
        // `pos` comes from the board's own scan, so it is always occupied.
        if let Ok(mut found) = legal_moves(grid, pos) {
            moves.append(&mut found);
        }
    }
    moves
}

/// Resolves one direction: the square exactly `distance` steps away, if
/// the path there is open and the landing square is not the mover's own.
fn slide_target(
    grid: &Grid,
    from: Position,
    color: Color,
    direction: Direction,
    distance: usize,
) -> Option<Position> {
    let dim = grid.dim();
    for step in 1..distance {
        // Running off the edge before the full distance kills the direction.
        let sq = from.step(direction, step, dim)?;
        if grid.at(sq).holds(color.opponent()) {
            return None;
        }
    }
    let to = from.step(direction, distance, dim)?;
    if grid.at(to).holds(color) {
        return None;
    }
    Some(to)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn opening_moves_for_top_right_black() {
        let grid = Grid::standard();
        let dests = legal_destinations(&grid, p(0, 6)).unwrap();
        assert_eq!(dests, vec![p(0, 0), p(2, 6), p(2, 4)]);
    }

    #[test]
    fn own_piece_blocks_landing_and_opens_diagonal() {
        let mut grid = Grid::standard();
        grid.move_piece(p(1, 7), p(1, 6)).unwrap();
        let dests = legal_destinations(&grid, p(0, 6)).unwrap();
        assert_eq!(dests, vec![p(0, 0), p(1, 7), p(2, 4)]);
    }

    #[test]
    fn centre_piece_after_several_moves() {
        let mut grid = Grid::standard();
        grid.move_piece(p(1, 7), p(1, 6)).unwrap();
        grid.move_piece(p(6, 7), p(3, 4)).unwrap();
        let dests = legal_destinations(&grid, p(3, 4)).unwrap();
        assert_eq!(
            dests,
            vec![p(3, 1), p(6, 4), p(0, 4), p(5, 6), p(1, 2), p(5, 2)]
        );
    }

    #[test]
    fn moves_carry_their_direction() {
        let grid = Grid::standard();
        let moves = legal_moves(&grid, p(0, 6)).unwrap();
        let dirs: Vec<Direction> = moves.iter().map(|m| m.direction).collect();
        assert_eq!(dirs, vec![Direction::West, Direction::South, Direction::SouthWest]);
        assert_eq!(moves[2].axis(), Axis::AntiDiagonal);
    }

    #[test]
    fn opponent_in_path_blocks() {
        let mut grid = Grid::empty(8).unwrap();
        grid.place(p(4, 1), Color::Black).unwrap();
        grid.place(p(4, 2), Color::White).unwrap();
        grid.place(p(4, 6), Color::Black).unwrap();
        // Row count 3: east needs to pass (4,2) and (4,3).
        let dests = legal_destinations(&grid, p(4, 1)).unwrap();
        assert!(!dests.contains(&p(4, 4)));
    }

    #[test]
    fn own_piece_in_path_is_jumped() {
        let mut grid = Grid::empty(8).unwrap();
        grid.place(p(4, 1), Color::Black).unwrap();
        grid.place(p(4, 2), Color::Black).unwrap();
        grid.place(p(4, 6), Color::White).unwrap();
        let dests = legal_destinations(&grid, p(4, 1)).unwrap();
        assert!(dests.contains(&p(4, 4)));
    }

    #[test]
    fn capture_on_landing_square() {
        let mut grid = Grid::empty(8).unwrap();
        grid.place(p(2, 2), Color::White).unwrap();
        grid.place(p(2, 4), Color::Black).unwrap();
        // Row count 2: white lands on the black piece two squares east.
        let dests = legal_destinations(&grid, p(2, 2)).unwrap();
        assert_eq!(dests.first(), Some(&p(2, 4)));
    }

    #[test]
    fn edge_terminates_the_scan() {
        let mut grid = Grid::empty(8).unwrap();
        for col in 0..8 {
            grid.place(p(0, col), Color::Black).unwrap();
        }
        // Full row of eight: no piece on it can slide along the row.
        for col in 0..8 {
            let moves = legal_moves(&grid, p(0, col)).unwrap();
            assert!(moves.iter().all(|m| m.axis() != Axis::Row));
        }
    }

    #[test]
    fn empty_square_has_no_moves() {
        let grid = Grid::standard();
        assert_eq!(
            legal_destinations(&grid, p(0, 7)),
            Err(BoardError::EmptySquare(p(0, 7)))
        );
    }

    #[test]
    fn opening_move_totals() {
        let grid = Grid::standard();
        let black = all_legal_moves(&grid, Color::Black);
        let white = all_legal_moves(&grid, Color::White);
        assert_eq!(black.len(), white.len());
        assert!(black.iter().all(|m| grid.at(m.from).holds(Color::Black)));
    }
}
