//! Board coordinates and the four line axes.

use std::fmt;

/// A square on the board, addressed as (row, col) from the top-left corner.
///
/// Row 0 is the top rank. Positions order row-major, which is also the
/// order every board scan in this crate uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns true if the position lies on a `dim` x `dim` board.
    pub const fn is_on_board(self, dim: usize) -> bool {
        self.row < dim && self.col < dim
    }

    /// Steps `distance` squares in `direction`, returning `None` when the
    /// result leaves a `dim` x `dim` board.
    pub fn step(self, direction: Direction, distance: usize, dim: usize) -> Option<Position> {
        let (dr, dc) = direction.delta();
        let row = offset(self.row, dr, distance)?;
        let col = offset(self.col, dc, distance)?;
        let next = Position::new(row, col);
        next.is_on_board(dim).then_some(next)
    }
}

fn offset(base: usize, delta: isize, distance: usize) -> Option<usize> {
    match delta {
        0 => Some(base),
        1 => base.checked_add(distance),
        _ => base.checked_sub(distance),
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Position::new(row, col)
    }
}

/// One of the four lines through a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Row,
    Column,
    /// Top-left to bottom-right.
    Diagonal,
    /// Bottom-left to top-right.
    AntiDiagonal,
}

/// All axes in move-generation scan order.
pub const ALL_AXES: [Axis; 4] = [Axis::Row, Axis::Column, Axis::Diagonal, Axis::AntiDiagonal];

impl Axis {
    /// The two directions along this axis, the one scanned first leading.
    pub const fn directions(self) -> [Direction; 2] {
        match self {
            Axis::Row => [Direction::East, Direction::West],
            Axis::Column => [Direction::South, Direction::North],
            Axis::Diagonal => [Direction::SouthEast, Direction::NorthWest],
            Axis::AntiDiagonal => [Direction::NorthEast, Direction::SouthWest],
        }
    }
}

/// A compass direction on the board. North is toward row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// Returns the (row, col) unit step.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }

    pub const fn axis(self) -> Axis {
        match self {
            Direction::East | Direction::West => Axis::Row,
            Direction::North | Direction::South => Axis::Column,
            Direction::SouthEast | Direction::NorthWest => Axis::Diagonal,
            Direction::NorthEast | Direction::SouthWest => Axis::AntiDiagonal,
        }
    }
}
