//! The square grid of cells.
//!
//! Holds every square of a Lines of Action board in a flat row-major
//! vector. The grid knows nothing about move legality: `move_piece` is the
//! raw state transition and callers validate moves through `movegen` first.

use std::fmt;

use thiserror::Error;

use super::piece::{Cell, Color};
use super::position::Position;

/// Side length of the standard board.
pub const DEFAULT_DIM: usize = 8;

/// Smallest supported side length.
pub const MIN_DIM: usize = 4;

/// Largest supported side length.
pub const MAX_DIM: usize = 16;

/// Errors raised by board-level queries and mutations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("square {0} is empty")]
    EmptySquare(Position),

    #[error("square {pos} is outside the {dim}x{dim} board")]
    OutOfBounds { pos: Position, dim: usize },

    #[error(
        "board size {0} is not supported (expected {min}..={max})",
        min = MIN_DIM,
        max = MAX_DIM
    )]
    InvalidDimension(usize),
}

/// An N x N board of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    dim: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a board of side `dim` in the starting layout.
    pub fn new(dim: usize) -> Result<Self, BoardError> {
        let mut grid = Self::empty(dim)?;
        grid.place_initial();
        Ok(grid)
    }

    /// Creates the standard 8x8 board in the starting layout.
    pub fn standard() -> Self {
        let mut grid = Grid {
            dim: DEFAULT_DIM,
            cells: vec![Cell::Empty; DEFAULT_DIM * DEFAULT_DIM],
        };
        grid.place_initial();
        grid
    }

    /// Creates a board of side `dim` with no pieces on it.
    pub fn empty(dim: usize) -> Result<Self, BoardError> {
        if !(MIN_DIM..=MAX_DIM).contains(&dim) {
            return Err(BoardError::InvalidDimension(dim));
        }
        Ok(Grid {
            dim,
            cells: vec![Cell::Empty; dim * dim],
        })
    }

    /// Resets the board to the starting layout.
    ///
    /// Black fills the inner squares of the top and bottom rows, White the
    /// inner squares of the left and right columns. Corners stay empty.
    pub fn place_initial(&mut self) {
        self.cells.fill(Cell::Empty);
        let last = self.dim - 1;
        for i in 1..last {
            let edges = [
                (Position::new(0, i), Cell::Black),
                (Position::new(last, i), Cell::Black),
                (Position::new(i, 0), Cell::White),
                (Position::new(i, last), Cell::White),
            ];
            for (pos, cell) in edges {
                let idx = self.index(pos);
                self.cells[idx] = cell;
            }
        }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Fails with `OutOfBounds` if `pos` is not on this board.
    pub fn check(&self, pos: Position) -> Result<(), BoardError> {
        if pos.is_on_board(self.dim) {
            Ok(())
        } else {
            Err(BoardError::OutOfBounds { pos, dim: self.dim })
        }
    }

    /// Returns the contents of `pos`.
    pub fn cell(&self, pos: Position) -> Result<Cell, BoardError> {
        self.check(pos)?;
        Ok(self.at(pos))
    }

    /// Returns the color of the piece on `pos`, failing on an empty square.
    pub fn piece(&self, pos: Position) -> Result<Color, BoardError> {
        self.cell(pos)?
            .color()
            .ok_or(BoardError::EmptySquare(pos))
    }

    /// Reads a square already known to be on the board.
    pub(crate) fn at(&self, pos: Position) -> Cell {
        self.cells[self.index(pos)]
    }

    /// Moves the piece on `from` to `to`, overwriting whatever was there.
    ///
    /// Returns the color of the captured piece when `to` was occupied.
    /// Legality is not checked here.
    pub fn move_piece(
        &mut self,
        from: Position,
        to: Position,
    ) -> Result<Option<Color>, BoardError> {
        let color = self.piece(from)?;
        let captured = self.cell(to)?.color().filter(|_| from != to);
        let from_idx = self.index(from);
        let to_idx = self.index(to);
        self.cells[from_idx] = Cell::Empty;
        self.cells[to_idx] = Cell::from(color);
        Ok(captured)
    }

    /// Puts a piece of `color` on `pos`, replacing its previous contents.
    /// Used to build positions before play begins.
    pub fn place(&mut self, pos: Position, color: Color) -> Result<(), BoardError> {
        self.check(pos)?;
        let idx = self.index(pos);
        self.cells[idx] = Cell::from(color);
        Ok(())
    }

    /// Clears `pos`, returning what it held.
    pub fn remove(&mut self, pos: Position) -> Result<Cell, BoardError> {
        self.check(pos)?;
        let idx = self.index(pos);
        Ok(std::mem::take(&mut self.cells[idx]))
    }

    /// Number of pieces of `color` on the board.
    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|c| c.holds(color)).count()
    }

    /// Every square of the board in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let dim = self.dim;
        (0..dim).flat_map(move |row| (0..dim).map(move |col| Position::new(row, col)))
    }

    /// Squares holding `color`, in row-major order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = Position> + '_ {
        self.positions().filter(move |&p| self.at(p).holds(color))
    }

    /// The row-major first square holding `color`.
    pub fn first_piece(&self, color: Color) -> Option<Position> {
        self.pieces(color).next()
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.dim + pos.col
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.dim {
            for col in 0..self.dim {
                let c = match self.at(Position::new(row, col)).color() {
                    Some(color) => color.notation_char(),
                    None => '.',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
