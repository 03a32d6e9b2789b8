//! Text notation for squares, moves and positions.
//!
//! Squares are written `row,col` (zero-based, row 0 at the top). Moves are
//! `from-to`, or `fromxto` when the move captured. Positions follow the
//! shape of chess FEN: ranks from row 0 down, joined by `/`, with `b` and
//! `w` for pieces and decimal runs for empty squares, then a space and the
//! side to move.
//!
//! The standard start is [`STARTPOS`].

use thiserror::Error;

use crate::board::{BoardError, Color, Grid, Position};
use crate::game::MoveRecord;

/// The standard 8x8 starting position with Black to move.
pub const STARTPOS: &str = "1bbbbbb1/w6w/w6w/w6w/w6w/w6w/w6w/1bbbbbb1 b";

/// Errors that can occur when parsing notation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("invalid square '{0}', expected 'row,col'")]
    InvalidSquare(String),

    #[error("invalid move '{0}', expected 'row,col-row,col'")]
    InvalidMove(String),

    #[error("expected '<ranks> <side>', got {0} fields")]
    WrongFieldCount(usize),

    #[error("invalid piece character '{0}'")]
    InvalidPiece(char),

    #[error("invalid empty run in rank {0}")]
    InvalidRun(usize),

    #[error("rank {rank} covers {found} squares, expected {expected}")]
    RankLength { rank: usize, expected: usize, found: usize },

    #[error("invalid side to move '{0}'")]
    InvalidSide(String),

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Parses a `row,col` square. Bounds are checked later by the board.
pub fn parse_square(s: &str) -> Result<Position, NotationError> {
    let invalid = || NotationError::InvalidSquare(s.to_string());
    let (row, col) = s.trim().split_once(',').ok_or_else(invalid)?;
    let row = row.trim().parse::<usize>().map_err(|_| invalid())?;
    let col = col.trim().parse::<usize>().map_err(|_| invalid())?;
    Ok(Position::new(row, col))
}

/// Parses `from-to` or `fromxto` into its two squares.
pub fn parse_move(s: &str) -> Result<(Position, Position), NotationError> {
    let s = s.trim();
    let (from, to) = s
        .split_once('-')
        .or_else(|| s.split_once('x'))
        .ok_or_else(|| NotationError::InvalidMove(s.to_string()))?;
    let from = parse_square(from).map_err(|_| NotationError::InvalidMove(s.to_string()))?;
    let to = parse_square(to).map_err(|_| NotationError::InvalidMove(s.to_string()))?;
    Ok((from, to))
}

/// Formats a played move, marking captures with `x`.
pub fn format_move(record: &MoveRecord) -> String {
    let sep = if record.captured { 'x' } else { '-' };
    format!("{}{}{}", record.from, sep, record.to)
}

/// Parses a position string into a board and the side to move.
///
/// The board size is taken from the number of ranks.
pub fn parse_position(s: &str) -> Result<(Grid, Color), NotationError> {
    let fields: Vec<&str> = s.split_whitespace().collect();
    if fields.len() != 2 {
        return Err(NotationError::WrongFieldCount(fields.len()));
    }

    let ranks: Vec<&str> = fields[0].split('/').collect();
    let dim = ranks.len();
    let mut grid = Grid::empty(dim)?;
    for (row, rank) in ranks.iter().enumerate() {
        parse_rank(rank, row, &mut grid)?;
    }

    let side = parse_side(fields[1])?;
    Ok((grid, side))
}

fn parse_rank(rank: &str, row: usize, grid: &mut Grid) -> Result<(), NotationError> {
    let dim = grid.dim();
    let mut col = 0;
    let mut run: usize = 0;
    for c in rank.chars() {
        if let Some(d) = c.to_digit(10) {
            run = run
                .checked_mul(10)
                .and_then(|r| r.checked_add(d as usize))
                .filter(|&r| r > 0 && r <= dim)
                .ok_or(NotationError::InvalidRun(row))?;
            continue;
        }
        col += run;
        run = 0;
        let color = Color::from_notation_char(c).ok_or(NotationError::InvalidPiece(c))?;
        if col >= dim {
            return Err(NotationError::RankLength { rank: row, expected: dim, found: col + 1 });
        }
        grid.place(Position::new(row, col), color)?;
        col += 1;
    }
    col += run;
    if col != dim {
        return Err(NotationError::RankLength { rank: row, expected: dim, found: col });
    }
    Ok(())
}

fn parse_side(s: &str) -> Result<Color, NotationError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => {
            Color::from_notation_char(c).ok_or_else(|| NotationError::InvalidSide(s.to_string()))
        }
        _ => Err(NotationError::InvalidSide(s.to_string())),
    }
}

/// Encodes a board and side to move into canonical position notation.
pub fn encode_position(grid: &Grid, to_move: Color) -> String {
    let dim = grid.dim();
    let mut result = String::with_capacity(dim * (dim + 1) + 2);

    for row in 0..dim {
        if row > 0 {
            result.push('/');
        }
        let mut run: usize = 0;
        for col in 0..dim {
            match grid.at(Position::new(row, col)).color() {
                Some(color) => {
                    if run > 0 {
                        result.push_str(&run.to_string());
                        run = 0;
                    }
                    result.push(color.notation_char());
                }
                None => run += 1,
            }
        }
        if run > 0 {
            result.push_str(&run.to_string());
        }
    }

    result.push(' ');
    result.push(to_move.notation_char());
    result
}
