//! Connectivity analysis and terminal-state detection.
//!
//! A color has won when all of its pieces form one group, where two pieces
//! belong to the same group if a chain of king-move steps over same-colored
//! pieces joins them.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::board::{BoardError, Color, Grid, Neighborhood, Position};

/// Collects every square reachable from `seed` through king-move adjacency
/// to pieces of the seed's color. The seed is included.
///
/// Fails with `EmptySquare` when `seed` holds no piece.
pub fn reachable_set(grid: &Grid, seed: Position) -> Result<BTreeSet<Position>, BoardError> {
    let color = grid.piece(seed)?;
    let dim = grid.dim();

    let mut visited = BTreeSet::new();
    let mut stack = vec![seed];
    while let Some(pos) = stack.pop() {
        if !visited.insert(pos) {
            continue;
        }
        for next in Neighborhood::around(pos, dim).positions() {
            if !visited.contains(&next) && grid.at(next).holds(color) {
                stack.push(next);
            }
        }
    }
    Ok(visited)
}

/// Returns true when every piece of `color` lies in a single group.
///
/// A color with no pieces left counts as connected.
pub fn is_connected(grid: &Grid, color: Color) -> bool {
    let Some(seed) = grid.first_piece(color) else {
        return true;
    };
    match reachable_set(grid, seed) {
        Ok(group) => group.len() == grid.count(color),
        Err(_) => false,
    }
}

/// Splits the pieces of `color` into their connected groups.
///
/// Groups are listed in row-major order of their first square.
pub fn groups(grid: &Grid, color: Color) -> Vec<BTreeSet<Position>> {
    let mut seen: BTreeSet<Position> = BTreeSet::new();
    let mut out = Vec::new();
    for pos in grid.pieces(color) {
        if seen.contains(&pos) {
            continue;
        }
        if let Ok(group) = reachable_set(grid, pos) {
            seen.extend(group.iter().copied());
            out.push(group);
        }
    }
    out
}

/// How a game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Ongoing,
    Win(Color),
    Draw,
}

impl Outcome {
    pub const fn is_over(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

/// Per-color connectivity of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TerminalState {
    pub black: bool,
    pub white: bool,
}

impl TerminalState {
    pub fn connected(&self, color: Color) -> bool {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    /// Both connected is a draw, one connected is that color's win.
    pub fn outcome(&self) -> Outcome {
        match (self.black, self.white) {
            (true, true) => Outcome::Draw,
            (true, false) => Outcome::Win(Color::Black),
            (false, true) => Outcome::Win(Color::White),
            (false, false) => Outcome::Ongoing,
        }
    }
}

/// Evaluates both colors independently.
pub fn evaluate(grid: &Grid) -> TerminalState {
    TerminalState {
        black: is_connected(grid, Color::Black),
        white: is_connected(grid, Color::White),
    }
}
