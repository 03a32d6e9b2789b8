//! A game in progress.
//!
//! Ties the board to turn sequencing: moves are only accepted from the
//! side to move and only along legal lines, the terminal state is checked
//! after every completed round, and the first finished outcome is kept.

use thiserror::Error;
use tracing::{debug, instrument};

use crate::board::{BoardError, Color, Grid, Position};
use crate::movegen::{self, LineCounts};
use crate::resolve::{self, Outcome, RoundError, RoundEvent, RoundTracker, TerminalState};

/// Errors raised when driving a game.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error(transparent)]
    Round(#[from] RoundError),

    #[error("{from} cannot move to {to}")]
    IllegalMove { from: Position, to: Position },

    #[error("the game is already over")]
    GameOver,
}

/// One executed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveRecord {
    pub from: Position,
    pub to: Position,
    pub color: Color,
    /// True when the move landed on an opposing piece.
    pub captured: bool,
}

/// A single game: board, turn state, history and outcome.
#[derive(Debug, Clone)]
pub struct Game {
    grid: Grid,
    rounds: RoundTracker,
    history: Vec<MoveRecord>,
    outcome: Outcome,
}

impl Game {
    /// Starts a game on a board of side `dim`.
    pub fn new(dim: usize) -> Result<Self, GameError> {
        Ok(Self::from_position(Grid::new(dim)?, Color::Black))
    }

    /// Starts a game on the standard 8x8 board.
    pub fn standard() -> Self {
        Self::from_position(Grid::standard(), Color::Black)
    }

    /// Continues from an arbitrary position with `to_move` on turn.
    pub fn from_position(grid: Grid, to_move: Color) -> Self {
        Game {
            grid,
            rounds: RoundTracker::with_turn(to_move),
            history: Vec::new(),
            outcome: Outcome::Ongoing,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn to_move(&self) -> Color {
        self.rounds.to_move()
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn rounds_completed(&self) -> u32 {
        self.rounds.rounds_completed()
    }

    pub fn count(&self, color: Color) -> usize {
        self.grid.count(color)
    }

    /// Legal destinations for the piece at `pos`, regardless of whose turn
    /// it is.
    pub fn legal_destinations(&self, pos: Position) -> Result<Vec<Position>, GameError> {
        Ok(movegen::legal_destinations(&self.grid, pos)?)
    }

    pub fn line_counts(&self, pos: Position) -> Result<LineCounts, GameError> {
        Ok(movegen::line_counts(&self.grid, pos)?)
    }

    /// Connectivity of both colors on the current board.
    pub fn evaluate(&self) -> TerminalState {
        resolve::evaluate(&self.grid)
    }

    /// Plays `from` -> `to` for the side to move.
    ///
    /// On the move that completes a round both colors are evaluated; a
    /// finished outcome ends the game and later moves fail with `GameOver`.
    #[instrument(skip(self), fields(to_move = ?self.to_move()))]
    pub fn play(&mut self, from: Position, to: Position) -> Result<MoveRecord, GameError> {
        if self.outcome.is_over() {
            return Err(GameError::GameOver);
        }
        self.grid.check(to)?;
        let color = self.grid.piece(from)?;
        let expected = self.to_move();
        if color != expected {
            return Err(RoundError::NotYourTurn { expected, got: color }.into());
        }
        if !movegen::legal_destinations(&self.grid, from)?.contains(&to) {
            return Err(GameError::IllegalMove { from, to });
        }

        let captured = self.grid.move_piece(from, to)?.is_some();
        let record = MoveRecord { from, to, color, captured };
        self.history.push(record);
        debug!(%from, %to, captured, "move played");

        if self.rounds.record(color)? == RoundEvent::RoundComplete {
            let state = self.evaluate();
            self.outcome = state.outcome();
            debug!(
                round = self.rounds.rounds_completed(),
                black = state.black,
                white = state.white,
                outcome = ?self.outcome,
                "round complete"
            );
        }
        Ok(record)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::standard()
    }
}
