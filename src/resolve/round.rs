//! Turn and round sequencing.
//!
//! Black moves first. A round is one move by each color; it completes on
//! White's move, and only then is the board checked for a finished game.
//!
//! Phase flow:
//! - AwaitingBlack -> AwaitingWhite
//! - AwaitingWhite -> AwaitingBlack (round complete)

use thiserror::Error;

use crate::board::Color;

/// Errors raised by turn sequencing.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RoundError {
    #[error("it is {}'s turn, not {}'s", .expected.name(), .got.name())]
    NotYourTurn { expected: Color, got: Color },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundState {
    AwaitingBlack,
    AwaitingWhite,
}

/// What a recorded move did to the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundEvent {
    /// The other color moves next within the same round.
    Continue,
    /// Both colors have moved; terminal evaluation is due.
    RoundComplete,
}

/// Two-state machine recording whose move it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoundTracker {
    state: RoundState,
    rounds: u32,
}

impl RoundTracker {
    pub fn new() -> Self {
        Self::with_turn(Color::Black)
    }

    /// Starts tracking with `color` to move. With White to move the current
    /// round is already half played.
    pub fn with_turn(color: Color) -> Self {
        let state = match color {
            Color::Black => RoundState::AwaitingBlack,
            Color::White => RoundState::AwaitingWhite,
        };
        RoundTracker { state, rounds: 0 }
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn to_move(&self) -> Color {
        match self.state {
            RoundState::AwaitingBlack => Color::Black,
            RoundState::AwaitingWhite => Color::White,
        }
    }

    /// Number of rounds completed so far.
    pub fn rounds_completed(&self) -> u32 {
        self.rounds
    }

    /// Records a move by `color` and advances the turn.
    pub fn record(&mut self, color: Color) -> Result<RoundEvent, RoundError> {
        let expected = self.to_move();
        if color != expected {
            return Err(RoundError::NotYourTurn { expected, got: color });
        }
        match self.state {
            RoundState::AwaitingBlack => {
                self.state = RoundState::AwaitingWhite;
                Ok(RoundEvent::Continue)
            }
            RoundState::AwaitingWhite => {
                self.state = RoundState::AwaitingBlack;
                self.rounds += 1;
                Ok(RoundEvent::RoundComplete)
            }
        }
    }
}

impl Default for RoundTracker {
    fn default() -> Self {
        Self::new()
    }
}
