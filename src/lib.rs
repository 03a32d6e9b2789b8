//! Lines of Action rules engine library.
//!
//! Exposes the board representation, move generation, turn and game-end
//! resolution, the game session, and the text protocol for use by
//! integration tests and the binary entry point.

pub mod board;
pub mod engine;
pub mod game;
pub mod movegen;
pub mod protocol;
pub mod resolve;

pub use board::{BoardError, Cell, Color, Grid, Position};
pub use game::{Game, GameError, MoveRecord};
pub use resolve::{Outcome, TerminalState};
