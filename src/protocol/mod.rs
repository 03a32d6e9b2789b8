//! Text protocol handling.
//!
//! This module implements the notation used for squares, moves and whole
//! positions, and the command parser for the engine's main loop.

pub mod notation;
pub mod parser;

pub use notation::{
    encode_position, format_move, parse_move, parse_position, parse_square, NotationError,
    STARTPOS,
};
pub use parser::{parse_command, Command, PositionSpec};
