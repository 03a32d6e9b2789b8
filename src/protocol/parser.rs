//! Text protocol command parser.
//!
//! Parses incoming protocol commands from raw text into structured
//! `Command` variants that the engine main loop can dispatch on.

use tracing::warn;

use crate::board::Position;

use super::notation::{parse_move, parse_square};

/// Where a `position` command takes its board from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionSpec {
    /// The standard opening for the configured board size.
    StartPos,
    /// A position in board notation, side to move included.
    Notation(String),
}

/// A parsed driver-to-engine command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Initialize the protocol handshake.
    Loa,

    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Set an engine option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Start a fresh game in the opening position.
    NewGame,

    /// Replace the current game with the given position.
    Position(PositionSpec),

    /// List legal destinations for the piece on a square.
    Moves { square: Position },

    /// Report the four line counts through a square.
    Lines { square: Position },

    /// Play a move for the side to move.
    Play { from: Position, to: Position },

    /// Print the current position in board notation.
    Board,

    /// Print a JSON summary of the game.
    Status,

    /// Terminate the engine process.
    Quit,

    /// A known command whose arguments could not be parsed. The engine
    /// answers with `error <reason>`.
    Invalid(String),
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands yield `Command::Invalid`.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }

    match tokens[0] {
        "loa" => Some(Command::Loa),
        "isready" => Some(Command::IsReady),
        "quit" => Some(Command::Quit),
        "newgame" => Some(Command::NewGame),
        "board" => Some(Command::Board),
        "status" => Some(Command::Status),

        "setoption" => Some(parse_setoption(&tokens)),
        "position" => Some(parse_position(&tokens)),
        "moves" => Some(parse_square_arg(&tokens, |square| Command::Moves { square })),
        "lines" => Some(parse_square_arg(&tokens, |square| Command::Lines { square })),
        "play" => Some(parse_play(&tokens)),

        other => {
            warn!(command = other, "unknown command");
            None
        }
    }
}

/// Logs and wraps the reason a known command was rejected.
fn invalid(command: &str, reason: impl Into<String>) -> Command {
    let reason = reason.into();
    warn!(command, reason = %reason, "malformed command");
    Command::Invalid(reason)
}

/// Parses `setoption name <id> [value <x>]`.
fn parse_setoption(tokens: &[&str]) -> Command {
    const USAGE: &str = "expected 'setoption name <id> [value <x>]'";
    // Minimum: setoption name <id>
    if tokens.len() < 3 || tokens[1] != "name" {
        return invalid(tokens[0], USAGE);
    }

    let value_idx = tokens.iter().position(|&t| t == "value");

    let (name, value) = match value_idx {
        Some(vi) => {
            let name_parts = &tokens[2..vi];
            let value_parts = &tokens[vi + 1..];
            if name_parts.is_empty() {
                return invalid(tokens[0], "setoption name is empty");
            }
            let name = name_parts.join(" ");
            let value = if value_parts.is_empty() {
                None
            } else {
                Some(value_parts.join(" "))
            };
            (name, value)
        }
        None => {
            let name = tokens[2..].join(" ");
            (name, None)
        }
    };

    Command::SetOption { name, value }
}

/// Parses `position startpos` or `position <ranks> <side>`.
fn parse_position(tokens: &[&str]) -> Command {
    match tokens.get(1..) {
        Some(["startpos"]) => Command::Position(PositionSpec::StartPos),
        Some(rest) if !rest.is_empty() => Command::Position(PositionSpec::Notation(rest.join(" "))),
        _ => invalid(tokens[0], "expected 'position startpos|<ranks> <side>'"),
    }
}

/// Parses the single `row,col` argument of `moves` and `lines`.
fn parse_square_arg(tokens: &[&str], build: impl FnOnce(Position) -> Command) -> Command {
    if tokens.len() != 2 {
        return invalid(tokens[0], format!("expected '{} <row,col>'", tokens[0]));
    }
    match parse_square(tokens[1]) {
        Ok(square) => build(square),
        Err(e) => invalid(tokens[0], e.to_string()),
    }
}

/// Parses `play <from>-<to>`.
fn parse_play(tokens: &[&str]) -> Command {
    if tokens.len() != 2 {
        return invalid(tokens[0], "expected 'play <row,col>-<row,col>'");
    }
    match parse_move(tokens[1]) {
        Ok((from, to)) => Command::Play { from, to },
        Err(e) => invalid(tokens[0], e.to_string()),
    }
}
