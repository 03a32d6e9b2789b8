//! Engine state management.
//!
//! Holds the current game and engine options, and answers protocol
//! commands by writing response lines. Rule violations are reported as
//! `error <message>` lines and leave the game untouched.

use std::collections::HashMap;
use std::io::{self, Write};

use serde::Serialize;
use tracing::{info, warn};

use crate::board::{Color, Grid, Position, DEFAULT_DIM, MAX_DIM, MIN_DIM};
use crate::game::{Game, GameError};
use crate::movegen::all_legal_moves;
use crate::protocol::notation::{encode_position, format_move, parse_position, NotationError};
use crate::protocol::parser::PositionSpec;
use crate::resolve::{groups, Outcome};

/// Option name for the board side length.
pub const BOARD_SIZE_OPTION: &str = "BoardSize";

/// Per-color part of the `status` report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorReport {
    pub pieces: usize,
    pub groups: usize,
    pub connected: bool,
    pub moves: usize,
}

/// JSON body of the `status` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub size: usize,
    pub to_move: Color,
    pub rounds: u32,
    pub outcome: Outcome,
    pub black: ColorReport,
    pub white: ColorReport,
}

/// Holds the mutable state of the engine between commands.
pub struct Engine {
    pub game: Game,
    pub options: HashMap<String, String>,
}

impl Engine {
    /// Creates an engine with a standard game set up.
    pub fn new() -> Self {
        Engine {
            game: Game::standard(),
            options: HashMap::new(),
        }
    }

    /// Starts a fresh game at the configured board size.
    pub fn new_game(&mut self) -> Result<(), GameError> {
        self.game = Game::new(self.board_size())?;
        info!(size = self.game.grid().dim(), "new game");
        Ok(())
    }

    /// Replaces the current game with the given position.
    pub fn set_position(&mut self, spec: &PositionSpec) -> Result<(), NotationError> {
        match spec {
            PositionSpec::StartPos => {
                let grid = Grid::new(self.board_size())?;
                self.game = Game::from_position(grid, Color::Black);
            }
            PositionSpec::Notation(text) => {
                let (grid, to_move) = parse_position(text)?;
                self.game = Game::from_position(grid, to_move);
            }
        }
        Ok(())
    }

    /// Sets an engine option.
    pub fn set_option(&mut self, name: String, value: Option<String>) {
        match value {
            Some(v) => {
                self.options.insert(name, v);
            }
            None => {
                self.options.insert(name, String::new());
            }
        }
    }

    /// Returns the configured board size, or the default when unset or
    /// out of range.
    pub fn board_size(&self) -> usize {
        let Some(raw) = self.options.get(BOARD_SIZE_OPTION) else {
            return DEFAULT_DIM;
        };
        match raw.parse::<usize>() {
            Ok(v) if (MIN_DIM..=MAX_DIM).contains(&v) => v,
            _ => {
                warn!(value = %raw, "ignoring invalid {}", BOARD_SIZE_OPTION);
                DEFAULT_DIM
            }
        }
    }

    /// Handles the handshake: writes id, options, and loaok.
    pub fn handle_loa<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "id name loa")?;
        writeln!(
            out,
            "option name {} type spin default {} min {} max {}",
            BOARD_SIZE_OPTION, DEFAULT_DIM, MIN_DIM, MAX_DIM
        )?;
        writeln!(out, "loaok")?;
        out.flush()
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "readyok")?;
        out.flush()
    }

    /// Lists legal destinations: `destinations <sq> <sq> ...`.
    pub fn handle_moves<W: Write>(&self, square: Position, out: &mut W) -> io::Result<()> {
        match self.game.legal_destinations(square) {
            Ok(dests) => {
                write!(out, "destinations")?;
                for d in dests {
                    write!(out, " {}", d)?;
                }
                writeln!(out)?;
            }
            Err(e) => writeln!(out, "error {}", e)?,
        }
        out.flush()
    }

    /// Reports the four line counts through a square.
    pub fn handle_lines<W: Write>(&self, square: Position, out: &mut W) -> io::Result<()> {
        match self.game.line_counts(square) {
            Ok(c) => writeln!(
                out,
                "lines row {} col {} diag {} anti {}",
                c.row, c.col, c.diagonal, c.anti_diagonal
            )?,
            Err(e) => writeln!(out, "error {}", e)?,
        }
        out.flush()
    }

    /// Plays a move, then reports the game end if the move finished it.
    pub fn handle_play<W: Write>(
        &mut self,
        from: Position,
        to: Position,
        out: &mut W,
    ) -> io::Result<()> {
        match self.game.play(from, to) {
            Ok(record) => {
                writeln!(out, "played {}", format_move(&record))?;
                match self.game.outcome() {
                    Outcome::Ongoing => {}
                    Outcome::Win(color) => {
                        info!(winner = color.name(), "game over");
                        writeln!(out, "gameover {}", color.name())?;
                    }
                    Outcome::Draw => {
                        info!("game over, draw");
                        writeln!(out, "gameover draw")?;
                    }
                }
            }
            Err(e) => {
                warn!(%from, %to, error = %e, "move rejected");
                writeln!(out, "error {}", e)?;
            }
        }
        out.flush()
    }

    /// Writes the current position in board notation.
    pub fn handle_board<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let text = encode_position(self.game.grid(), self.game.to_move());
        writeln!(out, "position {}", text)?;
        out.flush()
    }

    /// Builds the summary behind the `status` response.
    pub fn status(&self) -> StatusReport {
        let grid = self.game.grid();
        let state = self.game.evaluate();
        let report = |color: Color| ColorReport {
            pieces: grid.count(color),
            groups: groups(grid, color).len(),
            connected: state.connected(color),
            moves: all_legal_moves(grid, color).len(),
        };
        StatusReport {
            size: grid.dim(),
            to_move: self.game.to_move(),
            rounds: self.game.rounds_completed(),
            outcome: self.game.outcome(),
            black: report(Color::Black),
            white: report(Color::White),
        }
    }

    /// Writes `status <json>`.
    pub fn handle_status<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let json = serde_json::to_string(&self.status()).map_err(io::Error::from)?;
        writeln!(out, "status {}", json)?;
        out.flush()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
