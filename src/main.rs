//! loa -- a Lines of Action rules engine driven over a text protocol.
//!
//! This binary reads commands from stdin and writes responses to stdout.
//! Diagnostics go to stderr through `tracing`; set `RUST_LOG` to see them.

use std::io::{self, BufRead, Write};

use tracing::error;
use tracing_subscriber::EnvFilter;

use loa::engine::Engine;
use loa::protocol::parser::{parse_command, Command};

/// Runs the main protocol loop, reading commands from stdin and writing
/// responses to stdout.
fn main() -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::Loa => engine.handle_loa(&mut out)?,
            Command::IsReady => engine.handle_isready(&mut out)?,
            Command::SetOption { name, value } => engine.set_option(name, value),
            Command::NewGame => {
                if let Err(e) = engine.new_game() {
                    error!(error = %e, "newgame failed");
                    writeln!(out, "error {}", e)?;
                    out.flush()?;
                }
            }
            Command::Position(spec) => {
                if let Err(e) = engine.set_position(&spec) {
                    error!(error = %e, "position rejected");
                    writeln!(out, "error {}", e)?;
                    out.flush()?;
                }
            }
            Command::Moves { square } => engine.handle_moves(square, &mut out)?,
            Command::Lines { square } => engine.handle_lines(square, &mut out)?,
            Command::Play { from, to } => engine.handle_play(from, to, &mut out)?,
            Command::Board => engine.handle_board(&mut out)?,
            Command::Status => engine.handle_status(&mut out)?,
            Command::Invalid(reason) => {
                writeln!(out, "error {}", reason)?;
                out.flush()?;
            }
            Command::Quit => break,
        }
    }

    out.flush()
}
