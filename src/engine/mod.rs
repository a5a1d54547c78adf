//! The engine puts the board behind a simple line-based text interface: the
//! user types moves as `<from>|<to>` (e.g. `e2|e4`) and sees the board after
//! each of them. An empty line (or the end of input) prints the move log and
//! ends the session.
//!
//! [`Engine::run`] is the "main loop". It is generic over the input and output
//! streams so that it can be driven by tests as well as by stdin/stdout.

use std::io::{BufRead, Write};

use itertools::Itertools;

use crate::chess::board::Board;
use crate::chess::core::Square;
use crate::engine::command::Command;

mod command;

/// Session options, set from the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    /// Only accept legal moves. By default any move that passes the basic
    /// checks of [`Board::move_piece`] is executed.
    pub strict: bool,
    /// Do not print the board after every move.
    pub quiet: bool,
}

/// The Engine connects the board with the user and handles I/O.
pub struct Engine<'a, R: BufRead, W: Write> {
    board: Board,
    settings: Settings,
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> Engine<'a, R, W> {
    /// Creates a new session playing on the given board.
    #[must_use]
    pub fn new(board: Board, settings: Settings, input: &'a mut R, output: &'a mut W) -> Self {
        Self {
            board,
            settings,
            input,
            output,
        }
    }

    /// Reads commands until an empty line or the end of input, then prints the
    /// move log.
    ///
    /// Rejected moves are reported and the session goes on: only I/O errors
    /// stop the loop early.
    pub fn run(&mut self) -> anyhow::Result<()> {
        writeln!(
            self.output,
            "{} {}",
            env!("CARGO_PKG_NAME"),
            crate::engine_version()
        )?;
        writeln!(self.output, "{}", self.board)?;
        loop {
            write!(self.output, "Input move (from|to): ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return self.finish();
            }
            match Command::parse(&line) {
                Command::Move { from, to } => self.handle_move(&from, &to)?,
                Command::Moves { square } => self.handle_moves(&square)?,
                Command::Eval => writeln!(self.output, "Evaluation: {}", self.board.evaluate())?,
                Command::Check => {
                    let turn = self.board.turn();
                    if self.board.is_in_check(turn) {
                        writeln!(self.output, "{turn} is in check")?;
                    } else {
                        writeln!(self.output, "{turn} is not in check")?;
                    }
                },
                Command::Finish => return self.finish(),
                Command::Malformed(input) => {
                    tracing::debug!(%input, "Malformed command");
                    writeln!(self.output, "Wrong move format!")?;
                },
            }
        }
    }

    fn handle_move(&mut self, from: &str, to: &str) -> anyhow::Result<()> {
        let result = if self.settings.strict {
            self.board.make_legal_move(from, to)
        } else {
            self.board.move_piece(from, to)
        };
        match result {
            Ok(captured) => {
                if let (Some(captured), Some(record)) = (captured, self.board.move_log().last()) {
                    writeln!(self.output, "{} captures {}!", record.kind, captured.kind())?;
                }
                if !self.settings.quiet {
                    writeln!(self.output, "{}", self.board)?;
                }
            },
            Err(e) => writeln!(self.output, "{e}")?,
        }
        Ok(())
    }

    /// Lists legal destinations of the piece on the square.
    fn handle_moves(&mut self, square: &str) -> anyhow::Result<()> {
        let square = match Square::try_from(square) {
            Ok(square) => square,
            Err(e) => {
                writeln!(self.output, "{e}")?;
                return Ok(());
            },
        };
        let Some(&piece) = self.board.piece_at(square) else {
            writeln!(self.output, "No piece at {square}")?;
            return Ok(());
        };
        let moves = self.board.legal_moves(&piece);
        writeln!(
            self.output,
            "{}: {}",
            piece,
            moves.iter().sorted().join(" ")
        )?;
        Ok(())
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        writeln!(
            self.output,
            "Moves: {}",
            self.board.move_log().iter().join(" ")
        )?;
        Ok(())
    }
}
