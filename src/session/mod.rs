//! Interactive play loop.
//!
//! A `Session` owns a board and drives it from any line-oriented input:
//! print the board, ask for a piece and a destination, attempt the move,
//! repeat until the beam reaches a sink. Bad input is re-prompted and
//! rejected moves are reported; neither ends the session. End of input does.

use std::collections::BTreeSet;
use std::io::{self, BufRead, Write};

use tracing::{info, warn};

use crate::board::{Board, Companion, MoveOutcome, Refusal};
use crate::core::Position;

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    /// The beam reached a sink after `moves` successful moves.
    Solved { moves: usize },
    /// Input ran out before the puzzle was solved.
    InputClosed,
}

/// Interactive driver over a board.
pub struct Session<R, W> {
    board: Board,
    input: R,
    output: W,
    moves: usize,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(board: Board, input: R, output: W) -> Self {
        Self {
            board,
            input,
            output,
            moves: 0,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Successful moves so far.
    #[must_use]
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Play until solved or out of input.
    pub fn run(&mut self) -> io::Result<SessionEnd> {
        while !self.board.check_puzzle_completion() {
            self.board.print_board(&mut self.output)?;

            let Some(name) = self.prompt_piece()? else {
                return Ok(SessionEnd::InputClosed);
            };
            let Some(position) = self.prompt_position()? else {
                return Ok(SessionEnd::InputClosed);
            };
            self.attempt(&name, position)?;
        }

        self.board.print_board(&mut self.output)?;
        writeln!(self.output, "You win!")?;
        info!(moves = self.moves, "puzzle solved");
        Ok(SessionEnd::Solved { moves: self.moves })
    }

    fn attempt(&mut self, name: &str, position: Position) -> io::Result<()> {
        match self.board.player_move(name, position) {
            Ok(MoveOutcome::Moved { companion }) => {
                self.moves += 1;
                if companion == Companion::Stayed {
                    writeln!(self.output, "The computer piece could not follow.")?;
                }
            }
            Ok(MoveOutcome::Refused(Refusal::Occupied)) => {
                writeln!(self.output, "Cannot move {name} to {position}: the cell is occupied.")?;
            }
            Ok(MoveOutcome::Refused(Refusal::OffBoard)) => {
                writeln!(self.output, "Cannot move {name} to {position}: off the board.")?;
            }
            Err(e) => {
                warn!(error = %e, "invalid move request");
                writeln!(self.output, "Invalid move: {e}")?;
            }
        }
        Ok(())
    }

    fn prompt_piece(&mut self) -> io::Result<Option<String>> {
        let names: BTreeSet<String> = self.board.player_piece_names();
        loop {
            writeln!(self.output, "Available pieces to move:")?;
            for name in &names {
                writeln!(self.output, "{name}")?;
            }
            let Some(answer) = self.ask("Input: ")? else {
                return Ok(None);
            };
            if names.contains(&answer) {
                return Ok(Some(answer));
            }
            writeln!(self.output, "Piece {answer} not available.")?;
        }
    }

    fn prompt_position(&mut self) -> io::Result<Option<Position>> {
        let size = self.board.size();
        loop {
            let Some(row) = self.ask_number("Enter new row: ")? else {
                return Ok(None);
            };
            let Some(col) = self.ask_number("Enter new column: ")? else {
                return Ok(None);
            };
            match (u32::try_from(row), u32::try_from(col)) {
                (Ok(row), Ok(col)) if row < size && col < size => return Ok(Some(Position::new(row, col))),
                _ => writeln!(self.output, "({row},{col}) is not on the board.")?,
            }
        }
    }

    /// Ask until the answer is an integer.
    fn ask_number(&mut self, prompt: &str) -> io::Result<Option<i64>> {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };
            match answer.parse() {
                Ok(n) => return Ok(Some(n)),
                Err(_) => writeln!(self.output, "{answer:?} is not a number.")?,
            }
        }
    }

    /// Prompt and read one trimmed line; `None` at end of input.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
