//! Human input over text streams.
//!
//! Input and output are generic so the same prompt drives a terminal
//! (`stdin()` / `stdout()`) and in-memory buffers in tests.

use std::io::{self, BufRead, Write};

use super::MoveStrategy;
use crate::error::StrategyError;
use crate::grid::{Grid, Move, Placement};
use crate::render::join_or;

/// Something that yields one line of text per call.
///
/// `io::Stdin` locks per line, so several prompts can share the terminal.
pub trait LineSource {
    /// Append the next line to `buf`, returning the bytes read (0 at end of
    /// input).
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl LineSource for io::Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        io::Stdin::read_line(self, buf)
    }
}

impl<T: AsRef<[u8]>> LineSource for io::Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

impl<R: io::Read> LineSource for io::BufReader<R> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Ask until `parse` accepts a line.
///
/// Each rejected line prints `retry` and repeats the prompt. End of input
/// is `StrategyError::InputClosed`.
pub fn ask<R, W, T>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    retry: &str,
    mut parse: impl FnMut(&str) -> Option<T>,
) -> Result<T, StrategyError>
where
    R: LineSource + ?Sized,
    W: Write + ?Sized,
{
    let mut line = String::new();
    loop {
        writeln!(output, "{prompt}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(StrategyError::InputClosed);
        }
        if let Some(value) = parse(line.trim()) {
            return Ok(value);
        }
        writeln!(output, "{retry}")?;
    }
}

/// A person choosing moves by number.
///
/// Columns are numbered 1 to `cols`; free cells 1 to `rows * cols`,
/// row-major from the top-left.
pub struct HumanPrompt<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: LineSource, W: Write> HumanPrompt<R, W> {
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// Recover the output stream (used by tests to inspect prompts).
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: LineSource, W: Write> MoveStrategy for HumanPrompt<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, grid: &Grid, legal: &[Move]) -> Result<Move, StrategyError> {
        if legal.is_empty() {
            return Err(StrategyError::NoLegalMoves);
        }
        let shape = *grid.shape();
        let numbers: Vec<usize> = legal.iter().filter_map(|mv| shape.number_of(*mv)).collect();
        let noun = match shape.placement() {
            Placement::Drop => "column",
            Placement::Free => "square",
        };
        let prompt = format!("{}, choose a {noun} ({}):", self.name, join_or(&numbers));

        ask(
            &mut self.input,
            &mut self.output,
            &prompt,
            "Sorry, that's not a valid choice.",
            |answer| {
                let mv = shape.move_for_number(answer.parse().ok()?)?;
                legal.contains(&mv).then_some(mv)
            },
        )
    }
}
