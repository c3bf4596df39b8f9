use std::io::{self, BufRead, Write};

use rand::rngs::SmallRng;

use crate::{
    board::Grid,
    common::{BoardError, ShotResult},
    coordinate::Coordinate,
    player::Player,
};

/// Human player reading "row col" pairs from a line-oriented input.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
}

impl CliPlayer<io::StdinLock<'static>, io::Stdout> {
    /// Player bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output stream, mostly for inspecting it in tests.
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Why a line of input could not be read as a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    WrongCount,
    NotNumbers,
}

impl InputError {
    fn hint(self) -> &'static str {
        match self {
            InputError::WrongCount => "Enter 2 coordinates!",
            InputError::NotNumbers => "Enter numbers!",
        }
    }
}

/// Parse a 1-based "row col" pair into a board coordinate.
pub fn parse_coord(line: &str) -> Result<Coordinate, InputError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let [row, col] = parts[..] else {
        return Err(InputError::WrongCount);
    };
    Ok(Coordinate::new(parse_index(row)?, parse_index(col)?))
}

// Any run of digits is accepted; oversized values saturate and are left for
// the board to reject as out of range.
fn parse_index(token: &str) -> Result<i32, InputError> {
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotNumbers);
    }
    let value = token.parse::<u64>().unwrap_or(u64::MAX);
    Ok(i32::try_from(value).unwrap_or(i32::MAX) - 1)
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn name(&self) -> &str {
        "You"
    }

    fn select_target(&mut self, _rng: &mut SmallRng, _enemy: &Grid) -> io::Result<Coordinate> {
        loop {
            writeln!(self.output, "{}", "-".repeat(20))?;
            write!(self.output, "Your move: ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed before the match ended",
                ));
            }
            match parse_coord(&line) {
                Ok(c) => return Ok(c),
                Err(e) => writeln!(self.output, " {}", e.hint())?,
            }
        }
    }

    fn handle_rejected(&mut self, _target: Coordinate, error: BoardError) -> io::Result<()> {
        writeln!(self.output, "{}", error)
    }

    fn handle_shot_result(&mut self, target: Coordinate, result: ShotResult) -> io::Result<()> {
        writeln!(self.output, "{} -> {}", target, result.message())
    }
}
