//! Line-oriented console I/O
//!
//! Generic over the reader and writers so the game can run against stdin/
//! stdout/stderr or in-memory buffers.

use std::io::{self, BufRead, BufReader, Stderr, Stdin, Stdout, Write};

use crate::error::InputError;
use crate::menu::MenuOption;

/// Console bound to one input and two outputs
pub struct Console<R, W, E> {
    input: R,
    output: W,
    errors: E,
}

impl Console<BufReader<Stdin>, Stdout, Stderr> {
    /// Console on the process standard streams
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout(), io::stderr())
    }
}

impl<R: BufRead, W: Write, E: Write> Console<R, W, E> {
    pub fn new(input: R, output: W, errors: E) -> Self {
        Self {
            input,
            output,
            errors,
        }
    }

    /// Read one line without its line ending. `Closed` at end of input.
    pub fn read_line(&mut self) -> Result<String, InputError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::Closed);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Read one line as an integer
    pub fn read_int(&mut self) -> Result<i64, InputError> {
        self.read_line()?
            .trim()
            .parse()
            .map_err(|_| InputError::Parse)
    }

    /// Read menu choices until a valid one is entered
    pub fn choose<T: MenuOption>(&mut self) -> Result<T, InputError> {
        loop {
            match self.read_int().and_then(T::from_index) {
                Ok(option) => return Ok(option),
                Err(InputError::Parse) => {
                    self.print_line("Inserted value is incorrect. Try again and insert integer: ")?
                }
                Err(e @ InputError::NoSuchOption(_)) => {
                    self.print_line(&format!("{}, choose again: ", e))?
                }
                Err(e) => return Err(e),
            }
        }
    }

    pub fn print_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    /// Print without a newline, flushed so prompts show before input
    pub fn print_text(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()
    }

    pub fn print_error_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.errors, "{}", line)
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn errors(&self) -> &E {
        &self.errors
    }
}
