//! Line-oriented console used by every interactive step.
//!
//! Generic over reader/writer so sessions can be scripted in tests.

use super::messages;
use crate::errors::AppResult;
use std::fmt;
use std::io::{BufRead, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
    separator: String,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            separator: "-".repeat(40),
        }
    }

    pub fn with_separator(mut self, separator: String) -> Self {
        self.separator = separator;
        self
    }

    /// Print `prompt` and read one line. `None` once input is exhausted.
    pub fn ask(&mut self, prompt: &str) -> AppResult<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// `true` only for a `yes` answer (any case). EOF counts as no.
    pub fn confirm(&mut self, prompt: &str) -> AppResult<bool> {
        Ok(self
            .ask(prompt)?
            .is_some_and(|a| a.eq_ignore_ascii_case("yes")))
    }

    pub fn line<T: fmt::Display>(&mut self, text: T) -> AppResult<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    pub fn separator(&mut self) -> AppResult<()> {
        writeln!(self.output, "{}", self.separator)?;
        Ok(())
    }

    pub fn info<T: fmt::Display>(&mut self, msg: T) -> AppResult<()> {
        self.line(messages::info_line(msg))
    }

    pub fn success<T: fmt::Display>(&mut self, msg: T) -> AppResult<()> {
        self.line(messages::success_line(msg))
    }

    pub fn warning<T: fmt::Display>(&mut self, msg: T) -> AppResult<()> {
        self.line(messages::warning_line(msg))
    }

    pub fn error<T: fmt::Display>(&mut self, msg: T) -> AppResult<()> {
        self.line(messages::error_line(msg))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
