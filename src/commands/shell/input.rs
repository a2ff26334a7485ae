//! Prompt helpers for the interactive shell
//!
//! Each reader re-prompts until it gets acceptable input. End of input is
//! reported as `UnexpectedEof` so the menu loop can stop cleanly.

use std::io::{self, BufRead, Write};

use roster_core::roster::{MAX_GRADE, MIN_GRADE};

use super::Shell;

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Print `prompt` and read one line without its line ending
    pub(super) fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    pub(super) fn read_int(&mut self, prompt: &str) -> io::Result<i64> {
        loop {
            let line = self.read_line(prompt)?;
            match line.trim().parse() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.out, "Please enter a whole number.")?,
            }
        }
    }

    /// Read a trimmed, non-empty string (ids, names, subjects, file names)
    pub(super) fn read_non_empty(&mut self, prompt: &str) -> io::Result<String> {
        loop {
            let line = self.read_line(prompt)?;
            let value = line.trim();
            if !value.is_empty() {
                return Ok(value.to_string());
            }
            writeln!(self.out, "Input cannot be empty.")?;
        }
    }

    pub(super) fn read_double(&mut self, prompt: &str) -> io::Result<f64> {
        loop {
            let line = self.read_line(prompt)?;
            match line.trim().parse::<f64>() {
                Ok(value) if !value.is_nan() => return Ok(value),
                _ => writeln!(self.out, "Please enter a valid number.")?,
            }
        }
    }

    /// Read a grade, insisting on the 0-100 range
    pub(super) fn read_grade(&mut self) -> io::Result<f64> {
        loop {
            let grade = self.read_double("Grade (0-100): ")?;
            if (MIN_GRADE..=MAX_GRADE).contains(&grade) {
                return Ok(grade);
            }
            writeln!(self.out, "Grade must be between 0 and 100.")?;
        }
    }
}
