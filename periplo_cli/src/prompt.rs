use std::{
    fmt::Display,
    io::{self, BufRead, Write},
    ops::RangeInclusive,
    str::FromStr,
};

use periplo_planner::time::start_time::StartTime;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("End of input")]
    EndOfInput,
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type PromptResult<T> = Result<T, PromptError>;

/// Line oriented question/answer exchange over any reader and writer.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompt { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, text: impl Display) -> PromptResult<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Next input line without its line terminator.
    pub fn read_line(&mut self) -> PromptResult<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::EndOfInput);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    pub fn ask(&mut self, message: &str) -> PromptResult<String> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Asks until the answer parses and lies within `range`.
    pub fn ask_number<T>(&mut self, message: &str, range: RangeInclusive<T>) -> PromptResult<T>
    where
        T: FromStr + PartialOrd + Display,
    {
        loop {
            let answer = self.ask(message)?;
            match answer.trim().parse::<T>() {
                Ok(value) if range.contains(&value) => return Ok(value),
                Ok(_) => self.say(format!(
                    "The number must be between {} and {}.",
                    range.start(),
                    range.end()
                ))?,
                Err(_) => self.say("Please enter a valid number.")?,
            }
        }
    }

    /// Asks until the answer is a non-negative decimal number.
    pub fn ask_amount(&mut self, message: &str) -> PromptResult<f64> {
        loop {
            let answer = self.ask(message)?;
            match answer.trim().parse::<f64>() {
                Ok(value) if value.is_finite() && value >= 0.0 => return Ok(value),
                Ok(_) => self.say("The amount cannot be negative.")?,
                Err(_) => self.say("Please enter a valid number.")?,
            }
        }
    }

    /// Asks until the answer is a valid `HH:MM` time.
    pub fn ask_start_time(&mut self, message: &str) -> PromptResult<StartTime> {
        loop {
            let answer = self.ask(message)?;
            match answer.trim().parse::<StartTime>() {
                Ok(start) => return Ok(start),
                Err(error) => self.say(format!("{error}. Use HH:MM, for example 09:30."))?,
            }
        }
    }
}
