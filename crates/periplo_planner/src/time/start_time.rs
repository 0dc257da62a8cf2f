use std::{fmt::Display, str::FromStr};

use jiff::civil::Time;
use thiserror::Error;

pub const MINUTES_PER_DAY: i64 = 24 * 60;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StartTimeError {
    #[error("Invalid time format '{0}', expected HH:MM")]
    Format(String),
    #[error("Hours must be between 00 and 23, got {0}")]
    Hour(u8),
    #[error("Minutes must be between 00 and 59, got {0}")]
    Minute(u8),
    #[error("{0} minutes is outside of a single day")]
    OutOfDay(i64),
}

/// Minute precision wall clock time at which a placement begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StartTime(Time);

impl StartTime {
    pub fn new(hour: u8, minute: u8) -> Result<Self, StartTimeError> {
        if hour > 23 {
            return Err(StartTimeError::Hour(hour));
        }
        if minute > 59 {
            return Err(StartTimeError::Minute(minute));
        }

        let time = Time::new(hour as i8, minute as i8, 0, 0)
            .map_err(|_| StartTimeError::Format(format!("{hour:02}:{minute:02}")))?;
        Ok(StartTime(time))
    }

    pub fn from_minutes(minutes: i64) -> Result<Self, StartTimeError> {
        if !(0..MINUTES_PER_DAY).contains(&minutes) {
            return Err(StartTimeError::OutOfDay(minutes));
        }

        StartTime::new((minutes / 60) as u8, (minutes % 60) as u8)
    }

    pub fn hour(&self) -> u8 {
        self.0.hour() as u8
    }

    pub fn minute(&self) -> u8 {
        self.0.minute() as u8
    }

    /// Minutes elapsed since midnight.
    pub fn minutes(&self) -> i64 {
        i64::from(self.0.hour()) * 60 + i64::from(self.0.minute())
    }
}

impl FromStr for StartTime {
    type Err = StartTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format_error = || StartTimeError::Format(s.to_string());

        let (hours, minutes) = s.split_once(':').ok_or_else(format_error)?;
        if hours.len() != 2 || minutes.len() != 2 {
            return Err(format_error());
        }
        if !hours.bytes().chain(minutes.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(format_error());
        }

        let hour: u8 = hours.parse().map_err(|_| format_error())?;
        let minute: u8 = minutes.parse().map_err(|_| format_error())?;

        StartTime::new(hour, minute)
    }
}

impl Display for StartTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}
