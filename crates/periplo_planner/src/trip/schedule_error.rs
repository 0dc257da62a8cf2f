use thiserror::Error;

use crate::time::start_time::StartTime;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Day {day} does not exist, the trip has {num_days} days")]
    InvalidDay { day: usize, num_days: usize },
    #[error("Day {day} already holds {capacity} activities")]
    DayFull { day: usize, capacity: usize },
    #[error("Overlaps with '{activity}' planned at {start}")]
    Overlap { activity: String, start: StartTime },
}
