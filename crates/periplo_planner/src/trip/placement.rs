use std::ops::Range;

use crate::{activity::shared_activity::SharedActivity, time::start_time::StartTime};

/// An activity scheduled at a start time on one day of the trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    start: StartTime,
    activity: SharedActivity,
}

impl Placement {
    pub fn new(start: StartTime, activity: SharedActivity) -> Self {
        Placement { start, activity }
    }

    pub fn start(&self) -> StartTime {
        self.start
    }

    pub fn activity(&self) -> &SharedActivity {
        &self.activity
    }

    /// Half-open interval in minutes since midnight. The end follows the
    /// activity's current duration and may run past midnight.
    pub fn interval(&self) -> Range<i64> {
        let start = self.start.minutes();
        start..start + self.activity.borrow().duration_minutes()
    }

    /// Touching intervals are compatible.
    pub fn is_compatible_with(&self, other: &Range<i64>) -> bool {
        let interval = self.interval();
        interval.end <= other.start || other.end <= interval.start
    }
}
