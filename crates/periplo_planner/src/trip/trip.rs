use std::{
    fmt::Display,
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use tracing::{debug, info};

use crate::{
    activity::{price::Price, shared_activity::SharedActivity},
    storage::storage_error::StorageError,
    time::{duration_format::format_duration, start_time::StartTime},
    trip::{placement::Placement, schedule_error::ScheduleError},
    utils::bounded_list::BoundedList,
};

const SEPARATOR: &str = "-------------------------------------------------------------------";

/// Fixed number of days, each holding a bounded, chronologically ordered list
/// of non-overlapping placements.
#[derive(Debug, Clone)]
pub struct Trip {
    days: Vec<BoundedList<Placement>>,
    max_activities_per_day: usize,
}

impl Trip {
    pub fn new(num_days: usize, max_activities_per_day: usize) -> Self {
        Trip {
            days: (0..num_days)
                .map(|_| BoundedList::new(max_activities_per_day))
                .collect(),
            max_activities_per_day,
        }
    }

    pub fn num_days(&self) -> usize {
        self.days.len()
    }

    pub fn max_activities_per_day(&self) -> usize {
        self.max_activities_per_day
    }

    /// Number of placements on `day`, 0 when the day does not exist.
    pub fn day_len(&self, day: usize) -> usize {
        self.days.get(day).map_or(0, BoundedList::len)
    }

    pub fn total_placements(&self) -> usize {
        self.days.iter().map(BoundedList::len).sum()
    }

    pub fn total_price(&self) -> Price {
        self.days
            .iter()
            .flat_map(BoundedList::iter)
            .map(|placement| placement.activity().borrow().price())
            .sum()
    }

    /// Schedules `activity` on `day` (0-based) at `start`.
    ///
    /// Either the placement fits and the day is re-sorted by start time, or an
    /// error is returned and the day is left untouched.
    pub fn place_activity(
        &mut self,
        day: usize,
        activity: &SharedActivity,
        start: StartTime,
    ) -> Result<(), ScheduleError> {
        let num_days = self.days.len();
        let placements = self
            .days
            .get_mut(day)
            .ok_or(ScheduleError::InvalidDay { day, num_days })?;

        let capacity = placements.capacity();
        if placements.is_full() {
            return Err(ScheduleError::DayFull { day, capacity });
        }

        let candidate = Placement::new(start, activity.clone());
        let interval = candidate.interval();
        if let Some(conflict) = placements
            .iter()
            .find(|placement| !placement.is_compatible_with(&interval))
        {
            return Err(ScheduleError::Overlap {
                activity: conflict.activity().name(),
                start: conflict.start(),
            });
        }

        placements
            .push(candidate)
            .map_err(|_| ScheduleError::DayFull { day, capacity })?;
        placements.sort_by_key(|placement| placement.start().minutes());

        debug!(day, start = %start, activity = activity.borrow().name(), "Placed activity");
        Ok(())
    }

    /// Removes the first placement of `day` whose start time reads exactly
    /// `start`.
    pub fn remove_placement(&mut self, day: usize, start: &str) -> bool {
        let Some(placements) = self.days.get_mut(day) else {
            return false;
        };

        match placements.position(|placement| placement.start().to_string() == start) {
            Some(index) => {
                placements.remove(index);
                debug!(day, start, "Removed placement");
                true
            }
            None => false,
        }
    }

    /// Copy of the placements of `day` in chronological order, empty when the
    /// day does not exist.
    pub fn placements_for_day(&self, day: usize) -> Vec<Placement> {
        self.days
            .get(day)
            .map(|placements| placements.as_slice().to_vec())
            .unwrap_or_default()
    }

    pub fn activities_for_day(&self, day: usize) -> Vec<SharedActivity> {
        self.days
            .get(day)
            .map(|placements| {
                placements
                    .iter()
                    .map(|placement| placement.activity().clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn render_itinerary(&self) -> String {
        self.to_string()
    }

    /// One line per day followed by a one-line summary.
    pub fn write_itinerary<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for (index, placements) in self.days.iter().enumerate() {
            write!(writer, "Día {}: ", index + 1)?;

            if placements.is_empty() {
                write!(writer, "---")?;
            } else {
                let entries = placements
                    .iter()
                    .map(|placement| {
                        let activity = placement.activity().borrow();
                        format!(
                            "{} {} (dur {}, {})",
                            placement.start(),
                            activity.name(),
                            format_duration(activity.duration()),
                            activity.price()
                        )
                    })
                    .collect::<Vec<_>>();
                write!(writer, "{}", entries.join("; "))?;
            }

            writeln!(writer)?;
        }

        writeln!(
            writer,
            "Resumen: Días: {}; Actividades: {}; Precio total: {}",
            self.num_days(),
            self.total_placements(),
            self.total_price()
        )
    }

    pub fn save_itinerary<P: AsRef<Path>>(&self, path: P) -> Result<(), StorageError> {
        let path = path.as_ref();
        let to_error = |source| StorageError::WriteItinerary {
            path: path.to_path_buf(),
            source,
        };

        let mut writer = BufWriter::new(File::create(path).map_err(to_error)?);
        self.write_itinerary(&mut writer).map_err(to_error)?;
        writer.flush().map_err(to_error)?;

        info!("Saved itinerary to {}", path.display());
        Ok(())
    }
}

impl Display for Trip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, placements) in self.days.iter().enumerate() {
            writeln!(f, "{SEPARATOR}")?;
            writeln!(f, "Day {}", index + 1)?;
            writeln!(f, "{SEPARATOR}")?;

            if placements.is_empty() {
                writeln!(f, "(no activities)")?;
            }
            for placement in placements {
                writeln!(
                    f,
                    "{} {}",
                    placement.start(),
                    placement.activity().borrow().name()
                )?;
            }

            writeln!(f)?;
        }

        writeln!(f, "{SEPARATOR}")?;
        writeln!(f, "Summary:")?;
        writeln!(f, "- Days: {}", self.num_days())?;
        writeln!(f, "- Activities: {}", self.total_placements())?;
        writeln!(f, "- Price: {}", self.total_price())
    }
}
