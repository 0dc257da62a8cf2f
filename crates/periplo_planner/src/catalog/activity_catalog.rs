use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use tracing::{debug, info};

use crate::{
    activity::{activity_limits::ActivityLimits, shared_activity::SharedActivity},
    catalog::catalog_error::CatalogError,
    storage::{activity_codec::ActivityDecoder, storage_error::StorageError},
    utils::bounded_list::BoundedList,
};

/// Bounded, ordered collection of every known activity.
#[derive(Debug, Clone)]
pub struct ActivityCatalog {
    activities: BoundedList<SharedActivity>,
}

impl ActivityCatalog {
    pub fn new(capacity: usize) -> Self {
        ActivityCatalog {
            activities: BoundedList::new(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.activities.capacity()
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.activities.len() == self.activities.capacity()
    }

    pub fn get(&self, index: usize) -> Option<&SharedActivity> {
        self.activities.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SharedActivity> {
        self.activities.iter()
    }

    /// Appends an activity. Uniqueness is not checked.
    pub fn add(&mut self, activity: impl Into<Option<SharedActivity>>) -> Result<(), CatalogError> {
        let activity = activity.into().ok_or(CatalogError::MissingActivity)?;
        let capacity = self.activities.capacity();

        self.activities
            .push(activity)
            .map_err(|_| CatalogError::Full { capacity })
    }

    /// Removes the first entry that is the very same activity as `activity`.
    pub fn remove(&mut self, activity: &SharedActivity) -> bool {
        match self.activities.position(|entry| entry.ptr_eq(activity)) {
            Some(index) => {
                let removed = self.activities.remove(index);
                debug!(activity = removed.borrow().name(), "Removed from catalog");
                true
            }
            None => false,
        }
    }

    /// Case-insensitive substring match on activity names. A blank query
    /// matches nothing.
    pub fn search_by_name(&self, query: &str) -> Vec<SharedActivity> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        self.activities
            .iter()
            .filter(|activity| activity.borrow().name().to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Writes every activity block, in catalog order, each followed by an
    /// empty line.
    pub fn write_activities<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for activity in &self.activities {
            writeln!(writer, "{}", activity.borrow().render_compact())?;
        }

        Ok(())
    }

    /// Appends decoded activities until the input ends or the catalog fills
    /// up. Returns how many were appended.
    pub fn read_activities<R: BufRead>(
        &mut self,
        reader: R,
        limits: ActivityLimits,
    ) -> io::Result<usize> {
        let mut added = 0;

        for activity in ActivityDecoder::new(reader, limits) {
            if let Err(error) = self.add(SharedActivity::new(activity?)) {
                debug!("{}, ignoring the remaining activities", error);
                break;
            }
            added += 1;
        }

        Ok(added)
    }

    pub fn save_all<P: AsRef<Path>>(&self, path: P) -> Result<(), StorageError> {
        let path = path.as_ref();
        let to_error = |source| StorageError::WriteActivities {
            path: path.to_path_buf(),
            source,
        };

        let mut writer = BufWriter::new(File::create(path).map_err(to_error)?);
        self.write_activities(&mut writer).map_err(to_error)?;
        writer.flush().map_err(to_error)?;

        info!("Saved {} activities to {}", self.len(), path.display());
        Ok(())
    }

    pub fn load_all<P: AsRef<Path>>(
        &mut self,
        path: P,
        limits: ActivityLimits,
    ) -> Result<usize, StorageError> {
        let path = path.as_ref();
        let to_error = |source| StorageError::ReadActivities {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(to_error)?;
        let added = self
            .read_activities(BufReader::new(file), limits)
            .map_err(to_error)?;

        info!("Loaded {} activities from {}", added, path.display());
        Ok(added)
    }
}
