use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to read activities file {}", path.display())]
    ReadActivities {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write activities file {}", path.display())]
    WriteActivities {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write itinerary file {}", path.display())]
    WriteItinerary {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
