use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("No activity was given")]
    MissingActivity,
    #[error("The catalog is full ({capacity} activities max)")]
    Full { capacity: usize },
}
