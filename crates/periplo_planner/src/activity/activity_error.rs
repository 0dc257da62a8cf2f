use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActivityError {
    #[error("Activity name cannot be blank")]
    BlankName,
    #[error("Value cannot be blank")]
    InvalidValue,
    #[error("Price must be a non-negative amount")]
    InvalidPrice,
    #[error("Duration must be at least one minute")]
    InvalidDuration,
    #[error("No more resources can be added ({capacity} max)")]
    ResourcesFull { capacity: usize },
    #[error("No more comments can be added ({capacity} max)")]
    CommentsFull { capacity: usize },
}
