pub mod placement;
pub mod schedule_error;
pub mod trip;
