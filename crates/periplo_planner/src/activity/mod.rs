pub mod activity;
pub mod activity_error;
pub mod activity_limits;
pub mod price;
pub mod shared_activity;
