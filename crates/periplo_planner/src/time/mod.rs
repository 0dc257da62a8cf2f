pub mod duration_format;
pub mod start_time;
