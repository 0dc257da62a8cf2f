pub mod activity;
pub mod catalog;
pub mod storage;
pub mod time;
pub mod trip;
mod utils;

#[cfg(test)]
pub(crate) mod test_utils;
