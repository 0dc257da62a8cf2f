pub mod activity_catalog;
pub mod catalog_error;
