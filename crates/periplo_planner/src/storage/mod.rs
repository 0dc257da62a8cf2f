pub mod activity_codec;
pub mod storage_error;
