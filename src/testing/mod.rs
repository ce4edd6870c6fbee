pub mod fixtures;
pub mod log_capture;
