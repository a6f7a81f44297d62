pub mod common;
pub mod config;
pub mod error;
pub mod models;
pub mod storage;

// Re-export commonly used types
pub use error::ScheduleError;
pub use models::{Course, ScheduledItem};
pub use storage::ScheduleStore;
