// Scheduler domain models
pub mod schedule;
pub mod job_status;

pub use schedule::*;
pub use job_status::*;
