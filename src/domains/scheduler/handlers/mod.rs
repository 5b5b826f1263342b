// Scheduler domain handlers
pub mod scheduler_handler;

pub use scheduler_handler::*;
