// Scheduler domain services
pub mod jobs;
pub mod scheduler;
pub mod state;

pub use jobs::*;
pub use scheduler::*;
pub use state::*;
