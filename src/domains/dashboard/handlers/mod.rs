// Dashboard domain handlers
pub mod dashboard_handler;

pub use dashboard_handler::*;
