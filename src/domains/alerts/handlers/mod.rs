// Alerts domain handlers
pub mod alert_handler;

pub use alert_handler::*;
