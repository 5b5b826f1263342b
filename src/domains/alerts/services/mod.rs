// Alerts domain services
pub mod evaluators;
pub mod alert_service;
pub mod state;

pub use evaluators::*;
pub use alert_service::*;
pub use state::*;
