// Dashboard domain services
pub mod dashboard_service;
pub mod state;

pub use dashboard_service::*;
pub use state::*;
