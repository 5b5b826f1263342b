// Shared errors
pub mod app_error;
pub mod auth_error;
pub mod integration_error;

pub use app_error::*;
pub use auth_error::*;
pub use integration_error::*;
