// Shared module
pub mod clients;
pub mod config;
pub mod database;
pub mod errors;
pub mod middleware;
pub mod services;
pub mod utils;

pub use clients::*;
pub use config::*;
pub use database::{Database, Stores};
pub use errors::*;
pub use middleware::{AppJson, AppPath, AppQuery, AuthenticatedUser};
pub use services::*;
pub use utils::*;
