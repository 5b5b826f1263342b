// Platform integration repositories
pub mod integration_repository;
pub mod ad_performance_repository;

pub use integration_repository::*;
pub use ad_performance_repository::*;
