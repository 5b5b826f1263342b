// Dashboard metric/chart repository
pub mod dashboard_repository;

pub use dashboard_repository::*;
