// Alert sweep repositories
pub mod alert_repository;
pub mod inventory_repository;
pub mod cash_flow_repository;

pub use alert_repository::*;
pub use inventory_repository::*;
pub use cash_flow_repository::*;
