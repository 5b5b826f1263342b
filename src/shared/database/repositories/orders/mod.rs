// Order management repositories
pub mod order_repository;
pub mod claim_repository;
pub mod shipping_company_repository;

pub use order_repository::*;
pub use claim_repository::*;
pub use shipping_company_repository::*;
