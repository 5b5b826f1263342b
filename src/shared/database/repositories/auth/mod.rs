// Auth repositories
pub mod company_repository;
pub mod user_repository;
pub mod session_repository;

pub use company_repository::*;
pub use user_repository::*;
pub use session_repository::*;
