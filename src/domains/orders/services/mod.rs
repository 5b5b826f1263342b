// Orders domain services
pub mod order_service;
pub mod claim_service;
pub mod stats;
pub mod state;

pub use order_service::*;
pub use claim_service::*;
pub use stats::*;
pub use state::*;
