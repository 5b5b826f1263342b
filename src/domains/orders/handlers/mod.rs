// Orders domain handlers
pub mod order_handler;
pub mod claim_handler;

pub use order_handler::*;
pub use claim_handler::*;
