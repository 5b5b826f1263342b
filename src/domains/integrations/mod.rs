// Integrations domain module
// 외부 플랫폼(광고, 마켓플레이스, 택배사) 연동
pub mod models;
pub mod ads;
pub mod marketplace;
pub mod tracking;
pub mod services;
pub mod signing;
pub mod wire;

pub use models::*;
pub use ads::*;
pub use marketplace::*;
pub use tracking::*;
pub use services::*;
