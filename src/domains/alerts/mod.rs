// Alerts domain module
// 재고/ROAS/현금 런웨이 임계값 점검과 알림 조회
pub mod handlers;
pub mod services;
pub mod models;
pub mod routes;

pub use handlers::*;
pub use services::*;
pub use models::*;
pub use routes::*;
