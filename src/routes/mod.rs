// Routes module: 라우팅 설정
// 역할: 모든 도메인의 라우터를 조합
// Routes module: combines all domain routers

pub mod api_doc;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use crate::shared::services::AppState;

// 각 도메인의 routes import
use crate::domains::auth::routes::create_auth_router;
use crate::domains::orders::routes::create_order_router;
use crate::domains::alerts::routes::create_alert_router;
use crate::domains::dashboard::routes::{create_charts_router, create_metrics_router};
use crate::domains::scheduler::routes::create_scheduler_router;

pub use api_doc::ApiDoc;

/// Create main router (combines all domain routers)
/// 메인 라우터 생성 (모든 도메인 라우터 조합)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .nest("/api/auth", create_auth_router())
        .nest("/api/order-management", create_order_router())
        .nest("/api/alerts", create_alert_router())
        .nest("/api/metrics", create_metrics_router())
        .nest("/api/charts", create_charts_router())
        .nest("/api/scheduler", create_scheduler_router())
}

/// 헬스 체크 (인증 없음)
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
