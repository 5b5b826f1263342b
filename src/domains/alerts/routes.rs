// Alerts domain routes
use axum::{routing::{get, patch}, Router};
use crate::domains::alerts::handlers::alert_handler;
use crate::shared::services::AppState;

/// 알림 라우터 생성 (/api/alerts)
pub fn create_alert_router() -> Router<AppState> {
    Router::new()
        .route("/", get(alert_handler::list_alerts))
        .route("/:id/read", patch(alert_handler::mark_read))
}
