// Dashboard domain routes
use axum::{routing::{get, put}, Router};
use crate::domains::dashboard::handlers::dashboard_handler;
use crate::shared::services::AppState;

/// 지표 라우터 (/api/metrics)
pub fn create_metrics_router() -> Router<AppState> {
    Router::new()
        .route("/:section", get(dashboard_handler::get_metrics))
        .route("/:section/:metric_name", put(dashboard_handler::upsert_metric))
}

/// 차트 라우터 (/api/charts)
pub fn create_charts_router() -> Router<AppState> {
    Router::new()
        .route("/:section", get(dashboard_handler::get_charts))
        .route("/:section/:chart_id", put(dashboard_handler::upsert_chart))
}
