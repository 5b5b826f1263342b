// Scheduler domain routes
use axum::{routing::{get, post}, Router};
use crate::domains::scheduler::handlers::scheduler_handler;
use crate::shared::services::AppState;

/// 스케줄러 라우터 생성 (/api/scheduler)
pub fn create_scheduler_router() -> Router<AppState> {
    Router::new()
        .route("/status", get(scheduler_handler::get_status))
        .route("/trigger-alerts", post(scheduler_handler::trigger_alerts))
        .route("/jobs/:name/trigger", post(scheduler_handler::trigger_job))
        .route("/enable", post(scheduler_handler::enable))
        .route("/disable", post(scheduler_handler::disable))
}
