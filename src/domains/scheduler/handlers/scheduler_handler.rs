use axum::{
    extract::State,
    Json,
};

use crate::domains::orders::models::ActionResponse;
use crate::domains::scheduler::models::{JobRunReport, SchedulerStatus};
use crate::domains::scheduler::services::ALERT_SWEEP_JOB;
use crate::shared::errors::ErrorResponse;
use crate::shared::middleware::{AppPath, AuthenticatedUser};
use crate::shared::services::AppState;

/// 스케줄러 현황
#[utoipa::path(
    get,
    path = "/api/scheduler/status",
    responses(
        (status = 200, description = "Scheduler and job status", body = SchedulerStatus)
    ),
    tag = "Scheduler",
    security(("BearerAuth" = []))
)]
pub async fn get_status(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
) -> Json<SchedulerStatus> {
    Json(app_state.scheduler_state.scheduler.status())
}

/// 알림 점검 즉시 실행
#[utoipa::path(
    post,
    path = "/api/scheduler/trigger-alerts",
    responses(
        (status = 200, description = "Alert sweep finished (or skipped while running)", body = JobRunReport)
    ),
    tag = "Scheduler",
    security(("BearerAuth" = []))
)]
pub async fn trigger_alerts(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
) -> Result<Json<JobRunReport>, ErrorResponse> {
    let report = app_state.scheduler_state.scheduler.run_job(ALERT_SWEEP_JOB).await?;
    Ok(Json(report))
}

/// 작업 수동 실행
#[utoipa::path(
    post,
    path = "/api/scheduler/jobs/{name}/trigger",
    params(("name" = String, Path, description = "order-sync | ad-sync | alert-sweep | daily-report")),
    responses(
        (status = 200, description = "Job finished (or skipped while running)", body = JobRunReport),
        (status = 404, description = "Unknown job")
    ),
    tag = "Scheduler",
    security(("BearerAuth" = []))
)]
pub async fn trigger_job(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
    AppPath(name): AppPath<String>,
) -> Result<Json<JobRunReport>, ErrorResponse> {
    let report = app_state.scheduler_state.scheduler.run_job(&name).await?;
    Ok(Json(report))
}

/// 스케줄러 활성화
#[utoipa::path(
    post,
    path = "/api/scheduler/enable",
    responses((status = 200, description = "Scheduler enabled", body = ActionResponse)),
    tag = "Scheduler",
    security(("BearerAuth" = []))
)]
pub async fn enable(State(app_state): State<AppState>, _user: AuthenticatedUser) -> Json<ActionResponse> {
    app_state.scheduler_state.scheduler.enable();
    Json(ActionResponse::ok("Scheduler enabled"))
}

/// 스케줄러 비활성화 (수동 실행은 계속 가능)
#[utoipa::path(
    post,
    path = "/api/scheduler/disable",
    responses((status = 200, description = "Scheduler disabled", body = ActionResponse)),
    tag = "Scheduler",
    security(("BearerAuth" = []))
)]
pub async fn disable(State(app_state): State<AppState>, _user: AuthenticatedUser) -> Json<ActionResponse> {
    app_state.scheduler_state.scheduler.disable();
    Json(ActionResponse::ok("Scheduler disabled"))
}
