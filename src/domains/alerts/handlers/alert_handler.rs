use axum::{
    extract::State,
    Json,
};

use crate::domains::alerts::models::{AlertListQuery, AlertsResponse};
use crate::domains::orders::models::ActionResponse;
use crate::shared::errors::ErrorResponse;
use crate::shared::middleware::{AppPath, AppQuery, AuthenticatedUser};
use crate::shared::services::AppState;

/// 알림 목록
#[utoipa::path(
    get,
    path = "/api/alerts",
    params(AlertListQuery),
    responses(
        (status = 200, description = "Alerts, newest first", body = AlertsResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Alerts",
    security(("BearerAuth" = []))
)]
pub async fn list_alerts(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    AppQuery(query): AppQuery<AlertListQuery>,
) -> Result<Json<AlertsResponse>, ErrorResponse> {
    let response = app_state
        .alert_state
        .alert_service
        .list(user.company_id, query)
        .await?;

    Ok(Json(response))
}

/// 알림 읽음 처리
#[utoipa::path(
    patch,
    path = "/api/alerts/{id}/read",
    params(("id" = i64, Path, description = "Alert ID")),
    responses(
        (status = 200, description = "Alert marked as read", body = ActionResponse),
        (status = 404, description = "Alert not found")
    ),
    tag = "Alerts",
    security(("BearerAuth" = []))
)]
pub async fn mark_read(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    AppPath(alert_id): AppPath<i64>,
) -> Result<Json<ActionResponse>, ErrorResponse> {
    app_state
        .alert_state
        .alert_service
        .mark_read(user.company_id, alert_id)
        .await?;

    Ok(Json(ActionResponse::ok("Alert marked as read")))
}
