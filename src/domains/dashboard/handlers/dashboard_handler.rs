use axum::{
    extract::State,
    Json,
};

use crate::domains::dashboard::models::{
    ChartData, ChartQuery, DashboardMetric, UpsertChartRequest, UpsertMetricRequest,
};
use crate::shared::errors::ErrorResponse;
use crate::shared::middleware::{AppJson, AppPath, AppQuery, AuthenticatedUser};
use crate::shared::services::AppState;

/// 섹션 지표 조회
#[utoipa::path(
    get,
    path = "/api/metrics/{section}",
    params(("section" = String, Path, description = "ecommerce | advertising | cashflow | customer-service | growth")),
    responses(
        (status = 200, description = "Section metrics", body = Vec<DashboardMetric>),
        (status = 400, description = "Unknown section")
    ),
    tag = "Dashboard",
    security(("BearerAuth" = []))
)]
pub async fn get_metrics(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
    AppPath(section): AppPath<String>,
) -> Result<Json<Vec<DashboardMetric>>, ErrorResponse> {
    let metrics = app_state
        .dashboard_state
        .dashboard_service
        .metrics(&section)
        .await?;

    Ok(Json(metrics))
}

/// 섹션 차트 조회
#[utoipa::path(
    get,
    path = "/api/charts/{section}",
    params(
        ("section" = String, Path, description = "Dashboard section"),
        ChartQuery
    ),
    responses(
        (status = 200, description = "Section charts", body = Vec<ChartData>),
        (status = 400, description = "Unknown section")
    ),
    tag = "Dashboard",
    security(("BearerAuth" = []))
)]
pub async fn get_charts(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
    AppPath(section): AppPath<String>,
    AppQuery(query): AppQuery<ChartQuery>,
) -> Result<Json<Vec<ChartData>>, ErrorResponse> {
    let charts = app_state
        .dashboard_state
        .dashboard_service
        .charts(&section, query.chart_id.as_deref())
        .await?;

    Ok(Json(charts))
}

/// 지표 저장 (없으면 생성)
#[utoipa::path(
    put,
    path = "/api/metrics/{section}/{metricName}",
    params(
        ("section" = String, Path, description = "Dashboard section"),
        ("metricName" = String, Path, description = "Metric name")
    ),
    request_body = UpsertMetricRequest,
    responses(
        (status = 200, description = "Stored metric", body = DashboardMetric),
        (status = 400, description = "Unknown section")
    ),
    tag = "Dashboard",
    security(("BearerAuth" = []))
)]
pub async fn upsert_metric(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
    AppPath((section, metric_name)): AppPath<(String, String)>,
    AppJson(request): AppJson<UpsertMetricRequest>,
) -> Result<Json<DashboardMetric>, ErrorResponse> {
    let metric = app_state
        .dashboard_state
        .dashboard_service
        .upsert_metric(&section, &metric_name, request)
        .await?;

    Ok(Json(metric))
}

/// 차트 저장 (없으면 생성)
#[utoipa::path(
    put,
    path = "/api/charts/{section}/{chartId}",
    params(
        ("section" = String, Path, description = "Dashboard section"),
        ("chartId" = String, Path, description = "Chart ID")
    ),
    request_body = UpsertChartRequest,
    responses(
        (status = 200, description = "Stored chart", body = ChartData),
        (status = 400, description = "Unknown section")
    ),
    tag = "Dashboard",
    security(("BearerAuth" = []))
)]
pub async fn upsert_chart(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
    AppPath((section, chart_id)): AppPath<(String, String)>,
    AppJson(request): AppJson<UpsertChartRequest>,
) -> Result<Json<ChartData>, ErrorResponse> {
    let chart = app_state
        .dashboard_state
        .dashboard_service
        .upsert_chart(&section, &chart_id, request)
        .await?;

    Ok(Json(chart))
}
