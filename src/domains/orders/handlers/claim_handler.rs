use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use crate::domains::orders::models::{ClaimsQuery, CreateClaimRequest, OrderClaim, ProcessClaimRequest};
use crate::shared::errors::ErrorResponse;
use crate::shared::middleware::{AppJson, AppPath, AppQuery, AuthenticatedUser};
use crate::shared::services::AppState;

/// 클레임 접수 (반품/교환)
#[utoipa::path(
    post,
    path = "/api/order-management/orders/{id}/claims",
    params(("id" = i64, Path, description = "Order ID")),
    request_body = CreateClaimRequest,
    responses(
        (status = 201, description = "Claim created", body = OrderClaim),
        (status = 400, description = "Invalid claim type or missing reason"),
        (status = 404, description = "Order not found"),
        (status = 409, description = "Order has not shipped yet")
    ),
    tag = "Claims",
    security(("BearerAuth" = []))
)]
pub async fn create_claim(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    AppPath(order_id): AppPath<i64>,
    AppJson(request): AppJson<CreateClaimRequest>,
) -> Result<(StatusCode, Json<OrderClaim>), ErrorResponse> {
    let claim = app_state
        .order_state
        .claim_service
        .create_claim(user.company_id, order_id, request)
        .await?;

    Ok((StatusCode::CREATED, Json(claim)))
}

/// 클레임 목록
#[utoipa::path(
    get,
    path = "/api/order-management/claims",
    params(ClaimsQuery),
    responses(
        (status = 200, description = "Claims, newest first", body = Vec<OrderClaim>)
    ),
    tag = "Claims",
    security(("BearerAuth" = []))
)]
pub async fn list_claims(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    AppQuery(query): AppQuery<ClaimsQuery>,
) -> Result<Json<Vec<OrderClaim>>, ErrorResponse> {
    let claims = app_state
        .order_state
        .claim_service
        .list_claims(user.company_id, query.status.as_deref())
        .await?;

    Ok(Json(claims))
}

/// 클레임 처리
/// 반품 승인 시 주문은 returned로 전이
#[utoipa::path(
    patch,
    path = "/api/order-management/claims/{id}",
    params(("id" = i64, Path, description = "Claim ID")),
    request_body = ProcessClaimRequest,
    responses(
        (status = 200, description = "Claim processed", body = OrderClaim),
        (status = 404, description = "Claim not found"),
        (status = 409, description = "Illegal claim transition")
    ),
    tag = "Claims",
    security(("BearerAuth" = []))
)]
pub async fn process_claim(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    AppPath(claim_id): AppPath<i64>,
    AppJson(request): AppJson<ProcessClaimRequest>,
) -> Result<Json<OrderClaim>, ErrorResponse> {
    let claim = app_state
        .order_state
        .claim_service
        .process_claim(user.company_id, claim_id, &request.status, &user.email)
        .await?;

    Ok(Json(claim))
}
