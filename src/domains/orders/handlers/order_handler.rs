use axum::{
    extract::State,
    Json,
};

use crate::domains::integrations::models::TrackingInfo;
use crate::domains::orders::models::{
    BulkShipRequest, BulkShipResponse, CancelOrderRequest, ListOrdersQuery, OrderActionResponse,
    OrderDetail, OrderPage, OrderStats, ShippingCompany, StatsPeriod, StatsQuery, TrackingQuery,
    UpdateStatusRequest,
};
use crate::shared::errors::{AppError, ErrorResponse};
use crate::shared::middleware::{AppJson, AppPath, AppQuery, AuthenticatedUser};
use crate::shared::services::AppState;

/// 주문 목록 조회
#[utoipa::path(
    get,
    path = "/api/order-management/orders",
    params(ListOrdersQuery),
    responses(
        (status = 200, description = "Orders page", body = OrderPage),
        (status = 400, description = "Invalid filter or paging"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Orders",
    security(("BearerAuth" = []))
)]
pub async fn list_orders(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    AppQuery(query): AppQuery<ListOrdersQuery>,
) -> Result<Json<OrderPage>, ErrorResponse> {
    let page = app_state
        .order_state
        .order_service
        .list_orders(user.company_id, query)
        .await?;

    Ok(Json(page))
}

/// 주문 상세 조회 (상태 이력 포함)
#[utoipa::path(
    get,
    path = "/api/order-management/orders/{id}",
    params(("id" = i64, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order with status history", body = OrderDetail),
        (status = 404, description = "Order not found")
    ),
    tag = "Orders",
    security(("BearerAuth" = []))
)]
pub async fn get_order(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    AppPath(order_id): AppPath<i64>,
) -> Result<Json<OrderDetail>, ErrorResponse> {
    let detail = app_state
        .order_state
        .order_service
        .get_order(user.company_id, order_id)
        .await?;

    Ok(Json(detail))
}

/// 주문 상태 변경
#[utoipa::path(
    patch,
    path = "/api/order-management/orders/{id}/status",
    params(("id" = i64, Path, description = "Order ID")),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = OrderActionResponse),
        (status = 400, description = "Invalid status"),
        (status = 404, description = "Order not found"),
        (status = 409, description = "Illegal transition or concurrent update")
    ),
    tag = "Orders",
    security(("BearerAuth" = []))
)]
pub async fn update_status(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    AppPath(order_id): AppPath<i64>,
    AppJson(request): AppJson<UpdateStatusRequest>,
) -> Result<Json<OrderActionResponse>, ErrorResponse> {
    let order = app_state
        .order_state
        .order_service
        .apply_status_request(user.company_id, order_id, request, &user.email)
        .await?;

    Ok(Json(OrderActionResponse {
        success: true,
        message: format!("Order {} is now {}", order.order_number, order.status),
        order,
    }))
}

/// 일괄 출고
/// 건별로 독립 처리, 결과는 요청 순서대로
#[utoipa::path(
    post,
    path = "/api/order-management/orders/bulk-ship",
    request_body = BulkShipRequest,
    responses(
        (status = 200, description = "Per-order results", body = BulkShipResponse),
        (status = 404, description = "Shipping company not found")
    ),
    tag = "Orders",
    security(("BearerAuth" = []))
)]
pub async fn bulk_ship(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    AppJson(request): AppJson<BulkShipRequest>,
) -> Result<Json<BulkShipResponse>, ErrorResponse> {
    let response = app_state
        .order_state
        .order_service
        .bulk_ship(user.company_id, request, &user.email)
        .await?;

    Ok(Json(response))
}

/// 주문 취소
#[utoipa::path(
    post,
    path = "/api/order-management/orders/{id}/cancel",
    params(("id" = i64, Path, description = "Order ID")),
    request_body = CancelOrderRequest,
    responses(
        (status = 200, description = "Order cancelled", body = OrderActionResponse),
        (status = 400, description = "Missing reason"),
        (status = 404, description = "Order not found"),
        (status = 409, description = "Order already shipped")
    ),
    tag = "Orders",
    security(("BearerAuth" = []))
)]
pub async fn cancel_order(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    AppPath(order_id): AppPath<i64>,
    request: Option<AppJson<CancelOrderRequest>>,
) -> Result<Json<OrderActionResponse>, ErrorResponse> {
    // 본문이 없거나 읽을 수 없으면 사유 누락으로 처리 (400, field=reason)
    let reason = request.and_then(|AppJson(request)| request.reason);
    let order = app_state
        .order_state
        .order_service
        .cancel(user.company_id, order_id, reason, &user.email)
        .await?;

    Ok(Json(OrderActionResponse {
        success: true,
        message: format!("Order {} cancelled", order.order_number),
        order,
    }))
}

/// 배송 조회
#[utoipa::path(
    get,
    path = "/api/order-management/tracking/{trackingNumber}",
    params(
        ("trackingNumber" = String, Path, description = "Tracking number"),
        TrackingQuery
    ),
    responses(
        (status = 200, description = "Tracking information", body = TrackingInfo),
        (status = 404, description = "Unknown shipping company"),
        (status = 500, description = "Carrier API failure")
    ),
    tag = "Orders",
    security(("BearerAuth" = []))
)]
pub async fn get_tracking_info(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
    AppPath(tracking_number): AppPath<String>,
    AppQuery(query): AppQuery<TrackingQuery>,
) -> Result<Json<TrackingInfo>, ErrorResponse> {
    let info = app_state
        .order_state
        .order_service
        .get_tracking_info(&tracking_number, query.company_code.as_deref())
        .await?;

    Ok(Json(info))
}

/// 주문 통계
#[utoipa::path(
    get,
    path = "/api/order-management/stats",
    params(StatsQuery),
    responses(
        (status = 200, description = "Order statistics", body = OrderStats),
        (status = 400, description = "Invalid period"),
        (status = 403, description = "Another company's statistics")
    ),
    tag = "Orders",
    security(("BearerAuth" = []))
)]
pub async fn get_stats(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    AppQuery(query): AppQuery<StatsQuery>,
) -> Result<Json<OrderStats>, ErrorResponse> {
    let company_id = query.company_id.unwrap_or(user.company_id);
    if company_id != user.company_id {
        return Err(AppError::Forbidden("Cannot read another company's statistics".to_string()).into());
    }

    let period = match query.period.as_deref() {
        Some(raw) => raw
            .parse::<StatsPeriod>()
            .map_err(|e| AppError::validation("period", e))?,
        None => StatsPeriod::default(),
    };

    let stats = app_state
        .order_state
        .order_service
        .get_stats(company_id, period)
        .await?;

    Ok(Json(stats))
}

/// 택배사 목록
#[utoipa::path(
    get,
    path = "/api/order-management/shipping-companies",
    responses(
        (status = 200, description = "Active shipping companies", body = Vec<ShippingCompany>)
    ),
    tag = "Orders",
    security(("BearerAuth" = []))
)]
pub async fn list_shipping_companies(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
) -> Result<Json<Vec<ShippingCompany>>, ErrorResponse> {
    let companies = app_state
        .order_state
        .order_service
        .list_shipping_companies()
        .await?;

    Ok(Json(companies))
}
