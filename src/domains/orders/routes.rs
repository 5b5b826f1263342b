// Orders domain routes
// 주문 관리 라우터
use axum::{routing::{get, patch, post}, Router};
use crate::domains::orders::handlers::{claim_handler, order_handler};
use crate::shared::services::AppState;

/// Create order management router
/// 주문 관리 라우터 생성 (/api/order-management)
pub fn create_order_router() -> Router<AppState> {
    Router::new()
        .route("/orders", get(order_handler::list_orders))
        .route("/orders/bulk-ship", post(order_handler::bulk_ship))
        .route("/orders/:id", get(order_handler::get_order))
        .route("/orders/:id/status", patch(order_handler::update_status))
        .route("/orders/:id/cancel", post(order_handler::cancel_order))
        .route("/orders/:id/claims", post(claim_handler::create_claim))
        .route("/claims", get(claim_handler::list_claims))
        .route("/claims/:id", patch(claim_handler::process_claim))
        .route("/tracking/:tracking_number", get(order_handler::get_tracking_info))
        .route("/stats", get(order_handler::get_stats))
        .route("/shipping-companies", get(order_handler::list_shipping_companies))
}
