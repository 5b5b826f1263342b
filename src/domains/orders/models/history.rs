use serde::Serialize;
use utoipa::ToSchema;
use chrono::{DateTime, Utc};

use super::status::OrderStatus;

/// 주문 상태 변경 이력 (추가 전용, 수정/삭제 없음)
/// Order status history row (append-only)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusHistory {
    pub id: i64,
    pub order_id: i64,
    pub from_status: OrderStatus,
    pub to_status: OrderStatus,
    /// 변경한 주체 (사용자 이메일 또는 "scheduler")
    pub changed_by: String,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// 이력 추가 데이터
#[derive(Debug, Clone)]
pub struct StatusHistoryCreate {
    pub order_id: i64,
    pub from_status: OrderStatus,
    pub to_status: OrderStatus,
    pub changed_by: String,
    pub note: Option<String>,
}
