use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::status::{OrderStatus, PaymentStatus, Platform};

// =====================================================
// Order 모델
// =====================================================
// 역할: 마켓플레이스 주문 한 건 (한 테넌트 소유)
// 변경은 OrderService를 통해서만 이루어지고,
// 상태가 바뀔 때마다 order_status_history에 한 줄씩 추가됨
// =====================================================

/// 주문 정보
/// Order record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = Order)]
pub struct Order {
    pub id: i64,

    /// 주문번호 (회사 내 유일)
    #[schema(example = "ORD-100")]
    pub order_number: String,

    /// 플랫폼 주문번호
    pub platform_order_id: Option<String>,

    pub company_id: i64,
    pub platform: Platform,

    pub customer_name: String,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,

    pub product_name: String,
    pub sku: Option<String>,
    pub quantity: i32,
    #[schema(value_type = String, example = "15000")]
    pub unit_price: Decimal,
    #[schema(value_type = String, example = "30000")]
    pub total_amount: Decimal,

    pub recipient_name: Option<String>,
    pub shipping_address: Option<String>,
    pub shipping_method: Option<String>,
    pub tracking_number: Option<String>,
    /// 택배사 코드
    pub carrier_code: Option<String>,

    pub status: OrderStatus,
    pub payment_status: PaymentStatus,

    pub order_date: DateTime<Utc>,
    pub shipped_at: Option<DateTime<Utc>>,
    pub delivered_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    #[schema(value_type = Object)]
    pub metadata: serde_json::Value,

    /// 낙관적 잠금 버전 (업데이트마다 1 증가)
    /// Optimistic row version, bumped on every update
    pub version: i32,
}

/// 주문 변경 내용 (저장소에 한 번에 반영)
/// Full set of mutable order fields written by one update
#[derive(Debug, Clone)]
pub struct OrderUpdate {
    pub order_id: i64,
    /// 읽었을 때의 버전 (다르면 저장 실패)
    pub expected_version: i32,
    pub status: OrderStatus,
    pub tracking_number: Option<String>,
    pub carrier_code: Option<String>,
    pub shipped_at: Option<DateTime<Utc>>,
    pub delivered_at: Option<DateTime<Utc>>,
    pub metadata: serde_json::Value,
    pub updated_at: DateTime<Utc>,
}

impl OrderUpdate {
    /// 현재 주문 값으로 초기화
    /// Start from the order as currently stored
    pub fn from_order(order: &Order, now: DateTime<Utc>) -> Self {
        Self {
            order_id: order.id,
            expected_version: order.version,
            status: order.status,
            tracking_number: order.tracking_number.clone(),
            carrier_code: order.carrier_code.clone(),
            shipped_at: order.shipped_at,
            delivered_at: order.delivered_at,
            metadata: order.metadata.clone(),
            updated_at: now,
        }
    }

    /// 변경 사항을 주문에 적용한 결과 (저장 성공 후 응답용)
    pub fn applied_to(&self, order: &Order) -> Order {
        Order {
            status: self.status,
            tracking_number: self.tracking_number.clone(),
            carrier_code: self.carrier_code.clone(),
            shipped_at: self.shipped_at,
            delivered_at: self.delivered_at,
            metadata: self.metadata.clone(),
            updated_at: self.updated_at,
            version: self.expected_version + 1,
            ..order.clone()
        }
    }
}

/// 주문 필터 (목록 조회)
/// Filter for order listing
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
    pub platform: Option<Platform>,
    pub date_from: Option<DateTime<Utc>>,
    pub date_to: Option<DateTime<Utc>>,
    /// 주문번호/고객명/상품명 부분 일치 (대소문자 무시)
    pub search: Option<String>,
}

impl OrderFilter {
    /// 메모리에서 필터 조건 확인 (저장소 구현과 동일한 규칙)
    /// In-memory predicate equivalent to the SQL filter
    pub fn matches(&self, order: &Order) -> bool {
        if self.status.is_some_and(|s| s != order.status) {
            return false;
        }
        if self.platform.is_some_and(|p| p != order.platform) {
            return false;
        }
        if self.date_from.is_some_and(|from| order.order_date < from) {
            return false;
        }
        if self.date_to.is_some_and(|to| order.order_date > to) {
            return false;
        }
        if let Some(term) = self.search.as_deref() {
            let term = term.to_lowercase();
            let hit = [&order.order_number, &order.customer_name, &order.product_name]
                .iter()
                .any(|field| field.to_lowercase().contains(&term));
            if !hit {
                return false;
            }
        }
        true
    }
}

/// 주문 페이지 응답
/// `GET /api/order-management/orders` response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = OrderPage)]
pub struct OrderPage {
    pub orders: Vec<Order>,
    pub total_count: i64,
    pub current_page: u32,
    pub total_pages: u32,
}
