use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domains::orders::models::{OrderStatus, PaymentStatus, Platform};

/// 마켓플레이스 주문 (플랫폼 공통 형태)
/// Order pulled from a marketplace, already mapped to our vocabulary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedOrder {
    pub platform: Platform,
    pub platform_order_id: String,
    pub customer_name: String,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub product_name: String,
    pub sku: Option<String>,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub total_amount: Decimal,
    pub recipient_name: Option<String>,
    pub shipping_address: Option<String>,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub order_date: DateTime<Utc>,
    /// 플랫폼 원본 응답 일부
    pub metadata: serde_json::Value,
}

impl NormalizedOrder {
    /// 내부 주문번호 (예: CP-123456)
    pub fn order_number(&self) -> String {
        format!("{}-{}", self.platform.order_number_prefix(), self.platform_order_id)
    }
}
