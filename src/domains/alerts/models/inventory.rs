use serde::Serialize;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// 재고 품목 (알림 점검에서 읽기 전용)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: i64,
    pub company_id: i64,
    pub sku: String,
    pub product_name: String,
    pub current_stock: i32,
    pub min_stock: i32,
    pub max_stock: i32,
    pub unit_price: Decimal,
    pub category: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl InventoryItem {
    pub fn is_low_stock(&self) -> bool {
        self.current_stock <= self.min_stock
    }
}
