use std::collections::BTreeMap;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use chrono::{DateTime, Months, Utc};
use rust_decimal::Decimal;

use super::status::Platform;

/// 통계 기간
/// Statistics period: daily = last 30 days, weekly = last 12 weeks, monthly = last 12 months
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StatsPeriod {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl StatsPeriod {
    /// 집계 시작 시점
    pub fn window_start(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            StatsPeriod::Daily => now - chrono::Duration::days(30),
            StatsPeriod::Weekly => now - chrono::Duration::weeks(12),
            StatsPeriod::Monthly => now
                .checked_sub_months(Months::new(12))
                .unwrap_or(now - chrono::Duration::days(365)),
        }
    }

    /// 타임라인 버킷 키
    pub fn bucket_key(&self, date: DateTime<Utc>) -> String {
        match self {
            StatsPeriod::Daily => date.format("%Y-%m-%d").to_string(),
            StatsPeriod::Weekly => date.format("%G-W%V").to_string(),
            StatsPeriod::Monthly => date.format("%Y-%m").to_string(),
        }
    }
}

impl FromStr for StatsPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(StatsPeriod::Daily),
            "weekly" => Ok(StatsPeriod::Weekly),
            "monthly" => Ok(StatsPeriod::Monthly),
            other => Err(format!("Unknown period: {}", other)),
        }
    }
}

/// 플랫폼별 집계
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlatformBreakdown {
    pub platform: Platform,
    pub orders: i64,
    #[schema(value_type = String)]
    pub revenue: Decimal,
}

/// 기간 버킷별 집계
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimelineBucket {
    /// 2024-01-15 / 2024-W03 / 2024-01
    pub bucket: String,
    pub orders: i64,
    #[schema(value_type = String)]
    pub revenue: Decimal,
}

/// 배송 성과
/// Shipping performance summary
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShippingPerformance {
    pub shipped_count: i64,
    /// 주문일 → 출고일 평균 (일)
    pub average_shipping_days: f64,
    /// 기준일 이내 출고 비율 (%)
    pub on_time_rate: f64,
}

/// 주문 통계
/// `GET /api/order-management/stats` response
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = OrderStats)]
pub struct OrderStats {
    pub period: StatsPeriod,
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
    pub total_orders: i64,
    /// 취소/반품 제외 매출
    #[schema(value_type = String)]
    pub total_revenue: Decimal,
    #[schema(value_type = String)]
    pub average_order_value: Decimal,
    pub status_breakdown: BTreeMap<String, i64>,
    pub platform_breakdown: Vec<PlatformBreakdown>,
    pub timeline: Vec<TimelineBucket>,
    pub shipping: ShippingPerformance,
}
