use serde::{Deserialize, Serialize};
use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use utoipa::ToSchema;

use crate::shared::errors::IntegrationError;
use super::integration::AdPlatform;

/// 조회 기간 (양 끝 포함)
/// Inclusive date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, IntegrationError> {
        if start > end {
            return Err(IntegrationError::new(
                "date_range",
                format!("start {} is after end {}", start, end),
            ));
        }
        Ok(Self { start, end })
    }

    /// 어제 ~ 오늘 (광고 동기화 기본 기간)
    pub fn yesterday_through(today: NaiveDate) -> Self {
        Self {
            start: today - Duration::days(1),
            end: today,
        }
    }

    /// 기간 내 날짜 목록
    pub fn days(&self) -> Vec<NaiveDate> {
        self.start
            .iter_days()
            .take_while(|day| *day <= self.end)
            .collect()
    }
}

/// 광고 성과 (플랫폼 공통 형태)
/// Normalized ad performance row produced by every ad integrator
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedMetric {
    pub platform: AdPlatform,
    pub date: NaiveDate,
    pub campaign_id: Option<String>,
    pub campaign_name: Option<String>,
    pub impressions: i64,
    pub clicks: i64,
    #[schema(value_type = String)]
    pub cost: Decimal,
    pub conversions: i64,
    #[schema(value_type = String)]
    pub revenue: Decimal,
    /// 클릭률 (%)
    #[schema(value_type = String)]
    pub ctr: Decimal,
    /// 클릭당 비용
    #[schema(value_type = String)]
    pub cpc: Decimal,
    /// 광고비 대비 매출 (%)
    #[schema(value_type = String)]
    pub roas: Decimal,
}

impl NormalizedMetric {
    /// 원시 지표로 생성 (파생 지표 자동 계산)
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        platform: AdPlatform,
        date: NaiveDate,
        campaign_id: Option<String>,
        campaign_name: Option<String>,
        impressions: i64,
        clicks: i64,
        cost: Decimal,
        conversions: i64,
        revenue: Decimal,
    ) -> Self {
        Self {
            platform,
            date,
            campaign_id,
            campaign_name,
            impressions,
            clicks,
            cost,
            conversions,
            revenue,
            ctr: ctr(clicks, impressions),
            cpc: cpc(cost, clicks),
            roas: roas(revenue, cost),
        }
    }
}

// 파생 지표: 분모가 0이면 0

/// 클릭률 = clicks / impressions × 100
pub fn ctr(clicks: i64, impressions: i64) -> Decimal {
    if impressions <= 0 {
        return Decimal::ZERO;
    }
    (Decimal::from(clicks) * Decimal::ONE_HUNDRED / Decimal::from(impressions)).round_dp(2)
}

/// 클릭당 비용 = cost / clicks
pub fn cpc(cost: Decimal, clicks: i64) -> Decimal {
    if clicks <= 0 {
        return Decimal::ZERO;
    }
    (cost / Decimal::from(clicks)).round_dp(2)
}

/// ROAS = revenue / cost × 100
pub fn roas(revenue: Decimal, cost: Decimal) -> Decimal {
    if cost.is_zero() || cost.is_sign_negative() {
        return Decimal::ZERO;
    }
    (revenue * Decimal::ONE_HUNDRED / cost).round_dp(2)
}
