use rust_decimal::Decimal;

/// 런웨이 계산 기간 (일)
pub const RUNWAY_LOOKBACK_DAYS: i64 = 30;
/// ROAS 점검 기간 (일)
pub const ROAS_LOOKBACK_DAYS: i64 = 7;
/// 런웨이가 이보다 짧으면 critical
pub const RUNWAY_CRITICAL_DAYS: i64 = 7;

/// 알림 임계값
/// Thresholds the alert sweep compares against
#[derive(Debug, Clone, PartialEq)]
pub struct AlertThresholds {
    /// 목표 ROAS (%)
    pub roas_target_percent: Decimal,
    /// 최소 현금 런웨이 (일)
    pub cash_runway_min_days: i64,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            roas_target_percent: Decimal::from(300),
            cash_runway_min_days: 30,
        }
    }
}
