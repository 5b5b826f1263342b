use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use serde::Serialize;

use super::integration::AdPlatform;
use super::metric::{roas, NormalizedMetric};

/// 플랫폼별 광고비/매출 합계
/// Spend and attributed revenue aggregated over a window
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformSpend {
    pub impressions: i64,
    pub clicks: i64,
    pub cost: Decimal,
    pub conversions: i64,
    pub revenue: Decimal,
}

impl PlatformSpend {
    pub fn add(&mut self, metric: &NormalizedMetric) {
        self.impressions += metric.impressions;
        self.clicks += metric.clicks;
        self.cost += metric.cost;
        self.conversions += metric.conversions;
        self.revenue += metric.revenue;
    }

    /// 합계 기준 ROAS (%)
    pub fn roas(&self) -> Decimal {
        roas(self.revenue, self.cost)
    }
}

/// (플랫폼, 날짜, 캠페인)별 마지막 기록만 남김
/// Ad sync re-fetches recent days, so the latest row per key wins
pub fn latest_snapshots(metrics: &[NormalizedMetric]) -> Vec<NormalizedMetric> {
    let mut order: Vec<(AdPlatform, chrono::NaiveDate, Option<String>)> = Vec::new();
    let mut latest: HashMap<(AdPlatform, chrono::NaiveDate, Option<String>), &NormalizedMetric> = HashMap::new();

    for metric in metrics {
        let key = (metric.platform, metric.date, metric.campaign_id.clone());
        if latest.insert(key.clone(), metric).is_none() {
            order.push(key);
        }
    }

    order
        .iter()
        .filter_map(|key| latest.get(key).map(|m| (*m).clone()))
        .collect()
}

/// 플랫폼별로 합산
pub fn summarize_by_platform(metrics: &[NormalizedMetric]) -> BTreeMap<AdPlatform, PlatformSpend> {
    let mut summary: BTreeMap<AdPlatform, PlatformSpend> = BTreeMap::new();
    for metric in metrics {
        summary.entry(metric.platform).or_default().add(metric);
    }
    summary
}

/// 전체 합계
pub fn total_spend(metrics: &[NormalizedMetric]) -> PlatformSpend {
    metrics.iter().fold(PlatformSpend::default(), |mut acc, metric| {
        acc.add(metric);
        acc
    })
}
