use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use utoipa::ToSchema;

use crate::domains::orders::models::Platform;
use super::credentials::PlatformCredentials;

/// 광고 플랫폼
/// Ad network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AdPlatform {
    GoogleAds,
    FacebookAds,
    NaverAds,
}

impl AdPlatform {
    pub const ALL: [AdPlatform; 3] = [AdPlatform::GoogleAds, AdPlatform::FacebookAds, AdPlatform::NaverAds];

    pub fn as_str(&self) -> &'static str {
        match self {
            AdPlatform::GoogleAds => "google_ads",
            AdPlatform::FacebookAds => "facebook_ads",
            AdPlatform::NaverAds => "naver_ads",
        }
    }
}

impl fmt::Display for AdPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdPlatform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AdPlatform::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| format!("Unknown ad platform: {}", s))
    }
}

/// 연동 대상 (광고 또는 판매 채널)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrationTarget {
    Ads(AdPlatform),
    Marketplace(Platform),
}

/// 테넌트별 플랫폼 연동 설정
/// Which integrator runs for which tenant, with its credentials
#[derive(Debug, Clone)]
pub struct PlatformIntegration {
    pub id: i64,
    pub company_id: i64,
    /// google_ads, facebook_ads, naver_ads 또는 마켓플레이스 코드
    pub platform: String,
    pub credentials: PlatformCredentials,
    pub is_active: bool,
    pub last_synced_at: Option<DateTime<Utc>>,
}

impl PlatformIntegration {
    /// 연동 대상 해석 (알 수 없는 플랫폼이면 None)
    pub fn target(&self) -> Option<IntegrationTarget> {
        if let Ok(ad) = self.platform.parse::<AdPlatform>() {
            return Some(IntegrationTarget::Ads(ad));
        }
        self.platform
            .parse::<Platform>()
            .ok()
            .map(IntegrationTarget::Marketplace)
    }
}
