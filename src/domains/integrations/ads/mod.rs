// 광고 플랫폼 연동
pub mod google;
pub mod facebook;
pub mod naver;

pub use google::GoogleAdsClient;
pub use facebook::FacebookAdsClient;
pub use naver::NaverAdsClient;

use async_trait::async_trait;

use crate::shared::errors::IntegrationError;
use super::models::{AdPlatform, DateRange, NormalizedMetric, PlatformCredentials};

/// 광고 플랫폼 클라이언트
/// One implementation per ad network, selected through the integration registry
///
/// 구현체는 필요하면 토큰을 발급/갱신하고, 플랫폼 응답을 `NormalizedMetric`으로 변환합니다.
/// 실패는 재시도 없이 `IntegrationError` 하나로 반환합니다.
#[async_trait]
pub trait AdPlatformClient: Send + Sync {
    fn platform(&self) -> AdPlatform;

    async fn fetch_performance(
        &self,
        credentials: &PlatformCredentials,
        range: DateRange,
    ) -> Result<Vec<NormalizedMetric>, IntegrationError>;
}
