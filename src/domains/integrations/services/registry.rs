use std::collections::HashMap;
use std::sync::Arc;

use crate::domains::integrations::ads::{
    AdPlatformClient, FacebookAdsClient, GoogleAdsClient, NaverAdsClient,
};
use crate::domains::integrations::marketplace::{CoupangClient, MarketplaceClient, NaverCommerceClient};
use crate::domains::integrations::models::AdPlatform;
use crate::domains::orders::models::Platform;

/// 플랫폼 → 클라이언트 매핑
/// Selects the integrator for a platform; built once at startup
#[derive(Clone, Default)]
pub struct IntegrationRegistry {
    ads: HashMap<AdPlatform, Arc<dyn AdPlatformClient>>,
    marketplaces: HashMap<Platform, Arc<dyn MarketplaceClient>>,
}

impl IntegrationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 실제 플랫폼 API를 호출하는 기본 구성
    pub fn standard(http_client: reqwest::Client) -> Self {
        Self::new()
            .with_ad_client(Arc::new(GoogleAdsClient::new(http_client.clone())))
            .with_ad_client(Arc::new(FacebookAdsClient::new(http_client.clone())))
            .with_ad_client(Arc::new(NaverAdsClient::new(http_client.clone())))
            .with_marketplace(Arc::new(CoupangClient::new(http_client.clone())))
            .with_marketplace(Arc::new(NaverCommerceClient::new(http_client)))
    }

    pub fn with_ad_client(mut self, client: Arc<dyn AdPlatformClient>) -> Self {
        self.ads.insert(client.platform(), client);
        self
    }

    pub fn with_marketplace(mut self, client: Arc<dyn MarketplaceClient>) -> Self {
        self.marketplaces.insert(client.platform(), client);
        self
    }

    pub fn ad_client(&self, platform: AdPlatform) -> Option<Arc<dyn AdPlatformClient>> {
        self.ads.get(&platform).cloned()
    }

    pub fn marketplace(&self, platform: Platform) -> Option<Arc<dyn MarketplaceClient>> {
        self.marketplaces.get(&platform).cloned()
    }
}
