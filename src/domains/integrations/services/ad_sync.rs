use std::sync::Arc;

use chrono::Utc;

use crate::domains::integrations::models::{DateRange, IntegrationTarget};
use crate::shared::database::{AdPerformanceStore, IntegrationStore};
use crate::shared::errors::AppError;
use super::{IntegrationRegistry, SyncReport};

/// 광고 성과 동기화
/// Fetches yesterday's and today's performance from every active ad integration
#[derive(Clone)]
pub struct AdSyncService {
    integrations: Arc<dyn IntegrationStore>,
    ad_performance: Arc<dyn AdPerformanceStore>,
    registry: Arc<IntegrationRegistry>,
}

impl AdSyncService {
    pub fn new(
        integrations: Arc<dyn IntegrationStore>,
        ad_performance: Arc<dyn AdPerformanceStore>,
        registry: Arc<IntegrationRegistry>,
    ) -> Self {
        Self { integrations, ad_performance, registry }
    }

    pub async fn sync_company(&self, company_id: i64) -> Result<SyncReport, AppError> {
        let integrations = self.integrations.list_active(company_id).await?;
        let range = DateRange::yesterday_through(Utc::now().date_naive());
        let mut report = SyncReport::default();

        for integration in integrations {
            let Some(IntegrationTarget::Ads(platform)) = integration.target() else {
                continue;
            };
            let Some(client) = self.registry.ad_client(platform) else {
                tracing::warn!(company_id, platform = %platform, "No ad client registered");
                continue;
            };

            report.integrations += 1;
            let started_at = Utc::now();

            match client.fetch_performance(&integration.credentials, range).await {
                Ok(metrics) => {
                    // 같은 날짜/캠페인은 여러 번 저장될 수 있음 (읽을 때 최신 것만 사용)
                    let stored = self.ad_performance.insert_many(company_id, &metrics).await?;
                    self.integrations.mark_synced(integration.id, started_at).await?;

                    tracing::info!(
                        company_id,
                        platform = %platform,
                        records = metrics.len(),
                        "Ad performance sync completed"
                    );
                    report.fetched += metrics.len();
                    report.stored += stored as usize;
                }
                Err(e) => {
                    tracing::error!(company_id, platform = %platform, "Ad sync failed: {}", e);
                    report.failures.push(e);
                }
            }
        }

        report.into_result()
    }
}
