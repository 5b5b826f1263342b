use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::domains::integrations::models::IntegrationTarget;
use crate::shared::database::{IntegrationStore, OrderStore};
use crate::shared::errors::AppError;
use super::{IntegrationRegistry, SyncReport};

/// 첫 동기화 시 조회 기간 (일)
pub const INITIAL_ORDER_LOOKBACK_DAYS: i64 = 7;

/// 마켓플레이스 주문 동기화
/// Pulls new orders from every active marketplace integration of a tenant
#[derive(Clone)]
pub struct OrderSyncService {
    integrations: Arc<dyn IntegrationStore>,
    orders: Arc<dyn OrderStore>,
    registry: Arc<IntegrationRegistry>,
}

impl OrderSyncService {
    pub fn new(
        integrations: Arc<dyn IntegrationStore>,
        orders: Arc<dyn OrderStore>,
        registry: Arc<IntegrationRegistry>,
    ) -> Self {
        Self { integrations, orders, registry }
    }

    /// 테넌트 한 곳 동기화
    /// 이미 저장된 주문(같은 플랫폼 주문번호)은 건너뜀
    pub async fn sync_company(&self, company_id: i64) -> Result<SyncReport, AppError> {
        let integrations = self.integrations.list_active(company_id).await?;
        let mut report = SyncReport::default();

        for integration in integrations {
            let Some(IntegrationTarget::Marketplace(platform)) = integration.target() else {
                continue;
            };
            let Some(client) = self.registry.marketplace(platform) else {
                tracing::warn!(company_id, platform = %platform, "No marketplace client registered");
                continue;
            };

            report.integrations += 1;
            let started_at = Utc::now();
            let since = integration
                .last_synced_at
                .unwrap_or(started_at - Duration::days(INITIAL_ORDER_LOOKBACK_DAYS));

            match client.fetch_orders(&integration.credentials, since).await {
                Ok(orders) => {
                    let mut stored = 0;
                    for order in &orders {
                        if self.orders.insert_synced(company_id, order).await? {
                            stored += 1;
                        }
                    }
                    self.integrations.mark_synced(integration.id, started_at).await?;

                    tracing::info!(
                        company_id,
                        platform = %platform,
                        fetched = orders.len(),
                        stored,
                        "Order sync completed"
                    );
                    report.fetched += orders.len();
                    report.stored += stored;
                }
                Err(e) => {
                    tracing::error!(company_id, platform = %platform, "Order sync failed: {}", e);
                    report.failures.push(e);
                }
            }
        }

        report.into_result()
    }
}
