use std::sync::Arc;

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use tracing::info;

use crate::domains::alerts::models::{
    Alert, AlertListQuery, AlertThresholds, AlertsResponse, NewAlert, ROAS_LOOKBACK_DAYS,
    RUNWAY_LOOKBACK_DAYS,
};
use crate::domains::alerts::services::evaluators::{
    daily_report_alert, low_stock_alerts, roas_alerts, runway_alert,
};
use crate::domains::integrations::models::DateRange;
use crate::shared::database::{AdPerformanceStore, AlertStore, CashFlowStore, InventoryStore, OrderStore};
use crate::shared::errors::AppError;

const DEFAULT_ALERT_LIMIT: u32 = 50;
const MAX_ALERT_LIMIT: u32 = 200;

/// 알림 서비스
/// Runs the threshold evaluators for a tenant and stores what they produce
#[derive(Clone)]
pub struct AlertService {
    alerts: Arc<dyn AlertStore>,
    inventory: Arc<dyn InventoryStore>,
    cash_flow: Arc<dyn CashFlowStore>,
    ad_performance: Arc<dyn AdPerformanceStore>,
    orders: Arc<dyn OrderStore>,
    thresholds: AlertThresholds,
}

impl AlertService {
    pub fn new(
        alerts: Arc<dyn AlertStore>,
        inventory: Arc<dyn InventoryStore>,
        cash_flow: Arc<dyn CashFlowStore>,
        ad_performance: Arc<dyn AdPerformanceStore>,
        orders: Arc<dyn OrderStore>,
        thresholds: AlertThresholds,
    ) -> Self {
        Self {
            alerts,
            inventory,
            cash_flow,
            ad_performance,
            orders,
            thresholds,
        }
    }

    /// 테넌트 한 곳 점검 (재고, ROAS, 현금 런웨이)
    /// Returns how many alerts were created
    pub async fn sweep_company(&self, company_id: i64) -> Result<usize, AppError> {
        let today = Utc::now().date_naive();
        let mut pending: Vec<NewAlert> = Vec::new();

        // 1. 재고
        let items = self.inventory.list(company_id).await?;
        pending.extend(low_stock_alerts(company_id, &items));

        // 2. 최근 7일 ROAS
        let range = DateRange {
            start: today - Duration::days(ROAS_LOOKBACK_DAYS - 1),
            end: today,
        };
        let metrics = self.ad_performance.find_in_range(company_id, range).await?;
        pending.extend(roas_alerts(company_id, &metrics, self.thresholds.roas_target_percent));

        // 3. 최근 30일 현금 흐름
        let cash = self
            .cash_flow
            .find_since(company_id, today - Duration::days(RUNWAY_LOOKBACK_DAYS))
            .await?;
        pending.extend(runway_alert(company_id, &cash, self.thresholds.cash_runway_min_days));

        let created = self.store_all(pending).await?;
        info!(company_id, created, "Alert sweep completed");
        Ok(created)
    }

    /// 전날 요약 리포트
    pub async fn daily_report(&self, company_id: i64) -> Result<Alert, AppError> {
        let yesterday = Utc::now().date_naive() - Duration::days(1);
        self.daily_report_for(company_id, yesterday).await
    }

    pub async fn daily_report_for(&self, company_id: i64, date: NaiveDate) -> Result<Alert, AppError> {
        let day_start = Utc.from_utc_datetime(&date.and_time(chrono::NaiveTime::MIN));
        let orders = self.orders.find_since(company_id, day_start).await?;
        let metrics = self
            .ad_performance
            .find_in_range(company_id, DateRange { start: date, end: date })
            .await?;

        let alert = self
            .alerts
            .create(daily_report_alert(company_id, date, &orders, &metrics))
            .await?;

        info!(company_id, %date, "Daily report created");
        Ok(alert)
    }

    /// 알림 목록 + 읽지 않은 개수
    pub async fn list(&self, company_id: i64, query: AlertListQuery) -> Result<AlertsResponse, AppError> {
        let limit = match query.limit {
            Some(0) => return Err(AppError::validation("limit", "limit must be at least 1")),
            Some(limit) => limit.min(MAX_ALERT_LIMIT),
            None => DEFAULT_ALERT_LIMIT,
        };

        let alerts = self
            .alerts
            .list(company_id, query.unread_only.unwrap_or(false), i64::from(limit))
            .await?;
        let unread_count = self.alerts.unread_count(company_id).await?;

        Ok(AlertsResponse { alerts, unread_count })
    }

    pub async fn mark_read(&self, company_id: i64, alert_id: i64) -> Result<(), AppError> {
        if !self.alerts.mark_read(company_id, alert_id).await? {
            return Err(AppError::not_found(format!("Alert {} not found", alert_id)));
        }
        Ok(())
    }

    async fn store_all(&self, pending: Vec<NewAlert>) -> Result<usize, AppError> {
        let count = pending.len();
        for alert in pending {
            self.alerts.create(alert).await?;
        }
        Ok(count)
    }
}
