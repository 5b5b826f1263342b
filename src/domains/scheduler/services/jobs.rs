use async_trait::async_trait;

use crate::domains::alerts::services::AlertService;
use crate::domains::auth::models::Company;
use crate::domains::integrations::services::{AdSyncService, OrderSyncService};
use crate::shared::errors::AppError;

pub const ORDER_SYNC_JOB: &str = "order-sync";
pub const AD_SYNC_JOB: &str = "ad-sync";
pub const ALERT_SWEEP_JOB: &str = "alert-sweep";
pub const DAILY_REPORT_JOB: &str = "daily-report";

/// 테넌트 단위 작업
/// A scheduled job body, invoked once per active company
#[async_trait]
pub trait TenantJob: Send + Sync {
    async fn run_for_company(&self, company: &Company) -> Result<(), AppError>;
}

/// 마켓플레이스 주문 동기화
pub struct OrderSyncJob {
    sync: OrderSyncService,
}

impl OrderSyncJob {
    pub fn new(sync: OrderSyncService) -> Self {
        Self { sync }
    }
}

#[async_trait]
impl TenantJob for OrderSyncJob {
    async fn run_for_company(&self, company: &Company) -> Result<(), AppError> {
        self.sync.sync_company(company.id).await.map(|_| ())
    }
}

/// 광고 성과 동기화
pub struct AdSyncJob {
    sync: AdSyncService,
}

impl AdSyncJob {
    pub fn new(sync: AdSyncService) -> Self {
        Self { sync }
    }
}

#[async_trait]
impl TenantJob for AdSyncJob {
    async fn run_for_company(&self, company: &Company) -> Result<(), AppError> {
        self.sync.sync_company(company.id).await.map(|_| ())
    }
}

/// 임계값 점검
pub struct AlertSweepJob {
    alerts: AlertService,
}

impl AlertSweepJob {
    pub fn new(alerts: AlertService) -> Self {
        Self { alerts }
    }
}

#[async_trait]
impl TenantJob for AlertSweepJob {
    async fn run_for_company(&self, company: &Company) -> Result<(), AppError> {
        self.alerts.sweep_company(company.id).await.map(|_| ())
    }
}

/// 일일 리포트
pub struct DailyReportJob {
    alerts: AlertService,
}

impl DailyReportJob {
    pub fn new(alerts: AlertService) -> Self {
        Self { alerts }
    }
}

#[async_trait]
impl TenantJob for DailyReportJob {
    async fn run_for_company(&self, company: &Company) -> Result<(), AppError> {
        self.alerts.daily_report(company.id).await.map(|_| ())
    }
}
