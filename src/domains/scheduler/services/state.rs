// Scheduler domain state
use std::sync::Arc;

use crate::domains::alerts::services::AlertService;
use crate::domains::integrations::services::{AdSyncService, IntegrationRegistry, OrderSyncService};
use crate::domains::scheduler::models::Schedule;
use crate::domains::scheduler::services::{
    AdSyncJob, AlertSweepJob, DailyReportJob, JobDescriptor, OrderSyncJob, Scheduler, AD_SYNC_JOB,
    ALERT_SWEEP_JOB, DAILY_REPORT_JOB, ORDER_SYNC_JOB,
};
use crate::shared::config::SchedulerConfig;
use crate::shared::database::Stores;

/// 스케줄러 도메인 상태
#[derive(Clone)]
pub struct SchedulerState {
    pub scheduler: Scheduler,
}

impl SchedulerState {
    /// 작업 테이블 구성 (order-sync, ad-sync, alert-sweep, daily-report)
    pub fn new(
        stores: &Stores,
        registry: Arc<IntegrationRegistry>,
        alert_service: AlertService,
        config: &SchedulerConfig,
    ) -> Self {
        let order_sync = OrderSyncService::new(stores.integrations.clone(), stores.orders.clone(), registry.clone());
        let ad_sync = AdSyncService::new(stores.integrations.clone(), stores.ad_performance.clone(), registry);

        let jobs = vec![
            JobDescriptor::new(
                ORDER_SYNC_JOB,
                Schedule::Interval(config.order_sync_interval),
                Arc::new(OrderSyncJob::new(order_sync)),
            ),
            JobDescriptor::new(
                AD_SYNC_JOB,
                Schedule::Interval(config.ad_sync_interval),
                Arc::new(AdSyncJob::new(ad_sync)),
            ),
            JobDescriptor::new(
                ALERT_SWEEP_JOB,
                Schedule::Interval(config.alert_sweep_interval),
                Arc::new(AlertSweepJob::new(alert_service.clone())),
            ),
            JobDescriptor::new(
                DAILY_REPORT_JOB,
                Schedule::DailyAt(config.daily_report_time),
                Arc::new(DailyReportJob::new(alert_service)),
            ),
        ];

        Self {
            scheduler: Scheduler::new(stores.companies.clone(), jobs, config.enabled),
        }
    }
}
