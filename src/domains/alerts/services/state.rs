// Alerts domain state
use crate::domains::alerts::models::AlertThresholds;
use crate::domains::alerts::services::AlertService;
use crate::shared::database::Stores;

/// 알림 도메인 상태
#[derive(Clone)]
pub struct AlertState {
    pub alert_service: AlertService,
}

impl AlertState {
    pub fn new(stores: &Stores, thresholds: AlertThresholds) -> Self {
        Self {
            alert_service: AlertService::new(
                stores.alerts.clone(),
                stores.inventory.clone(),
                stores.cash_flow.clone(),
                stores.ad_performance.clone(),
                stores.orders.clone(),
                thresholds,
            ),
        }
    }
}
