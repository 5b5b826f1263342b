use crate::domains::dashboard::services::DashboardService;
use crate::shared::database::Stores;

/// 대시보드 도메인 상태
#[derive(Clone)]
pub struct DashboardState {
    pub dashboard_service: DashboardService,
}

impl DashboardState {
    pub fn new(stores: &Stores) -> Self {
        Self {
            dashboard_service: DashboardService::new(stores.dashboard.clone()),
        }
    }
}
