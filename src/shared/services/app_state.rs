use std::sync::Arc;

use crate::domains::alerts::services::AlertState;
use crate::domains::auth::services::AuthState;
use crate::domains::dashboard::services::DashboardState;
use crate::domains::integrations::services::IntegrationRegistry;
use crate::domains::integrations::tracking::CarrierGateway;
use crate::domains::orders::services::OrderState;
use crate::domains::scheduler::services::SchedulerState;
use crate::shared::config::Config;
use crate::shared::database::Stores;

/// Application state (combines all domain states)
/// 애플리케이션 상태 (모든 도메인 상태를 조합)
///
/// 외부 연동(마켓플레이스/광고 클라이언트, 택배사 게이트웨이)과 저장소를
/// 주입받으므로 테스트에서는 메모리 저장소와 가짜 연동으로 구성합니다.
#[derive(Clone)]
pub struct AppState {
    pub auth_state: AuthState,
    pub order_state: OrderState,
    pub alert_state: AlertState,
    pub dashboard_state: DashboardState,
    pub scheduler_state: SchedulerState,
}

impl AppState {
    /// 모든 도메인 State를 초기화하고 조합
    pub fn new(
        stores: Stores,
        registry: Arc<IntegrationRegistry>,
        carriers: Arc<dyn CarrierGateway>,
        config: &Config,
    ) -> Self {
        // 1. 각 도메인 State 생성
        let auth_state = AuthState::new(&stores, &config.jwt_secret);
        let order_state = OrderState::new(&stores, registry.clone(), carriers);
        let alert_state = AlertState::new(&stores, config.alert_thresholds.clone());
        let dashboard_state = DashboardState::new(&stores);

        // 2. 스케줄러 (작업 테이블은 여기서 한 번만 구성)
        let scheduler_state = SchedulerState::new(
            &stores,
            registry,
            alert_state.alert_service.clone(),
            &config.scheduler,
        );

        Self {
            auth_state,
            order_state,
            alert_state,
            dashboard_state,
            scheduler_state,
        }
    }
}
