// Orders domain state
// 주문 도메인 상태
use std::sync::Arc;

use crate::domains::integrations::services::IntegrationRegistry;
use crate::domains::integrations::tracking::CarrierGateway;
use crate::domains::orders::services::{ClaimService, OrderService};
use crate::shared::database::Stores;

/// Orders domain state
/// 주문 관리 핸들러가 사용하는 서비스 묶음
#[derive(Clone)]
pub struct OrderState {
    pub order_service: OrderService,
    pub claim_service: ClaimService,
}

impl OrderState {
    pub fn new(stores: &Stores, registry: Arc<IntegrationRegistry>, carriers: Arc<dyn CarrierGateway>) -> Self {
        let order_service = OrderService::new(
            stores.orders.clone(),
            stores.shipping_companies.clone(),
            stores.integrations.clone(),
            carriers,
            registry,
        );
        let claim_service = ClaimService::new(stores.claims.clone(), stores.orders.clone(), order_service.clone());

        Self {
            order_service,
            claim_service,
        }
    }
}
