// 택배사 연동 (송장 발급, 배송 조회)
pub mod http_carrier;

pub use http_carrier::HttpCarrierGateway;

use async_trait::async_trait;

use crate::domains::orders::models::{Order, ShippingCompany};
use crate::shared::errors::IntegrationError;
use super::models::TrackingInfo;

/// 택배사 게이트웨이
/// Issues tracking numbers and looks up shipment progress for a shipping company
#[async_trait]
pub trait CarrierGateway: Send + Sync {
    async fn issue_tracking_number(
        &self,
        carrier: &ShippingCompany,
        order: &Order,
    ) -> Result<String, IntegrationError>;

    async fn track(
        &self,
        carrier: &ShippingCompany,
        tracking_number: &str,
    ) -> Result<TrackingInfo, IntegrationError>;
}
