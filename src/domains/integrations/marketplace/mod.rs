// 마켓플레이스(판매 채널) 연동
pub mod coupang;
pub mod naver_commerce;

pub use coupang::CoupangClient;
pub use naver_commerce::NaverCommerceClient;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domains::orders::models::{Order, Platform};
use crate::shared::errors::IntegrationError;
use super::models::{NormalizedOrder, PlatformCredentials};

/// 마켓플레이스 클라이언트
/// Pulls orders from a sales channel and pushes shipment/cancellation back
#[async_trait]
pub trait MarketplaceClient: Send + Sync {
    fn platform(&self) -> Platform;

    /// `since` 이후 생성/변경된 주문
    async fn fetch_orders(
        &self,
        credentials: &PlatformCredentials,
        since: DateTime<Utc>,
    ) -> Result<Vec<NormalizedOrder>, IntegrationError>;

    /// 출고(송장) 등록
    async fn notify_shipment(
        &self,
        credentials: &PlatformCredentials,
        order: &Order,
        carrier_code: &str,
        tracking_number: &str,
    ) -> Result<(), IntegrationError>;

    /// 판매 취소 통보
    async fn notify_cancellation(
        &self,
        credentials: &PlatformCredentials,
        order: &Order,
        reason: &str,
    ) -> Result<(), IntegrationError>;
}

/// 플랫폼 주문번호 (없으면 연동 불가)
pub(crate) fn platform_order_id<'a>(platform: &str, order: &'a Order) -> Result<&'a str, IntegrationError> {
    order
        .platform_order_id
        .as_deref()
        .ok_or_else(|| IntegrationError::new(platform, format!("order {} has no platform order id", order.order_number)))
}
