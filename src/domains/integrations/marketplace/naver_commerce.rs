use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;

use crate::domains::integrations::models::{required, NormalizedOrder, PlatformCredentials};
use crate::domains::integrations::wire::{flexible_decimal, flexible_i64};
use crate::domains::orders::models::{Order, OrderStatus, PaymentStatus, Platform};
use crate::shared::errors::{ensure_success, IntegrationError};
use super::{platform_order_id, MarketplaceClient};

const PLATFORM: &str = "smartstore";
const DEFAULT_API_BASE: &str = "https://api.commerce.naver.com";

// 네이버 커머스 API (스마트스토어)
// client_credentials 토큰 발급 후
// 1. 변경 상품주문 ID 목록 조회
// 2. 상품주문 상세 일괄 조회
pub struct NaverCommerceClient {
    http_client: reqwest::Client,
    api_base: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct LastChangedResponse {
    data: Option<LastChangedData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LastChangedData {
    #[serde(default)]
    last_change_statuses: Vec<ChangedStatus>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChangedStatus {
    product_order_id: String,
}

#[derive(Debug, Deserialize)]
struct ProductOrdersResponse {
    #[serde(default)]
    data: Vec<ProductOrderDetail>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductOrderDetail {
    order: OrderInfo,
    product_order: ProductOrder,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderInfo {
    order_id: String,
    order_date: DateTime<FixedOffset>,
    orderer_name: Option<String>,
    orderer_tel: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductOrder {
    product_order_id: String,
    product_name: String,
    #[serde(default, deserialize_with = "flexible_i64")]
    quantity: i64,
    #[serde(default, deserialize_with = "flexible_decimal")]
    unit_price: Decimal,
    #[serde(default, deserialize_with = "flexible_decimal")]
    total_payment_amount: Decimal,
    product_order_status: String,
    seller_product_code: Option<String>,
    shipping_address: Option<ShippingAddress>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ShippingAddress {
    name: Option<String>,
    base_address: Option<String>,
    detailed_address: Option<String>,
}

impl NaverCommerceClient {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self::with_base_url(http_client, DEFAULT_API_BASE)
    }

    pub fn with_base_url(http_client: reqwest::Client, api_base: &str) -> Self {
        Self {
            http_client,
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    /// client_credentials 토큰 발급
    async fn issue_token(&self, credentials: &PlatformCredentials) -> Result<String, IntegrationError> {
        let client_id = required(PLATFORM, "clientId", &credentials.client_id)?;
        let client_secret = required(PLATFORM, "clientSecret", &credentials.client_secret)?;

        let response = self
            .http_client
            .post(format!("{}/external/v1/oauth2/token", self.api_base))
            .form(&[
                ("client_id", client_id),
                ("client_secret", client_secret),
                ("grant_type", "client_credentials"),
                ("type", "SELF"),
            ])
            .send()
            .await
            .map_err(|e| IntegrationError::transport(PLATFORM, e))?;

        let token: TokenResponse = ensure_success(PLATFORM, response)
            .await?
            .json()
            .await
            .map_err(|e| IntegrationError::new(PLATFORM, format!("invalid token response: {}", e)))?;

        Ok(token.access_token)
    }

    async fn post_json(&self, token: &str, path: &str, body: serde_json::Value) -> Result<reqwest::Response, IntegrationError> {
        let response = self
            .http_client
            .post(format!("{}{}", self.api_base, path))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(|e| IntegrationError::transport(PLATFORM, e))?;

        ensure_success(PLATFORM, response).await
    }

    fn normalize(detail: ProductOrderDetail) -> NormalizedOrder {
        let ProductOrderDetail { order, product_order } = detail;
        let (status, payment_status) = map_status(&product_order.product_order_status);
        let address = product_order.shipping_address.as_ref();

        NormalizedOrder {
            platform: Platform::Smartstore,
            platform_order_id: product_order.product_order_id.clone(),
            customer_name: order.orderer_name.clone().unwrap_or_default(),
            customer_email: None,
            customer_phone: order.orderer_tel.clone(),
            product_name: product_order.product_name.clone(),
            sku: product_order.seller_product_code.clone(),
            quantity: i32::try_from(product_order.quantity.max(1)).unwrap_or(i32::MAX),
            unit_price: product_order.unit_price,
            total_amount: product_order.total_payment_amount,
            recipient_name: address.and_then(|a| a.name.clone()),
            shipping_address: address.map(|a| {
                [a.base_address.as_deref(), a.detailed_address.as_deref()]
                    .into_iter()
                    .flatten()
                    .collect::<Vec<_>>()
                    .join(" ")
            }),
            status,
            payment_status,
            order_date: order.order_date.with_timezone(&Utc),
            metadata: json!({
                "naverOrderId": order.order_id,
                "naverStatus": product_order.product_order_status,
            }),
        }
    }
}

/// 네이버 상품주문 상태 → 내부 상태
fn map_status(raw: &str) -> (OrderStatus, PaymentStatus) {
    match raw {
        "PAYMENT_WAITING" => (OrderStatus::New, PaymentStatus::Pending),
        "PAYED" => (OrderStatus::New, PaymentStatus::Paid),
        "DELIVERING" => (OrderStatus::Shipped, PaymentStatus::Paid),
        "DELIVERED" | "PURCHASE_DECIDED" | "EXCHANGED" => (OrderStatus::Delivered, PaymentStatus::Paid),
        "CANCELED" | "CANCELED_BY_NOPAYMENT" => (OrderStatus::Cancelled, PaymentStatus::Cancelled),
        "RETURNED" => (OrderStatus::Returned, PaymentStatus::Refunded),
        _ => (OrderStatus::New, PaymentStatus::Paid),
    }
}

#[async_trait]
impl MarketplaceClient for NaverCommerceClient {
    fn platform(&self) -> Platform {
        Platform::Smartstore
    }

    async fn fetch_orders(
        &self,
        credentials: &PlatformCredentials,
        since: DateTime<Utc>,
    ) -> Result<Vec<NormalizedOrder>, IntegrationError> {
        let token = self.issue_token(credentials).await?;

        let response = self
            .http_client
            .get(format!(
                "{}/external/v1/pay-order/seller/product-orders/last-changed-statuses",
                self.api_base
            ))
            .bearer_auth(&token)
            .query(&[("lastChangedFrom", since.to_rfc3339())])
            .send()
            .await
            .map_err(|e| IntegrationError::transport(PLATFORM, e))?;

        let changed: LastChangedResponse = ensure_success(PLATFORM, response)
            .await?
            .json()
            .await
            .map_err(|e| IntegrationError::new(PLATFORM, format!("invalid last-changed response: {}", e)))?;

        let ids: Vec<String> = changed
            .data
            .map(|d| d.last_change_statuses.into_iter().map(|s| s.product_order_id).collect())
            .unwrap_or_default();
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let details: ProductOrdersResponse = self
            .post_json(
                &token,
                "/external/v1/pay-order/seller/product-orders/query",
                json!({ "productOrderIds": ids }),
            )
            .await?
            .json()
            .await
            .map_err(|e| IntegrationError::new(PLATFORM, format!("invalid product-orders response: {}", e)))?;

        Ok(details.data.into_iter().map(Self::normalize).collect())
    }

    async fn notify_shipment(
        &self,
        credentials: &PlatformCredentials,
        order: &Order,
        carrier_code: &str,
        tracking_number: &str,
    ) -> Result<(), IntegrationError> {
        let product_order_id = platform_order_id(PLATFORM, order)?;
        let token = self.issue_token(credentials).await?;

        self.post_json(
            &token,
            "/external/v1/pay-order/seller/product-orders/dispatch",
            json!({
                "dispatchProductOrders": [{
                    "productOrderId": product_order_id,
                    "deliveryMethod": "DELIVERY",
                    "deliveryCompanyCode": carrier_code,
                    "trackingNumber": tracking_number,
                    "dispatchDate": Utc::now().to_rfc3339(),
                }]
            }),
        )
        .await?;
        Ok(())
    }

    async fn notify_cancellation(
        &self,
        credentials: &PlatformCredentials,
        order: &Order,
        reason: &str,
    ) -> Result<(), IntegrationError> {
        let product_order_id = platform_order_id(PLATFORM, order)?;
        let token = self.issue_token(credentials).await?;

        self.post_json(
            &token,
            &format!(
                "/external/v1/pay-order/seller/product-orders/{}/claim/cancel/request",
                product_order_id
            ),
            json!({
                "cancelReason": "SOLD_OUT",
                "cancelDetailedReason": reason,
            }),
        )
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_keeps_payment_in_sync() {
        assert_eq!(map_status("PAYMENT_WAITING"), (OrderStatus::New, PaymentStatus::Pending));
        assert_eq!(map_status("CANCELED"), (OrderStatus::Cancelled, PaymentStatus::Cancelled));
        assert_eq!(map_status("RETURNED"), (OrderStatus::Returned, PaymentStatus::Refunded));
    }

    #[test]
    fn detail_is_normalized_to_utc() {
        let detail: ProductOrderDetail = serde_json::from_value(json!({
            "order": {
                "orderId": "2024011500001",
                "orderDate": "2024-01-15T10:30:00.000+09:00",
                "ordererName": "김철수",
                "ordererTel": "010-1234-5678"
            },
            "productOrder": {
                "productOrderId": "2024011512345",
                "productName": "무선 이어폰",
                "quantity": 1,
                "unitPrice": 59000,
                "totalPaymentAmount": 59000,
                "productOrderStatus": "PAYED",
                "shippingAddress": { "name": "김철수", "baseAddress": "부산시", "detailedAddress": "해운대구" }
            }
        }))
        .unwrap();

        let order = NaverCommerceClient::normalize(detail);
        assert_eq!(order.order_number(), "SS-2024011512345");
        assert_eq!(order.order_date.to_rfc3339(), "2024-01-15T01:30:00+00:00");
        assert_eq!(order.shipping_address.as_deref(), Some("부산시 해운대구"));
    }
}
