use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;

use crate::domains::integrations::models::{TrackingEvent, TrackingInfo};
use crate::domains::orders::models::{Order, ShippingCompany};
use crate::shared::errors::{ensure_success, IntegrationError};
use crate::shared::utils::TrackingNumberGenerator;
use super::CarrierGateway;

// 택배사 HTTP 게이트웨이
// shipping_companies.api_endpoint가 있으면 택배사 API 호출,
// 없으면 송장번호는 로컬 생성, 배송 조회는 조회 URL만 제공
pub struct HttpCarrierGateway {
    http_client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IssueResponse {
    tracking_number: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TrackResponse {
    status: String,
    #[serde(default)]
    delivered: bool,
    #[serde(default)]
    events: Vec<TrackEvent>,
}

#[derive(Debug, Deserialize)]
struct TrackEvent {
    time: DateTime<Utc>,
    location: Option<String>,
    description: String,
}

impl HttpCarrierGateway {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }

    fn with_api_key(request: reqwest::RequestBuilder, carrier: &ShippingCompany) -> reqwest::RequestBuilder {
        match carrier.api_key.as_deref() {
            Some(key) => request.header("X-API-KEY", key),
            None => request,
        }
    }
}

#[async_trait]
impl CarrierGateway for HttpCarrierGateway {
    async fn issue_tracking_number(
        &self,
        carrier: &ShippingCompany,
        order: &Order,
    ) -> Result<String, IntegrationError> {
        let Some(endpoint) = carrier.api_endpoint.as_deref() else {
            return Ok(TrackingNumberGenerator::generate(&carrier.code, Utc::now()));
        };

        let request = self
            .http_client
            .post(format!("{}/tracking-numbers", endpoint.trim_end_matches('/')))
            .json(&json!({
                "orderNumber": order.order_number,
                "recipientName": order.recipient_name.as_deref().unwrap_or(&order.customer_name),
                "address": order.shipping_address,
                "quantity": order.quantity,
            }));

        let response = Self::with_api_key(request, carrier)
            .send()
            .await
            .map_err(|e| IntegrationError::transport(&carrier.code, e))?;

        let issued: IssueResponse = ensure_success(&carrier.code, response)
            .await?
            .json()
            .await
            .map_err(|e| IntegrationError::new(&carrier.code, format!("invalid issue response: {}", e)))?;

        if issued.tracking_number.trim().is_empty() {
            return Err(IntegrationError::new(&carrier.code, "carrier returned an empty tracking number"));
        }
        Ok(issued.tracking_number)
    }

    async fn track(
        &self,
        carrier: &ShippingCompany,
        tracking_number: &str,
    ) -> Result<TrackingInfo, IntegrationError> {
        let tracking_url = carrier.tracking_url(tracking_number);

        let Some(endpoint) = carrier.api_endpoint.as_deref() else {
            return Ok(TrackingInfo {
                tracking_number: tracking_number.to_string(),
                carrier_code: carrier.code.clone(),
                carrier_name: carrier.name.clone(),
                status: "unavailable".to_string(),
                delivered: false,
                tracking_url,
                events: Vec::new(),
            });
        };

        let request = self
            .http_client
            .get(format!("{}/tracking/{}", endpoint.trim_end_matches('/'), tracking_number));

        let response = Self::with_api_key(request, carrier)
            .send()
            .await
            .map_err(|e| IntegrationError::transport(&carrier.code, e))?;

        let tracked: TrackResponse = ensure_success(&carrier.code, response)
            .await?
            .json()
            .await
            .map_err(|e| IntegrationError::new(&carrier.code, format!("invalid tracking response: {}", e)))?;

        Ok(TrackingInfo {
            tracking_number: tracking_number.to_string(),
            carrier_code: carrier.code.clone(),
            carrier_name: carrier.name.clone(),
            status: tracked.status,
            delivered: tracked.delivered,
            tracking_url,
            events: tracked
                .events
                .into_iter()
                .map(|e| TrackingEvent {
                    time: e.time,
                    location: e.location,
                    description: e.description,
                })
                .collect(),
        })
    }
}
