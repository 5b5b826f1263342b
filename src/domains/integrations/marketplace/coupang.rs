use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;

use crate::domains::integrations::models::{required, NormalizedOrder, PlatformCredentials};
use crate::domains::integrations::signing::coupang_signature;
use crate::domains::integrations::wire::{flexible_decimal, flexible_i64};
use crate::domains::orders::models::{Order, OrderStatus, PaymentStatus, Platform};
use crate::shared::errors::{ensure_success, IntegrationError};
use super::{platform_order_id, MarketplaceClient};

const PLATFORM: &str = "coupang";
const DEFAULT_API_BASE: &str = "https://api-gateway.coupang.com";
/// 조회할 발주서 상태 (결제완료 ~ 배송완료)
const SYNC_STATUSES: [&str; 5] = ["ACCEPT", "INSTRUCT", "DEPARTURE", "DELIVERING", "FINAL_DELIVERY"];

// 쿠팡 Wing Open API
// Authorization: CEA algorithm=HmacSHA256, access-key=.., signed-date=.., signature=..
// 서명 메시지 = signed-date + method + path + query
pub struct CoupangClient {
    http_client: reqwest::Client,
    api_base: String,
}

#[derive(Debug, Deserialize)]
struct OrderSheetResponse {
    #[serde(default)]
    data: Vec<OrderSheet>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderSheet {
    #[serde(deserialize_with = "flexible_i64")]
    order_id: i64,
    #[serde(default, deserialize_with = "flexible_i64")]
    shipment_box_id: i64,
    /// KST, 오프셋 없음 (예: 2024-01-15T10:30:00)
    ordered_at: String,
    status: String,
    orderer: Option<Person>,
    receiver: Option<Receiver>,
    #[serde(default)]
    order_items: Vec<OrderItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Person {
    name: Option<String>,
    email: Option<String>,
    safe_number: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Receiver {
    name: Option<String>,
    addr1: Option<String>,
    addr2: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderItem {
    vendor_item_name: Option<String>,
    #[serde(default, deserialize_with = "flexible_i64")]
    shipping_count: i64,
    #[serde(default, deserialize_with = "flexible_decimal")]
    sales_price: Decimal,
    #[serde(default, deserialize_with = "flexible_decimal")]
    order_price: Decimal,
    external_vendor_sku_code: Option<String>,
}

impl CoupangClient {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self::with_base_url(http_client, DEFAULT_API_BASE)
    }

    pub fn with_base_url(http_client: reqwest::Client, api_base: &str) -> Self {
        Self {
            http_client,
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    fn authorization(
        credentials: &PlatformCredentials,
        method: &str,
        path: &str,
        query: &str,
    ) -> Result<String, IntegrationError> {
        let access_key = required(PLATFORM, "apiKey", &credentials.api_key)?;
        let secret_key = required(PLATFORM, "secretKey", &credentials.secret_key)?;
        let signed_date = Utc::now().format("%y%m%dT%H%M%SZ").to_string();
        let signature = coupang_signature(secret_key, &signed_date, method, path, query)?;

        Ok(format!(
            "CEA algorithm=HmacSHA256, access-key={}, signed-date={}, signature={}",
            access_key, signed_date, signature
        ))
    }

    async fn send_signed(
        &self,
        credentials: &PlatformCredentials,
        method: reqwest::Method,
        path: &str,
        query: &str,
        body: Option<serde_json::Value>,
    ) -> Result<reqwest::Response, IntegrationError> {
        let authorization = Self::authorization(credentials, method.as_str(), path, query)?;
        let url = if query.is_empty() {
            format!("{}{}", self.api_base, path)
        } else {
            format!("{}{}?{}", self.api_base, path, query)
        };

        let mut request = self
            .http_client
            .request(method, &url)
            .header("Authorization", authorization);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| IntegrationError::transport(PLATFORM, e))?;

        ensure_success(PLATFORM, response).await
    }

    fn normalize(sheet: OrderSheet) -> Result<NormalizedOrder, IntegrationError> {
        let order_date = parse_kst(&sheet.ordered_at)?;
        let (status, payment_status) = map_status(&sheet.status);

        let first = sheet.order_items.first();
        let product_name = match (first.and_then(|i| i.vendor_item_name.clone()), sheet.order_items.len()) {
            (Some(name), n) if n > 1 => format!("{} 외 {}건", name, n - 1),
            (Some(name), _) => name,
            (None, _) => "(unknown item)".to_string(),
        };
        let quantity: i64 = sheet.order_items.iter().map(|i| i.shipping_count).sum();
        let total_amount: Decimal = sheet.order_items.iter().map(|i| i.order_price).sum();

        let orderer = sheet.orderer.as_ref();
        let receiver = sheet.receiver.as_ref();
        let shipping_address = receiver.map(|r| {
            [r.addr1.as_deref(), r.addr2.as_deref()]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(" ")
        });

        Ok(NormalizedOrder {
            platform: Platform::Coupang,
            platform_order_id: sheet.order_id.to_string(),
            customer_name: orderer
                .and_then(|o| o.name.clone())
                .or_else(|| receiver.and_then(|r| r.name.clone()))
                .unwrap_or_default(),
            customer_email: orderer.and_then(|o| o.email.clone()),
            customer_phone: orderer.and_then(|o| o.safe_number.clone()),
            product_name,
            sku: first.and_then(|i| i.external_vendor_sku_code.clone()),
            quantity: i32::try_from(quantity.max(1)).unwrap_or(i32::MAX),
            unit_price: first.map(|i| i.sales_price).unwrap_or(Decimal::ZERO),
            total_amount,
            recipient_name: receiver.and_then(|r| r.name.clone()),
            shipping_address,
            status,
            payment_status,
            order_date,
            metadata: json!({
                "shipmentBoxId": sheet.shipment_box_id,
                "coupangStatus": sheet.status,
            }),
        })
    }
}

/// 쿠팡 상태 → 내부 상태
fn map_status(raw: &str) -> (OrderStatus, PaymentStatus) {
    let status = match raw {
        "ACCEPT" => OrderStatus::New,
        "INSTRUCT" => OrderStatus::Preparing,
        "DEPARTURE" | "DELIVERING" | "NONE_TRACKING" => OrderStatus::Shipped,
        "FINAL_DELIVERY" => OrderStatus::Delivered,
        _ => OrderStatus::New,
    };
    (status, PaymentStatus::Paid)
}

fn parse_kst(raw: &str) -> Result<DateTime<Utc>, IntegrationError> {
    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .map_err(|e| IntegrationError::new(PLATFORM, format!("invalid orderedAt '{}': {}", raw, e)))?;
    let kst = FixedOffset::east_opt(9 * 3600)
        .ok_or_else(|| IntegrationError::new(PLATFORM, "invalid KST offset"))?;
    kst.from_local_datetime(&naive)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| IntegrationError::new(PLATFORM, format!("ambiguous orderedAt '{}'", raw)))
}

#[async_trait]
impl MarketplaceClient for CoupangClient {
    fn platform(&self) -> Platform {
        Platform::Coupang
    }

    async fn fetch_orders(
        &self,
        credentials: &PlatformCredentials,
        since: DateTime<Utc>,
    ) -> Result<Vec<NormalizedOrder>, IntegrationError> {
        let vendor_id = required(PLATFORM, "vendorId", &credentials.vendor_id)?;
        let path = format!("/v2/providers/openapi/apis/api/v4/vendors/{}/ordersheets", vendor_id);
        let from = since.format("%Y-%m-%d");
        let to = Utc::now().format("%Y-%m-%d");

        let mut orders = Vec::new();
        for status in SYNC_STATUSES {
            let query = format!("createdAtFrom={}&createdAtTo={}&status={}&maxPerPage=50", from, to, status);
            let response: OrderSheetResponse = self
                .send_signed(credentials, reqwest::Method::GET, &path, &query, None)
                .await?
                .json()
                .await
                .map_err(|e| IntegrationError::new(PLATFORM, format!("invalid ordersheets response: {}", e)))?;

            for sheet in response.data {
                orders.push(Self::normalize(sheet)?);
            }
        }

        Ok(orders)
    }

    async fn notify_shipment(
        &self,
        credentials: &PlatformCredentials,
        order: &Order,
        carrier_code: &str,
        tracking_number: &str,
    ) -> Result<(), IntegrationError> {
        let vendor_id = required(PLATFORM, "vendorId", &credentials.vendor_id)?;
        let order_id = platform_order_id(PLATFORM, order)?;
        let path = format!("/v2/providers/openapi/apis/api/v4/vendors/{}/orders/invoices", vendor_id);

        let body = json!({
            "vendorId": vendor_id,
            "orderSheetInvoiceApplyDtos": [{
                "shipmentBoxId": order.metadata.get("shipmentBoxId"),
                "orderId": order_id,
                "deliveryCompanyCode": carrier_code,
                "invoiceNumber": tracking_number,
                "splitShipping": false,
                "preSplitShipped": false,
                "estimatedShippingDate": ""
            }]
        });

        self.send_signed(credentials, reqwest::Method::POST, &path, "", Some(body))
            .await?;
        Ok(())
    }

    async fn notify_cancellation(
        &self,
        credentials: &PlatformCredentials,
        order: &Order,
        reason: &str,
    ) -> Result<(), IntegrationError> {
        let vendor_id = required(PLATFORM, "vendorId", &credentials.vendor_id)?;
        let order_id = platform_order_id(PLATFORM, order)?;
        let path = format!(
            "/v2/providers/openapi/apis/api/v5/vendors/{}/orders/{}/cancel",
            vendor_id, order_id
        );

        let body = json!({
            "orderId": order_id,
            "vendorId": vendor_id,
            "reason": reason,
        });

        self.send_signed(credentials, reqwest::Method::POST, &path, "", Some(body))
            .await?;
        Ok(())
    }
}
