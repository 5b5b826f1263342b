use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Deserialize;
use serde_json::json;

use crate::domains::integrations::models::{
    required, AdPlatform, DateRange, NormalizedMetric, PlatformCredentials,
};
use crate::domains::integrations::wire::{flexible_decimal, flexible_i64, parse_decimal};
use crate::shared::errors::{ensure_success, IntegrationError};
use super::AdPlatformClient;

const PLATFORM: &str = "facebook_ads";
const DEFAULT_API_BASE: &str = "https://graph.facebook.com/v18.0";
/// 페이지 수 상한 (paging.next 무한 반복 방지)
const MAX_PAGES: usize = 50;
/// 구매로 집계할 action_type
const PURCHASE_ACTIONS: [&str; 3] = ["purchase", "offsite_conversion.fb_pixel_purchase", "omni_purchase"];

// Facebook Marketing API (Graph insights)
// 캠페인 단위, 일별(time_increment=1) 지표를 페이지 단위로 조회
pub struct FacebookAdsClient {
    http_client: reqwest::Client,
    api_base: String,
}

#[derive(Debug, Deserialize)]
struct InsightsPage {
    #[serde(default)]
    data: Vec<InsightRow>,
    paging: Option<Paging>,
}

#[derive(Debug, Deserialize)]
struct Paging {
    next: Option<String>,
}

#[derive(Debug, Deserialize)]
struct InsightRow {
    campaign_id: Option<String>,
    campaign_name: Option<String>,
    date_start: NaiveDate,
    #[serde(default, deserialize_with = "flexible_i64")]
    impressions: i64,
    #[serde(default, deserialize_with = "flexible_i64")]
    clicks: i64,
    #[serde(default, deserialize_with = "flexible_decimal")]
    spend: Decimal,
    #[serde(default)]
    actions: Vec<ActionValue>,
    #[serde(default)]
    action_values: Vec<ActionValue>,
}

#[derive(Debug, Deserialize)]
struct ActionValue {
    action_type: String,
    value: serde_json::Value,
}

impl FacebookAdsClient {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self::with_base_url(http_client, DEFAULT_API_BASE)
    }

    pub fn with_base_url(http_client: reqwest::Client, api_base: &str) -> Self {
        Self {
            http_client,
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    async fn fetch_page(&self, url: &str, query: Option<&[(&str, String)]>) -> Result<InsightsPage, IntegrationError> {
        let mut request = self.http_client.get(url);
        if let Some(query) = query {
            request = request.query(query);
        }

        let response = request
            .send()
            .await
            .map_err(|e| IntegrationError::transport(PLATFORM, e))?;

        ensure_success(PLATFORM, response)
            .await?
            .json()
            .await
            .map_err(|e| IntegrationError::new(PLATFORM, format!("invalid insights response: {}", e)))
    }
}

/// 구매 action 합계
fn sum_purchases(actions: &[ActionValue]) -> Decimal {
    actions
        .iter()
        .filter(|a| PURCHASE_ACTIONS.contains(&a.action_type.as_str()))
        .filter_map(|a| match &a.value {
            serde_json::Value::String(s) => parse_decimal(s),
            serde_json::Value::Number(n) => parse_decimal(&n.to_string()),
            _ => None,
        })
        .max()
        .unwrap_or(Decimal::ZERO)
}

#[async_trait]
impl AdPlatformClient for FacebookAdsClient {
    fn platform(&self) -> AdPlatform {
        AdPlatform::FacebookAds
    }

    async fn fetch_performance(
        &self,
        credentials: &PlatformCredentials,
        range: DateRange,
    ) -> Result<Vec<NormalizedMetric>, IntegrationError> {
        let access_token = required(PLATFORM, "accessToken", &credentials.access_token)?;
        let account_id = required(PLATFORM, "accountId", &credentials.account_id)?;
        let account_id = account_id.trim_start_matches("act_");

        let time_range = json!({
            "since": range.start.format("%Y-%m-%d").to_string(),
            "until": range.end.format("%Y-%m-%d").to_string(),
        });
        let query = vec![
            ("access_token", access_token.to_string()),
            ("level", "campaign".to_string()),
            ("time_increment", "1".to_string()),
            ("time_range", time_range.to_string()),
            (
                "fields",
                "campaign_id,campaign_name,impressions,clicks,spend,actions,action_values".to_string(),
            ),
        ];

        let first_url = format!("{}/act_{}/insights", self.api_base, account_id);
        let mut page = self.fetch_page(&first_url, Some(&query)).await?;
        let mut rows = std::mem::take(&mut page.data);

        // paging.next에는 access_token을 포함한 전체 URL이 들어 있음
        let mut pages = 1;
        while let Some(next) = page.paging.as_ref().and_then(|p| p.next.clone()) {
            if pages >= MAX_PAGES {
                tracing::warn!(platform = PLATFORM, "Stopped paging insights after {} pages", MAX_PAGES);
                break;
            }
            page = self.fetch_page(&next, None).await?;
            rows.append(&mut page.data);
            pages += 1;
        }

        let metrics = rows
            .into_iter()
            .map(|row| {
                let conversions = sum_purchases(&row.actions).round().to_i64().unwrap_or(0);
                NormalizedMetric::new(
                    AdPlatform::FacebookAds,
                    row.date_start,
                    row.campaign_id,
                    row.campaign_name,
                    row.impressions,
                    row.clicks,
                    row.spend,
                    conversions,
                    sum_purchases(&row.action_values),
                )
            })
            .collect();

        Ok(metrics)
    }
}
