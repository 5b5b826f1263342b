use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;

use crate::domains::integrations::models::{
    required, AdPlatform, DateRange, NormalizedMetric, PlatformCredentials,
};
use crate::domains::integrations::wire::{flexible_decimal, flexible_i64};
use crate::shared::errors::{ensure_success, IntegrationError};
use super::AdPlatformClient;

const PLATFORM: &str = "google_ads";
const DEFAULT_API_BASE: &str = "https://googleads.googleapis.com/v16";
const DEFAULT_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

// Google Ads API 클라이언트
// 1. refresh token으로 access token 발급
// 2. searchStream(GAQL)으로 캠페인/일자별 지표 조회
// 비용은 micros(1/1,000,000) 단위로 내려옴
pub struct GoogleAdsClient {
    http_client: reqwest::Client,
    api_base: String,
    token_url: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct SearchStreamBatch {
    #[serde(default)]
    results: Vec<SearchRow>,
}

#[derive(Debug, Deserialize)]
struct SearchRow {
    campaign: Option<CampaignRef>,
    segments: Segments,
    #[serde(default)]
    metrics: RowMetrics,
}

#[derive(Debug, Deserialize)]
struct CampaignRef {
    #[serde(default)]
    id: Option<serde_json::Value>,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Segments {
    date: NaiveDate,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RowMetrics {
    #[serde(default, deserialize_with = "flexible_i64")]
    impressions: i64,
    #[serde(default, deserialize_with = "flexible_i64")]
    clicks: i64,
    #[serde(default, deserialize_with = "flexible_i64")]
    cost_micros: i64,
    #[serde(default, deserialize_with = "flexible_i64")]
    conversions: i64,
    #[serde(default, deserialize_with = "flexible_decimal")]
    conversions_value: Decimal,
}

impl GoogleAdsClient {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self::with_endpoints(http_client, DEFAULT_API_BASE, DEFAULT_TOKEN_URL)
    }

    /// API/토큰 주소 지정 (테스트용 로컬 서버 등)
    pub fn with_endpoints(http_client: reqwest::Client, api_base: &str, token_url: &str) -> Self {
        Self {
            http_client,
            api_base: api_base.trim_end_matches('/').to_string(),
            token_url: token_url.to_string(),
        }
    }

    async fn refresh_access_token(&self, credentials: &PlatformCredentials) -> Result<String, IntegrationError> {
        let client_id = required(PLATFORM, "clientId", &credentials.client_id)?;
        let client_secret = required(PLATFORM, "clientSecret", &credentials.client_secret)?;
        let refresh_token = required(PLATFORM, "refreshToken", &credentials.refresh_token)?;

        let response = self
            .http_client
            .post(&self.token_url)
            .form(&[
                ("client_id", client_id),
                ("client_secret", client_secret),
                ("refresh_token", refresh_token),
                ("grant_type", "refresh_token"),
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

    fn build_query(range: DateRange) -> String {
        format!(
            "SELECT campaign.id, campaign.name, segments.date, metrics.impressions, metrics.clicks, \
             metrics.cost_micros, metrics.conversions, metrics.conversions_value \
             FROM campaign WHERE segments.date BETWEEN '{}' AND '{}'",
            range.start.format("%Y-%m-%d"),
            range.end.format("%Y-%m-%d"),
        )
    }
}

/// micros → 통화 단위
fn from_micros(micros: i64) -> Decimal {
    (Decimal::from(micros) / Decimal::from(1_000_000)).round_dp(2)
}

#[async_trait]
impl AdPlatformClient for GoogleAdsClient {
    fn platform(&self) -> AdPlatform {
        AdPlatform::GoogleAds
    }

    async fn fetch_performance(
        &self,
        credentials: &PlatformCredentials,
        range: DateRange,
    ) -> Result<Vec<NormalizedMetric>, IntegrationError> {
        let customer_id = required(PLATFORM, "customerId", &credentials.customer_id)?.replace('-', "");
        let developer_token = required(PLATFORM, "developerToken", &credentials.developer_token)?;
        let access_token = self.refresh_access_token(credentials).await?;

        let url = format!("{}/customers/{}/googleAds:searchStream", self.api_base, customer_id);
        let mut request = self
            .http_client
            .post(&url)
            .bearer_auth(&access_token)
            .header("developer-token", developer_token)
            .json(&json!({ "query": Self::build_query(range) }));

        if let Some(login_customer_id) = credentials.login_customer_id.as_deref() {
            request = request.header("login-customer-id", login_customer_id.replace('-', ""));
        }

        let response = request
            .send()
            .await
            .map_err(|e| IntegrationError::transport(PLATFORM, e))?;

        let batches: Vec<SearchStreamBatch> = ensure_success(PLATFORM, response)
            .await?
            .json()
            .await
            .map_err(|e| IntegrationError::new(PLATFORM, format!("invalid searchStream response: {}", e)))?;

        let metrics = batches
            .into_iter()
            .flat_map(|batch| batch.results)
            .map(|row| {
                let (campaign_id, campaign_name) = match row.campaign {
                    Some(campaign) => (
                        campaign.id.map(|id| match id {
                            serde_json::Value::String(s) => s,
                            other => other.to_string(),
                        }),
                        campaign.name,
                    ),
                    None => (None, None),
                };

                NormalizedMetric::new(
                    AdPlatform::GoogleAds,
                    row.segments.date,
                    campaign_id,
                    campaign_name,
                    row.metrics.impressions,
                    row.metrics.clicks,
                    from_micros(row.metrics.cost_micros),
                    row.metrics.conversions,
                    row.metrics.conversions_value.round_dp(2),
                )
            })
            .collect();

        Ok(metrics)
    }
}
