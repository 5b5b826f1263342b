use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;

use crate::domains::integrations::models::{
    required, AdPlatform, DateRange, NormalizedMetric, PlatformCredentials,
};
use crate::domains::integrations::signing::naver_ads_signature;
use crate::domains::integrations::wire::{flexible_decimal, flexible_i64};
use crate::shared::errors::{ensure_success, IntegrationError};
use super::AdPlatformClient;

const PLATFORM: &str = "naver_ads";
const DEFAULT_API_BASE: &str = "https://api.searchad.naver.com";

// 네이버 검색광고 API
// 모든 요청에 X-Timestamp / X-API-KEY / X-Customer / X-Signature 헤더
// 1. /ncc/campaigns 로 캠페인 목록
// 2. /stats 로 캠페인별 일별 지표
pub struct NaverAdsClient {
    http_client: reqwest::Client,
    api_base: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Campaign {
    ncc_campaign_id: String,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StatsResponse {
    #[serde(default)]
    data: Vec<StatRow>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatRow {
    id: String,
    date_start: NaiveDate,
    #[serde(default, deserialize_with = "flexible_i64")]
    imp_cnt: i64,
    #[serde(default, deserialize_with = "flexible_i64")]
    clk_cnt: i64,
    /// 광고비
    #[serde(default, deserialize_with = "flexible_decimal")]
    sales_amt: Decimal,
    /// 전환수
    #[serde(default, deserialize_with = "flexible_i64")]
    ccnt: i64,
    /// 전환매출
    #[serde(default, deserialize_with = "flexible_decimal")]
    conv_amt: Decimal,
}

impl NaverAdsClient {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self::with_base_url(http_client, DEFAULT_API_BASE)
    }

    pub fn with_base_url(http_client: reqwest::Client, api_base: &str) -> Self {
        Self {
            http_client,
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    /// 서명된 GET 요청
    async fn signed_get<T: DeserializeOwned>(
        &self,
        credentials: &PlatformCredentials,
        uri: &str,
        query: &[(&str, String)],
    ) -> Result<T, IntegrationError> {
        let api_key = required(PLATFORM, "apiKey", &credentials.api_key)?;
        let secret_key = required(PLATFORM, "secretKey", &credentials.secret_key)?;
        let customer_id = required(PLATFORM, "customerId", &credentials.customer_id)?;

        let timestamp = Utc::now().timestamp_millis();
        let signature = naver_ads_signature(secret_key, timestamp, "GET", uri)?;

        let response = self
            .http_client
            .get(format!("{}{}", self.api_base, uri))
            .query(query)
            .header("X-Timestamp", timestamp.to_string())
            .header("X-API-KEY", api_key)
            .header("X-Customer", customer_id)
            .header("X-Signature", signature)
            .send()
            .await
            .map_err(|e| IntegrationError::transport(PLATFORM, e))?;

        ensure_success(PLATFORM, response)
            .await?
            .json()
            .await
            .map_err(|e| IntegrationError::new(PLATFORM, format!("invalid response from {}: {}", uri, e)))
    }
}

#[async_trait]
impl AdPlatformClient for NaverAdsClient {
    fn platform(&self) -> AdPlatform {
        AdPlatform::NaverAds
    }

    async fn fetch_performance(
        &self,
        credentials: &PlatformCredentials,
        range: DateRange,
    ) -> Result<Vec<NormalizedMetric>, IntegrationError> {
        let campaigns: Vec<Campaign> = self.signed_get(credentials, "/ncc/campaigns", &[]).await?;
        if campaigns.is_empty() {
            return Ok(Vec::new());
        }

        let names: HashMap<String, Option<String>> = campaigns
            .iter()
            .map(|c| (c.ncc_campaign_id.clone(), c.name.clone()))
            .collect();
        let ids = campaigns
            .iter()
            .map(|c| c.ncc_campaign_id.as_str())
            .collect::<Vec<_>>()
            .join(",");

        let query = vec![
            ("ids", ids),
            ("fields", json!(["impCnt", "clkCnt", "salesAmt", "ccnt", "convAmt"]).to_string()),
            (
                "timeRange",
                json!({
                    "since": range.start.format("%Y-%m-%d").to_string(),
                    "until": range.end.format("%Y-%m-%d").to_string(),
                })
                .to_string(),
            ),
            ("timeIncrement", "1".to_string()),
        ];
        let stats: StatsResponse = self.signed_get(credentials, "/stats", &query).await?;

        let metrics = stats
            .data
            .into_iter()
            .map(|row| {
                let name = names.get(&row.id).cloned().flatten();
                NormalizedMetric::new(
                    AdPlatform::NaverAds,
                    row.date_start,
                    Some(row.id),
                    name,
                    row.imp_cnt,
                    row.clk_cnt,
                    row.sales_amt,
                    row.ccnt,
                    row.conv_amt,
                )
            })
            .collect();

        Ok(metrics)
    }
}
