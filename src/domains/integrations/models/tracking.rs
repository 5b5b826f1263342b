use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use utoipa::ToSchema;

/// 배송 이벤트
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrackingEvent {
    pub time: DateTime<Utc>,
    pub location: Option<String>,
    pub description: String,
}

/// 배송 조회 결과
/// Tracking information returned by a carrier
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = TrackingInfo)]
pub struct TrackingInfo {
    pub tracking_number: String,
    pub carrier_code: String,
    pub carrier_name: String,
    /// 택배사 원본 상태 문자열
    pub status: String,
    pub delivered: bool,
    pub tracking_url: Option<String>,
    pub events: Vec<TrackingEvent>,
}
