use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// 대시보드 지표 (섹션 + 지표 이름으로 식별)
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = DashboardMetric)]
pub struct DashboardMetric {
    #[schema(example = "totalRevenue")]
    pub metric_name: String,
    #[schema(example = "₩12,345,000")]
    pub value: String,
    #[schema(example = "+12.5%")]
    pub change: Option<String>,
    #[schema(example = "vs last month")]
    pub period: Option<String>,
}

/// 차트 데이터 (섹션 + 차트 ID로 식별)
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = ChartData)]
pub struct ChartData {
    pub chart_id: String,
    #[schema(value_type = Object)]
    pub data: serde_json::Value,
}

/// 차트 조회 쿼리
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ChartQuery {
    pub chart_id: Option<String>,
}

/// 지표 저장 요청
#[derive(Debug, Deserialize, ToSchema)]
#[schema(as = UpsertMetricRequest)]
pub struct UpsertMetricRequest {
    pub value: String,
    pub change: Option<String>,
    pub period: Option<String>,
}

/// 차트 저장 요청
#[derive(Debug, Deserialize, ToSchema)]
#[schema(as = UpsertChartRequest)]
pub struct UpsertChartRequest {
    #[schema(value_type = Object)]
    pub data: serde_json::Value,
}
