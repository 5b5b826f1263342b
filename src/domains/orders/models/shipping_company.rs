use serde::Serialize;
use utoipa::ToSchema;

/// 택배사 (참조 데이터, 주문 흐름에서는 읽기 전용)
/// Shipping company reference data
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShippingCompany {
    pub id: i64,
    #[schema(example = "CJ대한통운")]
    pub name: String,
    /// 택배사 코드
    #[schema(example = "CJ")]
    pub code: String,
    /// 배송 조회 URL 템플릿 (`{trackingNumber}` 치환)
    pub tracking_url_template: Option<String>,
    pub api_endpoint: Option<String>,
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub is_active: bool,
}

impl ShippingCompany {
    /// 배송 조회 URL
    pub fn tracking_url(&self, tracking_number: &str) -> Option<String> {
        self.tracking_url_template
            .as_ref()
            .map(|template| template.replace("{trackingNumber}", tracking_number))
    }
}
