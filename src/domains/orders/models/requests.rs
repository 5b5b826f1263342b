use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::history::StatusHistory;
use super::order::Order;
use super::status::OrderStatus;

// =====================================================
// 주문 관리 API 요청/응답 모델
// =====================================================
// 쿼리/바디의 enum 값은 문자열로 받아서 서비스 계층에서 검증합니다.
// (잘못된 값이면 400 + { success: false, message, field })
// =====================================================

/// 주문 목록 쿼리
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListOrdersQuery {
    /// new, confirmed, preparing, shipped, delivered, cancelled, returned
    pub status: Option<String>,
    /// coupang, naver, gmarket, smartstore, 11st, auction, website, amazon, ebay
    pub platform: Option<String>,
    /// 주문번호/고객명/상품명 검색
    pub search: Option<String>,
    /// RFC 3339 또는 YYYY-MM-DD
    pub date_from: Option<String>,
    /// RFC 3339 또는 YYYY-MM-DD (해당 날짜 포함)
    pub date_to: Option<String>,
    /// 1부터 시작 (기본 1)
    pub page: Option<i64>,
    /// 기본 20, 최대 100
    pub limit: Option<i64>,
}

/// 주문 상태 변경 요청
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = UpdateStatusRequest)]
pub struct UpdateStatusRequest {
    #[schema(example = "shipped")]
    pub status: String,
    #[schema(example = "CJ999")]
    pub tracking_number: Option<String>,
    /// 택배사 코드
    #[schema(example = "CJ")]
    pub shipping_company: Option<String>,
    pub reason: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<serde_json::Value>,
}

/// 서비스 계층 상태 변경 명령 (검증 완료)
/// Validated status change command
#[derive(Debug, Clone)]
pub struct StatusChange {
    pub status: OrderStatus,
    pub tracking_number: Option<String>,
    pub carrier_code: Option<String>,
    pub reason: Option<String>,
    pub metadata: Option<serde_json::Value>,
}

impl StatusChange {
    pub fn to(status: OrderStatus) -> Self {
        Self {
            status,
            tracking_number: None,
            carrier_code: None,
            reason: None,
            metadata: None,
        }
    }

    pub fn with_tracking(mut self, tracking_number: impl Into<String>, carrier_code: Option<String>) -> Self {
        self.tracking_number = Some(tracking_number.into());
        self.carrier_code = carrier_code;
        self
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

/// 일괄 출고 요청
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = BulkShipRequest)]
pub struct BulkShipRequest {
    pub order_ids: Vec<i64>,
    pub shipping_company_id: i64,
}

/// 일괄 출고 건별 결과
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkShipResult {
    pub order_id: i64,
    pub success: bool,
    pub tracking_number: Option<String>,
    pub message: Option<String>,
}

/// 일괄 출고 응답
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = BulkShipResponse)]
pub struct BulkShipResponse {
    pub success: bool,
    pub message: String,
    pub results: Vec<BulkShipResult>,
}

/// 주문 취소 요청
#[derive(Debug, Default, Deserialize, ToSchema)]
#[schema(as = CancelOrderRequest)]
pub struct CancelOrderRequest {
    /// 취소 사유 (필수)
    #[schema(example = "changed mind")]
    pub reason: Option<String>,
}

/// 단순 처리 결과 응답
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = ActionResponse)]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
}

impl ActionResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self { success: true, message: message.into() }
    }
}

/// 배송 조회 쿼리
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct TrackingQuery {
    /// 택배사 코드
    pub company_code: Option<String>,
}

/// 통계 쿼리
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct StatsQuery {
    /// 생략 시 로그인 사용자의 회사
    pub company_id: Option<i64>,
    /// daily | weekly | monthly (기본 daily)
    pub period: Option<String>,
}

/// 주문 상세 (이력 포함)
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = OrderDetail)]
pub struct OrderDetail {
    pub order: Order,
    pub history: Vec<StatusHistory>,
}

/// 클레임 생성 요청
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = CreateClaimRequest)]
pub struct CreateClaimRequest {
    /// return | exchange
    #[schema(example = "return")]
    pub claim_type: String,
    pub reason: Option<String>,
}

/// 클레임 처리 요청
#[derive(Debug, Deserialize, ToSchema)]
#[schema(as = ProcessClaimRequest)]
pub struct ProcessClaimRequest {
    /// approved | rejected | completed
    #[schema(example = "approved")]
    pub status: String,
}

/// 클레임 목록 쿼리
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ClaimsQuery {
    pub status: Option<String>,
}

/// 단건 주문 변경 응답 (상태 변경/취소)
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = OrderActionResponse)]
pub struct OrderActionResponse {
    pub success: bool,
    pub message: String,
    pub order: Order,
}
