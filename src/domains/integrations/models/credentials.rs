use serde::{Deserialize, Serialize};

use crate::shared::errors::IntegrationError;

/// 플랫폼 자격증명 (platform_integrations.credentials JSONB)
/// Per-tenant credentials for one platform; each client reads the fields it needs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlatformCredentials {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    /// Google Ads developer token
    pub developer_token: Option<String>,
    pub api_key: Option<String>,
    pub secret_key: Option<String>,
    /// Google Ads / Naver 광고 고객 ID
    pub customer_id: Option<String>,
    /// Google Ads MCC (login-customer-id)
    pub login_customer_id: Option<String>,
    /// Facebook 광고 계정 ID (act_ 제외)
    pub account_id: Option<String>,
    /// 쿠팡 업체 코드
    pub vendor_id: Option<String>,
}

/// 필수 필드 조회
/// Borrow a required credential field or fail with the platform name
pub fn required<'a>(
    platform: &str,
    field: &str,
    value: &'a Option<String>,
) -> Result<&'a str, IntegrationError> {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| IntegrationError::missing_credential(platform, field))
}
