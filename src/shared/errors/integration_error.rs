use std::fmt::Display;
use thiserror::Error;

/// 외부 플랫폼 연동 에러
/// Error raised by a third-party platform call (ads, marketplace, courier)
///
/// 어떤 플랫폼에서 실패했는지만 담고, 재시도는 하지 않습니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{platform} integration failed: {message}")]
pub struct IntegrationError {
    pub platform: String,
    pub message: String,
}

impl IntegrationError {
    pub fn new(platform: impl Display, message: impl Into<String>) -> Self {
        Self {
            platform: platform.to_string(),
            message: message.into(),
        }
    }

    /// reqwest 에러 변환 (타임아웃 구분)
    /// Wrap a transport error
    pub fn transport(platform: impl Display, err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            format!("request timed out: {}", err)
        } else {
            format!("request failed: {}", err)
        };
        Self::new(platform, message)
    }

    /// 필수 자격증명 누락
    /// A required credential field is missing
    pub fn missing_credential(platform: impl Display, field: &str) -> Self {
        Self::new(platform, format!("missing credential '{}'", field))
    }
}

/// 응답 상태 코드 확인 후 본문 반환
/// Fail with an `IntegrationError` unless the response is 2xx
pub async fn ensure_success(
    platform: impl Display,
    response: reqwest::Response,
) -> Result<reqwest::Response, IntegrationError> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(IntegrationError::new(
        platform,
        format!("API returned error: {} - {}", status, body),
    ))
}
