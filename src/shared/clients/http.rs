use std::time::Duration;
use anyhow::{Context, Result};

/// 외부 API 호출용 HTTP 클라이언트 생성
/// Build the shared HTTP client used by every platform integrator
///
/// 모든 외부 호출에 타임아웃을 적용해서 스케줄러가 무기한 대기하지 않도록 합니다.
pub fn build_http_client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .danger_accept_invalid_certs(false)
        .timeout(timeout)
        .connect_timeout(timeout.min(Duration::from_secs(10)))
        .user_agent("commerce-dashboard/1.0")
        .build()
        .context("Failed to create HTTP client")
}
