// Integrations domain services
pub mod registry;
pub mod order_sync;
pub mod ad_sync;

pub use registry::*;
pub use order_sync::*;
pub use ad_sync::*;

use serde::Serialize;

use crate::shared::errors::{AppError, IntegrationError};

/// 테넌트 한 곳의 동기화 결과
/// Outcome of syncing one tenant's integrations
#[derive(Debug, Default, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncReport {
    pub integrations: usize,
    pub fetched: usize,
    pub stored: usize,
    #[serde(skip)]
    pub failures: Vec<IntegrationError>,
}

impl SyncReport {
    /// 실패한 연동이 하나라도 있으면 에러 (나머지 연동은 이미 처리됨)
    /// Any failed integration fails the tenant, after the others have run
    pub fn into_result(mut self) -> Result<SyncReport, AppError> {
        if self.failures.is_empty() {
            return Ok(self);
        }
        Err(AppError::Integration(self.failures.remove(0)))
    }
}
