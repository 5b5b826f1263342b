use serde::Serialize;
use chrono::{DateTime, Utc};
use utoipa::ToSchema;

/// 회사 (테넌트)
/// Company (tenant): every order, alert and integration belongs to exactly one
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
