use chrono::{DateTime, Utc};
use uuid::Uuid;

/// 세션 유효 기간 (7일)
/// Session lifetime
pub const SESSION_TTL_DAYS: i64 = 7;

/// 서버 측 세션 (토큰 해시로 조회)
/// Server-side session keyed by the SHA-256 hash of the bearer token
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub user_id: i64,
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
    pub revoked: bool,
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// 사용 가능한 세션인지 (로그아웃/만료 아님)
    pub fn is_usable(&self, now: DateTime<Utc>) -> bool {
        !self.revoked && self.expires_at > now
    }
}

/// 세션 생성 데이터
#[derive(Debug, Clone)]
pub struct SessionCreate {
    pub user_id: i64,
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
}
