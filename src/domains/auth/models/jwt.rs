use serde::{Deserialize, Serialize};

/// JWT Claims (토큰에 포함될 데이터)
/// JWT Claims (data to be included in token)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// 사용자 ID
    pub user_id: i64,

    /// 회사(테넌트) ID
    pub company_id: i64,

    /// 이메일
    pub email: String,

    /// 토큰 고유 ID (같은 초에 발급된 토큰도 구분)
    /// Unique token id, so two logins in the same second never share a session hash
    pub jti: String,

    /// 만료 시간 (Unix timestamp)
    pub exp: i64,

    /// 발급 시간 (Unix timestamp)
    pub iat: i64,
}

impl Claims {
    /// 새 Claims 생성 (만료 시간 자동 계산)
    /// Create new Claims (expiration time automatically calculated)
    pub fn new(user_id: i64, company_id: i64, email: String, jti: String, expiration_hours: i64) -> Self {
        let now = chrono::Utc::now().timestamp();
        let exp = now + (expiration_hours * 3600);

        Self {
            user_id,
            company_id,
            email,
            jti,
            exp,
            iat: now,
        }
    }
}
