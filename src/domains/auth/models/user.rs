use serde::Serialize;
use chrono::{DateTime, Utc};
use utoipa::ToSchema;

/// 사용자 모델 (DB 저장용, 비밀번호 해시 포함)
/// User model (database row, includes password hash)
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub company_id: i64,
    pub email: String,
    pub password_hash: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 사용자 생성 데이터
/// Data needed to insert a user
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub company_id: i64,
    pub email: String,
    pub password_hash: String,
    pub name: Option<String>,
}

/// 사용자 응답 (비밀번호 제외)
/// User response (without password)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = 1)]
    pub company_id: i64,
    #[schema(example = "admin@example.com")]
    pub email: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            company_id: user.company_id,
            email: user.email,
            name: user.name,
            created_at: user.created_at,
        }
    }
}
