use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use utoipa::ToSchema;
use crate::domains::auth::models::user::UserResponse;

// 회원가입 요청 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = RegisterRequest)]
pub struct RegisterRequest {
    /// Email address
    /// 이메일 주소
    #[schema(example = "admin@example.com")]
    pub email: String,

    /// Password (will be hashed, at least 8 characters)
    /// 비밀번호 (해싱됨, 8자 이상)
    #[schema(example = "password123")]
    pub password: String,

    /// Display name (optional)
    #[schema(example = "홍길동")]
    pub name: Option<String>,

    /// Existing company to join
    /// 가입할 기존 회사 ID (없으면 companyName으로 새 회사 생성)
    pub company_id: Option<i64>,

    /// Name of a new company to create
    #[schema(example = "My Shop")]
    pub company_name: Option<String>,
}

// 로그인 요청 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = LoginRequest)]
pub struct LoginRequest {
    #[schema(example = "admin@example.com")]
    pub email: String,

    #[schema(example = "password123")]
    pub password: String,
}

// 회원가입 응답 모델
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = RegisterResponse)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
    pub user: UserResponse,
}

// 로그인 응답 모델
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = LoginResponse)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,

    /// Bearer token (7일 유효, 서버 세션과 연결)
    /// Bearer token, valid for 7 days and bound to a server-side session
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,

    pub expires_at: DateTime<Utc>,
    pub user: UserResponse,
}

// 토큰 검증 응답 모델
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = VerifyResponse)]
pub struct VerifyResponse {
    pub success: bool,
    pub user: UserResponse,
}

/// 발급된 세션 토큰
/// A freshly issued bearer token and its expiry
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}
