use thiserror::Error;
use axum::http::StatusCode;

/// 인증 관련 에러
/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// 이메일이 이미 존재함
    /// Email already exists
    #[error("Email already exists: {email}")]
    EmailAlreadyExists { email: String },

    /// 잘못된 이메일 또는 비밀번호
    /// Invalid email or password
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// 비밀번호 해싱 실패
    /// Failed to hash password
    #[error("Failed to hash password: {0}")]
    PasswordHashingFailed(String),

    /// 비밀번호 검증 실패
    /// Failed to verify password
    #[error("Failed to verify password: {0}")]
    PasswordVerificationFailed(String),

    /// 토큰 발급 실패
    /// Failed to issue token
    #[error("Failed to issue token: {0}")]
    TokenIssueFailed(String),

    /// 잘못된 토큰 (서명 오류, 세션 없음, 로그아웃됨)
    /// Invalid token (bad signature, unknown or revoked session)
    #[error("Invalid or expired token")]
    InvalidToken,

    /// 세션 만료
    /// Session expired
    #[error("Session expired")]
    SessionExpired,

    /// 토큰이 제공되지 않음
    /// Token not provided
    #[error("Token not provided")]
    MissingToken,
}

impl AuthError {
    /// HTTP 상태 코드
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::EmailAlreadyExists { .. } => StatusCode::BAD_REQUEST,
            AuthError::InvalidCredentials
            | AuthError::InvalidToken
            | AuthError::SessionExpired
            | AuthError::MissingToken => StatusCode::UNAUTHORIZED,
            AuthError::PasswordHashingFailed(_)
            | AuthError::PasswordVerificationFailed(_)
            | AuthError::TokenIssueFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 클라이언트에 노출 가능한 에러인지 여부
    /// Whether the message can be shown to the client as-is
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}
