use thiserror::Error;
use axum::{http::StatusCode, Json};
use serde_json::json;

use super::{AuthError, IntegrationError};

/// 핸들러 에러 응답 타입
/// Error response returned by every handler: `{ success: false, message }`
pub type ErrorResponse = (StatusCode, Json<serde_json::Value>);

/// 애플리케이션 공통 에러
/// Application-wide error taxonomy
///
/// 서비스 계층은 이 타입을 반환하고, 핸들러는 `?`로 HTTP 응답으로 변환합니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 잘못된 요청 (400)
    /// Malformed request body or query
    #[error("{message}")]
    Validation {
        field: Option<String>,
        message: String,
    },

    /// 리소스 없음 (404)
    #[error("{0}")]
    NotFound(String),

    /// 인증 실패 (401)
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// 다른 테넌트의 리소스 접근 (403)
    #[error("{0}")]
    Forbidden(String),

    /// 허용되지 않는 상태 전이 (409)
    /// Illegal state transition, e.g. cancelling a shipped order
    #[error("{0}")]
    InvalidState(String),

    /// 동시 수정 충돌 (409)
    /// The row changed underneath us (optimistic version check)
    #[error("{0}")]
    Conflict(String),

    /// 외부 API 실패 (500)
    #[error(transparent)]
    Integration(#[from] IntegrationError),

    /// 예상하지 못한 에러 (500)
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Validation {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound(message.into())
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        AppError::InvalidState(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Auth(e) => e.status_code(),
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::InvalidState(_) | AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Integration(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// AppError를 HTTP 응답으로 변환
/// 내부 에러는 로그에만 상세 내용을 남기고 클라이언트에는 일반 메시지만 반환
impl From<AppError> for ErrorResponse {
    fn from(err: AppError) -> Self {
        let status = err.status_code();

        let body = match &err {
            AppError::Validation { field, message } => json!({
                "success": false,
                "message": message,
                "field": field,
            }),
            AppError::Integration(e) => {
                tracing::error!(platform = %e.platform, "Upstream call failed: {}", e.message);
                json!({
                    "success": false,
                    "message": format!("Upstream service error ({})", e.platform),
                })
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {:#}", e);
                json!({ "success": false, "message": "Internal server error" })
            }
            AppError::Auth(e) if !e.is_client_error() => {
                tracing::error!("Authentication failure: {}", e);
                json!({ "success": false, "message": "Internal server error" })
            }
            _ => json!({ "success": false, "message": err.to_string() }),
        };

        (status, Json(body))
    }
}

impl From<AuthError> for ErrorResponse {
    fn from(err: AuthError) -> Self {
        AppError::from(err).into()
    }
}
