use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use crate::shared::services::AppState;
use crate::shared::errors::{AppError, AuthError, ErrorResponse};

/// 인증된 사용자 정보 (Bearer 토큰 + 서버 세션 확인 후)
/// Authenticated user information, extracted from a bearer token whose session is still live
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub company_id: i64,
    pub email: String,
    /// 원본 토큰 (로그아웃 시 세션 무효화용)
    pub token: String,
}

/// AuthenticatedUser를 Axum Extractor로 구현
///
/// 사용법:
/// ```rust,ignore
/// pub async fn list_orders(
///     State(app_state): State<AppState>,
///     user: AuthenticatedUser,  // <- 이렇게 사용!
/// ) -> Result<...> {
///     let company_id = user.company_id;
///     // ...
/// }
/// ```
#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ErrorResponse;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // 1. Authorization 헤더에서 토큰 추출
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingToken)?
            .to_str()
            .map_err(|_| AuthError::InvalidToken)?;

        // 2. "Bearer <token>" 형식 파싱
        let token = auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::MissingToken)?;

        // 3. 서명/만료 + 세션 확인
        let claims = state
            .auth_state
            .auth_service
            .authenticate(token)
            .await
            .map_err(|e: AppError| -> ErrorResponse { e.into() })?;

        // 4. AuthenticatedUser 반환
        Ok(AuthenticatedUser {
            user_id: claims.user_id,
            company_id: claims.company_id,
            email: claims.email,
            token: token.to_string(),
        })
    }
}
