use crate::domains::auth::models::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, VerifyResponse,
};
use crate::domains::orders::models::ActionResponse;
use crate::shared::services::AppState;
use crate::shared::errors::ErrorResponse;
use crate::shared::middleware::{AppJson, AuthenticatedUser};
use axum::{extract::State, http::StatusCode, Json};

// 회원가입 핸들러
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User created successfully", body = RegisterResponse),
        (status = 400, description = "Bad request (invalid input or email already exists)"),
        (status = 404, description = "Company not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn register(
    State(app_state): State<AppState>,
    AppJson(request): AppJson<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ErrorResponse> {
    // Service 호출 (비즈니스 로직)
    let user = app_state
        .auth_state
        .auth_service
        .register(request)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            success: true,
            message: "User created successfully".to_string(),
            user: user.into(),
        }),
    ))
}

// 로그인 핸들러
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid email or password"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(app_state): State<AppState>,
    AppJson(request): AppJson<LoginRequest>,
) -> Result<Json<LoginResponse>, ErrorResponse> {
    let (user, issued) = app_state
        .auth_state
        .auth_service
        .login(request)
        .await?;

    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful".to_string(),
        token: issued.token,
        expires_at: issued.expires_at,
        user: user.into(),
    }))
}

/// 로그아웃 핸들러
/// Logout handler: revokes the session of the presented token
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Logout successful", body = ActionResponse),
        (status = 401, description = "Invalid token"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("BearerAuth" = [])
    ),
    tag = "Auth"
)]
pub async fn logout(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
) -> Result<Json<ActionResponse>, ErrorResponse> {
    app_state
        .auth_state
        .auth_service
        .logout(&authenticated_user.token)
        .await?;

    Ok(Json(ActionResponse::ok("Logout successful")))
}

#[utoipa::path(
    get,
    path = "/api/auth/verify",
    responses(
        (status = 200, description = "Token is valid", body = VerifyResponse),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("BearerAuth" = [])
    ),
    tag = "Auth"
)]
pub async fn verify(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
) -> Result<Json<VerifyResponse>, ErrorResponse> {
    let user = app_state
        .auth_state
        .auth_service
        .get_user(authenticated_user.user_id)
        .await?;

    Ok(Json(VerifyResponse {
        success: true,
        user: user.into(),
    }))
}
