// Auth domain state
// 인증 도메인 상태
use crate::shared::database::Stores;
use crate::domains::auth::services::{AuthService, JwtService};

/// Auth domain state
/// 인증 도메인에서 필요한 서비스들을 포함하는 상태
#[derive(Clone)]
pub struct AuthState {
    pub auth_service: AuthService,
}

impl AuthState {
    /// Create AuthState with stores and JWT secret
    /// AuthState 생성
    pub fn new(stores: &Stores, jwt_secret: &str) -> Self {
        let jwt_service = JwtService::new(jwt_secret);
        Self {
            auth_service: AuthService::new(
                stores.users.clone(),
                stores.sessions.clone(),
                stores.companies.clone(),
                jwt_service,
            ),
        }
    }
}
