use std::sync::Arc;

use crate::shared::database::{CompanyStore, SessionStore, UserStore};
use crate::domains::auth::models::{
    Claims, IssuedToken, LoginRequest, RegisterRequest, SessionCreate, User, UserCreate, SESSION_TTL_DAYS,
};
use crate::domains::auth::services::JwtService;
use crate::shared::errors::{AppError, AuthError};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use argon2::password_hash::{rand_core::OsRng, SaltString};
use chrono::{Duration, Utc};
use tracing::info;

const MIN_PASSWORD_LENGTH: usize = 8;

// 인증 서비스
// AuthService: handles authentication business logic
//
// 토큰은 JWT지만 서버 세션(토큰 SHA-256 해시)과 짝을 이룸
// 로그아웃하면 세션이 무효화되어 토큰 서명이 유효해도 거부됨
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    sessions: Arc<dyn SessionStore>,
    companies: Arc<dyn CompanyStore>,
    jwt_service: JwtService,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserStore>,
        sessions: Arc<dyn SessionStore>,
        companies: Arc<dyn CompanyStore>,
        jwt_service: JwtService,
    ) -> Self {
        Self {
            users,
            sessions,
            companies,
            jwt_service,
        }
    }

    // 회원가입
    // companyId가 없으면 새 회사(테넌트)를 만들고 첫 사용자로 등록
    pub async fn register(&self, request: RegisterRequest) -> Result<User, AppError> {
        let email = normalize_email(&request.email)?;
        if request.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::validation(
                "password",
                format!("Password must be at least {} characters", MIN_PASSWORD_LENGTH),
            ));
        }

        // 1. 이메일 중복 확인
        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailAlreadyExists { email }.into());
        }

        // 2. 회사 확인 또는 생성
        let company = match request.company_id {
            Some(company_id) => self
                .companies
                .find_by_id(company_id)
                .await?
                .ok_or_else(|| AppError::not_found(format!("Company {} not found", company_id)))?,
            None => {
                let name = request
                    .company_name
                    .as_deref()
                    .map(str::trim)
                    .filter(|n| !n.is_empty())
                    .map(str::to_string)
                    .unwrap_or_else(|| email.clone());
                self.companies.create(&name).await?
            }
        };

        // 3. 비밀번호 해싱
        let password_hash = Self::hash_password(&request.password)?;

        // 4. 사용자 생성
        let user = self
            .users
            .create(UserCreate {
                company_id: company.id,
                email,
                password_hash,
                name: request.name,
            })
            .await?;

        info!(user_id = user.id, company_id = user.company_id, "User registered");
        Ok(user)
    }

    // 로그인
    // Returns the user and a bearer token bound to a new session
    pub async fn login(&self, request: LoginRequest) -> Result<(User, IssuedToken), AppError> {
        let email = request.email.trim().to_lowercase();

        // 1. 이메일로 사용자 조회
        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        // 2. 비밀번호 검증
        Self::verify_password(&request.password, &user.password_hash)?;

        // 3. 토큰 발급 + 세션 저장
        let token = self
            .jwt_service
            .generate_token(user.id, user.company_id, user.email.clone())?;
        let expires_at = Utc::now() + Duration::days(SESSION_TTL_DAYS);

        self.sessions
            .create(SessionCreate {
                user_id: user.id,
                token_hash: self.jwt_service.hash_token(&token),
                expires_at,
            })
            .await?;

        info!(user_id = user.id, "User logged in");
        Ok((user, IssuedToken { token, expires_at }))
    }

    /// 로그아웃 - 세션 무효화
    /// Logout - revoke the session behind the token
    pub async fn logout(&self, token: &str) -> Result<(), AppError> {
        let token_hash = self.jwt_service.hash_token(token);

        if !self.sessions.revoke(&token_hash).await? {
            return Err(AuthError::InvalidToken.into());
        }
        Ok(())
    }

    /// 토큰 검증 (서명, 만료, 세션 상태)
    /// Verify a bearer token and the session it belongs to
    pub async fn authenticate(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.jwt_service.verify_token(token)?;

        let session = self
            .sessions
            .find_by_token_hash(&self.jwt_service.hash_token(token))
            .await?
            .ok_or(AuthError::InvalidToken)?;

        if session.revoked || session.user_id != claims.user_id {
            return Err(AuthError::InvalidToken.into());
        }
        if !session.is_usable(Utc::now()) {
            return Err(AuthError::SessionExpired.into());
        }

        Ok(claims)
    }

    pub async fn get_user(&self, user_id: i64) -> Result<User, AppError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::InvalidToken)?; // 사용자가 없으면 InvalidToken 에러

        Ok(user)
    }

    fn hash_password(password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let password_hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::PasswordHashingFailed(e.to_string()))?
            .to_string();

        Ok(password_hash)
    }

    fn verify_password(password: &str, password_hash: &str) -> Result<(), AuthError> {
        let parsed_hash = PasswordHash::new(password_hash)
            .map_err(|e| AuthError::PasswordVerificationFailed(format!("Invalid password hash: {}", e)))?;

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| AuthError::InvalidCredentials)?;

        Ok(())
    }
}

fn normalize_email(raw: &str) -> Result<String, AppError> {
    let email = raw.trim().to_lowercase();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(email),
        _ => Err(AppError::validation("email", "A valid email address is required")),
    }
}
