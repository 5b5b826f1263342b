// src/domains/auth/services/jwt_service.rs
use crate::shared::errors::AuthError;
use crate::domains::auth::models::jwt::Claims;
use crate::domains::auth::models::SESSION_TTL_DAYS;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use sha2::{Sha256, Digest};
use rand::Rng;
use rand::distributions::Alphanumeric;

/// JWT 서비스
/// JWT Service for token generation and verification
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    /// JWT Service 생성
    /// Create JWT Service
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// 세션 토큰 발급 (7일)
    /// Generate a bearer token that lives as long as its session
    pub fn generate_token(&self, user_id: i64, company_id: i64, email: String) -> Result<String, AuthError> {
        let claims = Claims::new(user_id, company_id, email, Self::generate_jti(), SESSION_TTL_DAYS * 24);

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::TokenIssueFailed(e.to_string()))
    }

    /// 토큰 고유 ID (32자 랜덤 문자열)
    fn generate_jti() -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(32)
            .map(char::from)
            .collect()
    }

    /// 토큰 해싱 (세션 저장/조회용)
    /// Hash a token for session storage
    pub fn hash_token(&self, token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// 토큰 검증 (서명 + 만료)
    /// Verify signature and expiry. Session state is checked by AuthService.
    pub fn verify_token(&self, token: &str) -> Result<Claims, AuthError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::SessionExpired,
                _ => AuthError::InvalidToken,
            })?;

        Ok(token_data.claims)
    }
}
