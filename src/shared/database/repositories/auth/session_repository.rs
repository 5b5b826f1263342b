use sqlx::{PgPool, Row};
use sqlx::postgres::PgRow;
use anyhow::{Context, Result};
use async_trait::async_trait;
use uuid::Uuid;
use crate::domains::auth::models::{Session, SessionCreate};
use crate::shared::database::stores::SessionStore;

/// Session Repository
/// 세션 데이터베이스 작업 처리 (토큰 원문은 저장하지 않음)
pub struct SessionRepository {
    pool: PgPool,
}

impl SessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_session(row: &PgRow) -> Session {
        Session {
            id: row.get("id"),
            user_id: row.get("user_id"),
            token_hash: row.get("token_hash"),
            expires_at: row.get("expires_at"),
            revoked: row.get("revoked"),
            created_at: row.get("created_at"),
        }
    }
}

#[async_trait]
impl SessionStore for SessionRepository {
    /// 세션 생성 (저장)
    async fn create(&self, data: SessionCreate) -> Result<Session> {
        let row = sqlx::query(
            r#"
            INSERT INTO sessions (id, user_id, token_hash, expires_at, revoked, created_at)
            VALUES ($1, $2, $3, $4, FALSE, NOW())
            RETURNING id, user_id, token_hash, expires_at, revoked, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(data.user_id)
        .bind(&data.token_hash)
        .bind(data.expires_at)
        .fetch_one(&self.pool)
        .await
        .context("Failed to create session")?;

        Ok(Self::row_to_session(&row))
    }

    /// 세션 조회 (token_hash로)
    async fn find_by_token_hash(&self, token_hash: &str) -> Result<Option<Session>> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, token_hash, expires_at, revoked, created_at
            FROM sessions
            WHERE token_hash = $1
            "#,
        )
        .bind(token_hash)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to find session")?;

        Ok(row.map(|r| Self::row_to_session(&r)))
    }

    /// 세션 무효화 (로그아웃)
    async fn revoke(&self, token_hash: &str) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE sessions
            SET revoked = TRUE
            WHERE token_hash = $1 AND revoked = FALSE
            "#,
        )
        .bind(token_hash)
        .execute(&self.pool)
        .await
        .context("Failed to revoke session")?;

        Ok(result.rows_affected() > 0)
    }
}
