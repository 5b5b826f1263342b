use sqlx::{PgPool, Row};
use sqlx::postgres::PgRow;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use crate::domains::orders::models::{ClaimCreate, ClaimStatus, OrderClaim};
use crate::shared::database::repositories::parse_column;
use crate::shared::database::stores::ClaimStore;

pub struct ClaimRepository {
    pool: PgPool,
}

impl ClaimRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_claim(row: &PgRow) -> Result<OrderClaim> {
        Ok(OrderClaim {
            id: row.get("id"),
            order_id: row.get("order_id"),
            company_id: row.get("company_id"),
            claim_type: parse_column("claim_type", row.get::<&str, _>("claim_type"))?,
            reason: row.get("reason"),
            status: parse_column("status", row.get::<&str, _>("status"))?,
            created_at: row.get("created_at"),
            processed_at: row.get("processed_at"),
        })
    }
}

#[async_trait]
impl ClaimStore for ClaimRepository {
    async fn create(&self, claim: ClaimCreate) -> Result<OrderClaim> {
        let row = sqlx::query(
            r#"
            INSERT INTO order_claims (order_id, company_id, claim_type, reason, status, created_at)
            VALUES ($1, $2, $3, $4, 'requested', NOW())
            RETURNING id, order_id, company_id, claim_type, reason, status, created_at, processed_at
            "#,
        )
        .bind(claim.order_id)
        .bind(claim.company_id)
        .bind(claim.claim_type.as_str())
        .bind(&claim.reason)
        .fetch_one(&self.pool)
        .await
        .context("Failed to create claim")?;

        Self::row_to_claim(&row)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<OrderClaim>> {
        let row = sqlx::query(
            r#"
            SELECT id, order_id, company_id, claim_type, reason, status, created_at, processed_at
            FROM order_claims
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch claim by id")?;

        row.map(|r| Self::row_to_claim(&r)).transpose()
    }

    async fn list(&self, company_id: i64, status: Option<ClaimStatus>) -> Result<Vec<OrderClaim>> {
        let rows = sqlx::query(
            r#"
            SELECT id, order_id, company_id, claim_type, reason, status, created_at, processed_at
            FROM order_claims
            WHERE company_id = $1 AND ($2::TEXT IS NULL OR status = $2)
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(company_id)
        .bind(status.map(|s| s.as_str()))
        .fetch_all(&self.pool)
        .await
        .context("Failed to list claims")?;

        rows.iter().map(Self::row_to_claim).collect()
    }

    async fn update_status(
        &self,
        id: i64,
        from: ClaimStatus,
        to: ClaimStatus,
        processed_at: Option<DateTime<Utc>>,
    ) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE order_claims
            SET status = $1, processed_at = $2
            WHERE id = $3 AND status = $4
            "#,
        )
        .bind(to.as_str())
        .bind(processed_at)
        .bind(id)
        .bind(from.as_str())
        .execute(&self.pool)
        .await
        .context("Failed to update claim status")?;

        Ok(result.rows_affected() > 0)
    }
}
