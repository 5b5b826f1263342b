use sqlx::{PgPool, Row};
use sqlx::postgres::PgRow;
use anyhow::{Context, Result};
use async_trait::async_trait;
use crate::domains::alerts::models::{Alert, NewAlert};
use crate::shared::database::repositories::parse_column;
use crate::shared::database::stores::AlertStore;

pub struct AlertRepository {
    pool: PgPool,
}

impl AlertRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_alert(row: &PgRow) -> Result<Alert> {
        Ok(Alert {
            id: row.get("id"),
            company_id: row.get("company_id"),
            alert_type: parse_column("alert_type", row.get::<&str, _>("alert_type"))?,
            severity: parse_column("severity", row.get::<&str, _>("severity"))?,
            title: row.get("title"),
            message: row.get("message"),
            metadata: row.get("metadata"),
            is_read: row.get("is_read"),
            created_at: row.get("created_at"),
        })
    }
}

#[async_trait]
impl AlertStore for AlertRepository {
    async fn create(&self, alert: NewAlert) -> Result<Alert> {
        let row = sqlx::query(
            r#"
            INSERT INTO alerts (company_id, alert_type, severity, title, message, metadata, is_read, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, FALSE, NOW())
            RETURNING id, company_id, alert_type, severity, title, message, metadata, is_read, created_at
            "#,
        )
        .bind(alert.company_id)
        .bind(alert.alert_type.as_str())
        .bind(alert.severity.as_str())
        .bind(&alert.title)
        .bind(&alert.message)
        .bind(&alert.metadata)
        .fetch_one(&self.pool)
        .await
        .context("Failed to create alert")?;

        Self::row_to_alert(&row)
    }

    async fn list(&self, company_id: i64, unread_only: bool, limit: i64) -> Result<Vec<Alert>> {
        let rows = sqlx::query(
            r#"
            SELECT id, company_id, alert_type, severity, title, message, metadata, is_read, created_at
            FROM alerts
            WHERE company_id = $1 AND ($2 = FALSE OR is_read = FALSE)
            ORDER BY created_at DESC, id DESC
            LIMIT $3
            "#,
        )
        .bind(company_id)
        .bind(unread_only)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .context("Failed to list alerts")?;

        rows.iter().map(Self::row_to_alert).collect()
    }

    async fn unread_count(&self, company_id: i64) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM alerts WHERE company_id = $1 AND is_read = FALSE
            "#,
        )
        .bind(company_id)
        .fetch_one(&self.pool)
        .await
        .context("Failed to count unread alerts")?;

        Ok(count)
    }

    async fn mark_read(&self, company_id: i64, alert_id: i64) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE alerts
            SET is_read = TRUE
            WHERE id = $1 AND company_id = $2
            "#,
        )
        .bind(alert_id)
        .bind(company_id)
        .execute(&self.pool)
        .await
        .context("Failed to mark alert as read")?;

        Ok(result.rows_affected() > 0)
    }
}
