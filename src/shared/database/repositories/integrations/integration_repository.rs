use sqlx::{PgPool, Row};
use sqlx::postgres::PgRow;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use crate::domains::integrations::models::{PlatformCredentials, PlatformIntegration};
use crate::shared::database::stores::IntegrationStore;

pub struct IntegrationRepository {
    pool: PgPool,
}

impl IntegrationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_integration(row: &PgRow) -> Result<PlatformIntegration> {
        let id: i64 = row.get("id");
        let credentials: PlatformCredentials = serde_json::from_value(row.get("credentials"))
            .with_context(|| format!("Malformed credentials for integration {}", id))?;

        Ok(PlatformIntegration {
            id,
            company_id: row.get("company_id"),
            platform: row.get("platform"),
            credentials,
            is_active: row.get("is_active"),
            last_synced_at: row.get("last_synced_at"),
        })
    }
}

#[async_trait]
impl IntegrationStore for IntegrationRepository {
    async fn list_active(&self, company_id: i64) -> Result<Vec<PlatformIntegration>> {
        let rows = sqlx::query(
            r#"
            SELECT id, company_id, platform, credentials, is_active, last_synced_at
            FROM platform_integrations
            WHERE company_id = $1 AND is_active = TRUE
            ORDER BY id ASC
            "#,
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch platform integrations")?;

        rows.iter().map(Self::row_to_integration).collect()
    }

    async fn mark_synced(&self, integration_id: i64, at: DateTime<Utc>) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE platform_integrations
            SET last_synced_at = $1
            WHERE id = $2
            "#,
        )
        .bind(at)
        .bind(integration_id)
        .execute(&self.pool)
        .await
        .context("Failed to update last_synced_at")?;

        Ok(())
    }
}
