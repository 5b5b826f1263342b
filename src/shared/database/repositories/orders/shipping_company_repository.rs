use sqlx::{PgPool, Row};
use sqlx::postgres::PgRow;
use anyhow::{Context, Result};
use async_trait::async_trait;
use crate::domains::orders::models::ShippingCompany;
use crate::shared::database::stores::ShippingCompanyStore;

pub struct ShippingCompanyRepository {
    pool: PgPool,
}

impl ShippingCompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_company(row: &PgRow) -> ShippingCompany {
        ShippingCompany {
            id: row.get("id"),
            name: row.get("name"),
            code: row.get("code"),
            tracking_url_template: row.get("tracking_url_template"),
            api_endpoint: row.get("api_endpoint"),
            api_key: row.get("api_key"),
            is_active: row.get("is_active"),
        }
    }
}

#[async_trait]
impl ShippingCompanyStore for ShippingCompanyRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<ShippingCompany>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, code, tracking_url_template, api_endpoint, api_key, is_active
            FROM shipping_companies
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch shipping company by id")?;

        Ok(row.map(|r| Self::row_to_company(&r)))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShippingCompany>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, code, tracking_url_template, api_endpoint, api_key, is_active
            FROM shipping_companies
            WHERE UPPER(code) = UPPER($1)
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch shipping company by code")?;

        Ok(row.map(|r| Self::row_to_company(&r)))
    }

    async fn list_active(&self) -> Result<Vec<ShippingCompany>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, code, tracking_url_template, api_endpoint, api_key, is_active
            FROM shipping_companies
            WHERE is_active = TRUE
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to list shipping companies")?;

        Ok(rows.iter().map(Self::row_to_company).collect())
    }
}
