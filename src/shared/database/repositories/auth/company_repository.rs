use sqlx::{PgPool, Row};
use sqlx::postgres::PgRow;
use anyhow::{Context, Result};
use async_trait::async_trait;
use crate::domains::auth::models::Company;
use crate::shared::database::stores::CompanyStore;

pub struct CompanyRepository {
    pool: PgPool,
}

impl CompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_company(row: &PgRow) -> Company {
        Company {
            id: row.get("id"),
            name: row.get("name"),
            is_active: row.get("is_active"),
            created_at: row.get("created_at"),
        }
    }
}

#[async_trait]
impl CompanyStore for CompanyRepository {
    async fn create(&self, name: &str) -> Result<Company> {
        let row = sqlx::query(
            r#"
            INSERT INTO companies (name, is_active, created_at)
            VALUES ($1, TRUE, NOW())
            RETURNING id, name, is_active, created_at
            "#,
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .context("Failed to create company")?;

        Ok(Self::row_to_company(&row))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Company>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, is_active, created_at
            FROM companies
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch company by id")?;

        Ok(row.map(|r| Self::row_to_company(&r)))
    }

    async fn list_active(&self) -> Result<Vec<Company>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, is_active, created_at
            FROM companies
            WHERE is_active = TRUE
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch active companies")?;

        Ok(rows.iter().map(Self::row_to_company).collect())
    }
}
