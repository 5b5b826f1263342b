use sqlx::{PgPool, Row};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use crate::domains::alerts::models::CashFlowDaily;
use crate::shared::database::stores::CashFlowStore;

pub struct CashFlowRepository {
    pool: PgPool,
}

impl CashFlowRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CashFlowStore for CashFlowRepository {
    async fn find_since(&self, company_id: i64, since: NaiveDate) -> Result<Vec<CashFlowDaily>> {
        let rows = sqlx::query(
            r#"
            SELECT company_id, date, inflow, outflow, closing_balance
            FROM cash_flow_daily
            WHERE company_id = $1 AND date >= $2
            ORDER BY date ASC
            "#,
        )
        .bind(company_id)
        .bind(since)
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch cash flow")?;

        Ok(rows
            .iter()
            .map(|row| CashFlowDaily {
                company_id: row.get("company_id"),
                date: row.get("date"),
                inflow: row.get("inflow"),
                outflow: row.get("outflow"),
                closing_balance: row.get("closing_balance"),
            })
            .collect())
    }
}
