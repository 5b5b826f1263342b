use sqlx::{PgPool, Postgres, QueryBuilder, Row};
use sqlx::postgres::PgRow;
use anyhow::{Context, Result};
use async_trait::async_trait;
use crate::domains::integrations::models::{DateRange, NormalizedMetric};
use crate::shared::database::repositories::parse_column;
use crate::shared::database::stores::AdPerformanceStore;

pub struct AdPerformanceRepository {
    pool: PgPool,
}

impl AdPerformanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_metric(row: &PgRow) -> Result<NormalizedMetric> {
        Ok(NormalizedMetric {
            platform: parse_column("platform", row.get::<&str, _>("platform"))?,
            date: row.get("date"),
            campaign_id: row.get("campaign_id"),
            campaign_name: row.get("campaign_name"),
            impressions: row.get("impressions"),
            clicks: row.get("clicks"),
            cost: row.get("cost"),
            conversions: row.get("conversions"),
            revenue: row.get("revenue"),
            ctr: row.get("ctr"),
            cpc: row.get("cpc"),
            roas: row.get("roas"),
        })
    }
}

#[async_trait]
impl AdPerformanceStore for AdPerformanceRepository {
    async fn insert_many(&self, company_id: i64, metrics: &[NormalizedMetric]) -> Result<u64> {
        if metrics.is_empty() {
            return Ok(0);
        }

        let mut builder = QueryBuilder::<Postgres>::new(
            "INSERT INTO ad_performance (company_id, platform, date, campaign_id, campaign_name, \
             impressions, clicks, cost, conversions, revenue, ctr, cpc, roas) ",
        );
        builder.push_values(metrics, |mut row, metric| {
            row.push_bind(company_id)
                .push_bind(metric.platform.as_str())
                .push_bind(metric.date)
                .push_bind(metric.campaign_id.clone())
                .push_bind(metric.campaign_name.clone())
                .push_bind(metric.impressions)
                .push_bind(metric.clicks)
                .push_bind(metric.cost)
                .push_bind(metric.conversions)
                .push_bind(metric.revenue)
                .push_bind(metric.ctr)
                .push_bind(metric.cpc)
                .push_bind(metric.roas);
        });

        let result = builder
            .build()
            .execute(&self.pool)
            .await
            .context("Failed to insert ad performance records")?;

        Ok(result.rows_affected())
    }

    async fn find_in_range(&self, company_id: i64, range: DateRange) -> Result<Vec<NormalizedMetric>> {
        let rows = sqlx::query(
            r#"
            SELECT platform, date, campaign_id, campaign_name, impressions, clicks,
                   cost, conversions, revenue, ctr, cpc, roas
            FROM ad_performance
            WHERE company_id = $1 AND date BETWEEN $2 AND $3
            ORDER BY date ASC, id ASC
            "#,
        )
        .bind(company_id)
        .bind(range.start)
        .bind(range.end)
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch ad performance")?;

        rows.iter().map(Self::row_to_metric).collect()
    }
}
