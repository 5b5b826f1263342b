use sqlx::{PgPool, Row};
use anyhow::{Context, Result};
use async_trait::async_trait;
use crate::domains::dashboard::models::{ChartData, DashboardMetric, DashboardSection};
use crate::shared::database::stores::DashboardStore;

/// 대시보드 지표/차트 저장소 (섹션 단위 키-값)
pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DashboardStore for DashboardRepository {
    async fn metrics(&self, section: DashboardSection) -> Result<Vec<DashboardMetric>> {
        let rows = sqlx::query(
            r#"
            SELECT metric_name, value, change, period
            FROM dashboard_metrics
            WHERE section = $1
            ORDER BY metric_name ASC
            "#,
        )
        .bind(section.as_str())
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch dashboard metrics")?;

        Ok(rows
            .iter()
            .map(|row| DashboardMetric {
                metric_name: row.get("metric_name"),
                value: row.get("value"),
                change: row.get("change"),
                period: row.get("period"),
            })
            .collect())
    }

    async fn charts(&self, section: DashboardSection, chart_id: Option<&str>) -> Result<Vec<ChartData>> {
        let rows = sqlx::query(
            r#"
            SELECT chart_id, data
            FROM dashboard_charts
            WHERE section = $1 AND ($2::TEXT IS NULL OR chart_id = $2)
            ORDER BY chart_id ASC
            "#,
        )
        .bind(section.as_str())
        .bind(chart_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch dashboard charts")?;

        Ok(rows
            .iter()
            .map(|row| ChartData {
                chart_id: row.get("chart_id"),
                data: row.get("data"),
            })
            .collect())
    }

    async fn upsert_metric(&self, section: DashboardSection, metric: &DashboardMetric) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO dashboard_metrics (section, metric_name, value, change, period, updated_at)
            VALUES ($1, $2, $3, $4, $5, NOW())
            ON CONFLICT (section, metric_name)
            DO UPDATE SET value = EXCLUDED.value,
                          change = EXCLUDED.change,
                          period = EXCLUDED.period,
                          updated_at = NOW()
            "#,
        )
        .bind(section.as_str())
        .bind(&metric.metric_name)
        .bind(&metric.value)
        .bind(&metric.change)
        .bind(&metric.period)
        .execute(&self.pool)
        .await
        .context("Failed to upsert dashboard metric")?;

        Ok(())
    }

    async fn upsert_chart(&self, section: DashboardSection, chart: &ChartData) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO dashboard_charts (section, chart_id, data, updated_at)
            VALUES ($1, $2, $3, NOW())
            ON CONFLICT (section, chart_id)
            DO UPDATE SET data = EXCLUDED.data, updated_at = NOW()
            "#,
        )
        .bind(section.as_str())
        .bind(&chart.chart_id)
        .bind(&chart.data)
        .execute(&self.pool)
        .await
        .context("Failed to upsert dashboard chart")?;

        Ok(())
    }
}
