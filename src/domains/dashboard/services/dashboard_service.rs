use std::sync::Arc;

use crate::domains::dashboard::models::{
    ChartData, DashboardMetric, DashboardSection, UpsertChartRequest, UpsertMetricRequest,
};
use crate::shared::database::DashboardStore;
use crate::shared::errors::AppError;

/// 대시보드 지표/차트 서비스
/// Section-keyed metric and chart store behind the dashboard pages
#[derive(Clone)]
pub struct DashboardService {
    store: Arc<dyn DashboardStore>,
}

impl DashboardService {
    pub fn new(store: Arc<dyn DashboardStore>) -> Self {
        Self { store }
    }

    pub async fn metrics(&self, section: &str) -> Result<Vec<DashboardMetric>, AppError> {
        let section = parse_section(section)?;
        Ok(self.store.metrics(section).await?)
    }

    /// chart_id가 있으면 해당 차트만
    pub async fn charts(&self, section: &str, chart_id: Option<&str>) -> Result<Vec<ChartData>, AppError> {
        let section = parse_section(section)?;
        let chart_id = chart_id.map(str::trim).filter(|id| !id.is_empty());
        Ok(self.store.charts(section, chart_id).await?)
    }

    pub async fn upsert_metric(
        &self,
        section: &str,
        metric_name: &str,
        request: UpsertMetricRequest,
    ) -> Result<DashboardMetric, AppError> {
        let section = parse_section(section)?;
        let metric_name = non_empty("metricName", metric_name)?;

        let metric = DashboardMetric {
            metric_name,
            value: request.value,
            change: request.change,
            period: request.period,
        };
        self.store.upsert_metric(section, &metric).await?;
        Ok(metric)
    }

    pub async fn upsert_chart(
        &self,
        section: &str,
        chart_id: &str,
        request: UpsertChartRequest,
    ) -> Result<ChartData, AppError> {
        let section = parse_section(section)?;
        let chart = ChartData {
            chart_id: non_empty("chartId", chart_id)?,
            data: request.data,
        };
        self.store.upsert_chart(section, &chart).await?;
        Ok(chart)
    }
}

fn parse_section(raw: &str) -> Result<DashboardSection, AppError> {
    raw.parse().map_err(|e: String| AppError::validation("section", e))
}

fn non_empty(field: &str, raw: &str) -> Result<String, AppError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(AppError::validation(field, format!("{} must not be empty", field)));
    }
    Ok(value.to_string())
}
