use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use chrono::{DateTime, Utc};

/// 알림 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    Inventory,
    CashFlow,
    Roas,
    Order,
    DailyReport,
}

impl AlertType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertType::Inventory => "inventory",
            AlertType::CashFlow => "cash_flow",
            AlertType::Roas => "roas",
            AlertType::Order => "order",
            AlertType::DailyReport => "daily_report",
        }
    }
}

impl fmt::Display for AlertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlertType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inventory" => Ok(AlertType::Inventory),
            "cash_flow" => Ok(AlertType::CashFlow),
            "roas" => Ok(AlertType::Roas),
            "order" => Ok(AlertType::Order),
            "daily_report" => Ok(AlertType::DailyReport),
            other => Err(format!("Unknown alert type: {}", other)),
        }
    }
}

/// 심각도
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            "critical" => Ok(Severity::Critical),
            other => Err(format!("Unknown severity: {}", other)),
        }
    }
}

/// 알림
/// Persisted alert. Only `is_read` changes after creation.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = Alert)]
pub struct Alert {
    pub id: i64,
    pub company_id: i64,
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub severity: Severity,
    pub title: String,
    pub message: String,
    #[schema(value_type = Object)]
    pub metadata: serde_json::Value,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

/// 새 알림 (평가 결과)
/// Alert produced by an evaluator, not yet stored
#[derive(Debug, Clone, PartialEq)]
pub struct NewAlert {
    pub company_id: i64,
    pub alert_type: AlertType,
    pub severity: Severity,
    pub title: String,
    pub message: String,
    pub metadata: serde_json::Value,
}

/// 알림 목록 쿼리
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct AlertListQuery {
    /// true면 읽지 않은 알림만
    pub unread_only: Option<bool>,
    /// 기본 50, 최대 200
    pub limit: Option<u32>,
}

/// 알림 목록 응답
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = AlertsResponse)]
pub struct AlertsResponse {
    pub alerts: Vec<Alert>,
    pub unread_count: i64,
}
