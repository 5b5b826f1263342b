use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use chrono::{DateTime, Utc};

/// 클레임 종류 (반품/교환)
/// Claim type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ClaimType {
    Return,
    Exchange,
}

impl ClaimType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimType::Return => "return",
            ClaimType::Exchange => "exchange",
        }
    }
}

impl FromStr for ClaimType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "return" => Ok(ClaimType::Return),
            "exchange" => Ok(ClaimType::Exchange),
            other => Err(format!("Unknown claim type: {}", other)),
        }
    }
}

/// 클레임 처리 상태
/// requested → approved | rejected, approved → completed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    Requested,
    Approved,
    Rejected,
    Completed,
}

impl ClaimStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Requested => "requested",
            ClaimStatus::Approved => "approved",
            ClaimStatus::Rejected => "rejected",
            ClaimStatus::Completed => "completed",
        }
    }

    pub fn can_transition_to(&self, next: ClaimStatus) -> bool {
        matches!(
            (self, next),
            (ClaimStatus::Requested, ClaimStatus::Approved)
                | (ClaimStatus::Requested, ClaimStatus::Rejected)
                | (ClaimStatus::Approved, ClaimStatus::Completed)
        )
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClaimStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "requested" => Ok(ClaimStatus::Requested),
            "approved" => Ok(ClaimStatus::Approved),
            "rejected" => Ok(ClaimStatus::Rejected),
            "completed" => Ok(ClaimStatus::Completed),
            other => Err(format!("Unknown claim status: {}", other)),
        }
    }
}

/// 주문 클레임 (반품/교환 요청)
/// Post-order customer request
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderClaim {
    pub id: i64,
    pub order_id: i64,
    pub company_id: i64,
    pub claim_type: ClaimType,
    pub reason: String,
    pub status: ClaimStatus,
    pub created_at: DateTime<Utc>,
    pub processed_at: Option<DateTime<Utc>>,
}

/// 클레임 생성 데이터
#[derive(Debug, Clone)]
pub struct ClaimCreate {
    pub order_id: i64,
    pub company_id: i64,
    pub claim_type: ClaimType,
    pub reason: String,
}
