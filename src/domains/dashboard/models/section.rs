use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 대시보드 섹션
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum DashboardSection {
    Ecommerce,
    Advertising,
    Cashflow,
    CustomerService,
    Growth,
}

impl DashboardSection {
    pub const ALL: [DashboardSection; 5] = [
        DashboardSection::Ecommerce,
        DashboardSection::Advertising,
        DashboardSection::Cashflow,
        DashboardSection::CustomerService,
        DashboardSection::Growth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DashboardSection::Ecommerce => "ecommerce",
            DashboardSection::Advertising => "advertising",
            DashboardSection::Cashflow => "cashflow",
            DashboardSection::CustomerService => "customer-service",
            DashboardSection::Growth => "growth",
        }
    }
}

impl fmt::Display for DashboardSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DashboardSection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DashboardSection::ALL
            .iter()
            .copied()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| format!("Unknown dashboard section: {}", s))
    }
}
