use serde::Serialize;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// 일별 현금 흐름
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowDaily {
    pub company_id: i64,
    pub date: NaiveDate,
    pub inflow: Decimal,
    pub outflow: Decimal,
    pub closing_balance: Decimal,
}

impl CashFlowDaily {
    /// 순유출 (양수면 현금 감소)
    pub fn net_burn(&self) -> Decimal {
        self.outflow - self.inflow
    }
}
