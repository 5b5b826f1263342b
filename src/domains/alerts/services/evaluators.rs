use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::json;

use crate::domains::alerts::models::{
    AlertType, CashFlowDaily, InventoryItem, NewAlert, Severity, RUNWAY_CRITICAL_DAYS,
};
use crate::domains::integrations::models::{
    latest_snapshots, summarize_by_platform, total_spend, NormalizedMetric,
};
use crate::domains::orders::models::{Order, OrderStatus};

// =====================================================
// 알림 평가 (순수 함수)
// =====================================================
// 입력 데이터만 보고 만들어야 할 알림 목록을 반환합니다.
// 중복 제거 없음: 조건이 계속 유지되면 점검할 때마다 다시 생성
// =====================================================

/// 재고 부족 (current_stock <= min_stock)
/// 품절 critical, 최소 재고 절반 이하 high, 나머지 medium
pub fn low_stock_alerts(company_id: i64, items: &[InventoryItem]) -> Vec<NewAlert> {
    items
        .iter()
        .filter(|item| item.is_low_stock())
        .map(|item| {
            let severity = if item.current_stock <= 0 {
                Severity::Critical
            } else if item.current_stock * 2 <= item.min_stock {
                Severity::High
            } else {
                Severity::Medium
            };

            NewAlert {
                company_id,
                alert_type: AlertType::Inventory,
                severity,
                title: format!("Low stock: {}", item.product_name),
                message: format!(
                    "{} ({}) has {} units left, minimum is {}",
                    item.product_name, item.sku, item.current_stock, item.min_stock
                ),
                metadata: json!({
                    "sku": item.sku,
                    "currentStock": item.current_stock,
                    "minStock": item.min_stock,
                    "maxStock": item.max_stock,
                }),
            }
        })
        .collect()
}

/// 플랫폼별 ROAS가 목표 미달인 경우 (광고비가 있는 플랫폼만)
/// 목표의 절반 미만이면 high
pub fn roas_alerts(company_id: i64, metrics: &[NormalizedMetric], target_percent: Decimal) -> Vec<NewAlert> {
    let snapshots = latest_snapshots(metrics);
    let half_target = target_percent / Decimal::TWO;

    summarize_by_platform(&snapshots)
        .into_iter()
        .filter(|(_, spend)| spend.cost > Decimal::ZERO)
        .filter_map(|(platform, spend)| {
            let roas = spend.roas();
            if roas >= target_percent {
                return None;
            }

            let severity = if roas < half_target { Severity::High } else { Severity::Medium };
            Some(NewAlert {
                company_id,
                alert_type: AlertType::Roas,
                severity,
                title: format!("ROAS below target: {}", platform),
                message: format!(
                    "{} ROAS is {}% against a target of {}% (spend {}, revenue {})",
                    platform, roas, target_percent, spend.cost, spend.revenue
                ),
                metadata: json!({
                    "platform": platform.as_str(),
                    "roas": roas.to_string(),
                    "target": target_percent.to_string(),
                    "cost": spend.cost.to_string(),
                    "revenue": spend.revenue.to_string(),
                }),
            })
        })
        .collect()
}

/// 현금 런웨이 (일)
/// closing balance of the latest day / average daily net burn.
/// `None` when cash is not decreasing on average.
pub fn cash_runway(days: &[CashFlowDaily]) -> Option<Decimal> {
    let latest = days.iter().max_by_key(|d| d.date)?;

    let total_burn: Decimal = days.iter().map(CashFlowDaily::net_burn).sum();
    let average_burn = total_burn / Decimal::from(days.len() as i64);
    if average_burn <= Decimal::ZERO {
        return None;
    }

    let balance = latest.closing_balance.max(Decimal::ZERO);
    Some((balance / average_burn).round_dp(1))
}

/// 런웨이가 최소 기준 미만이면 알림 (7일 미만 critical)
pub fn runway_alert(company_id: i64, days: &[CashFlowDaily], min_days: i64) -> Option<NewAlert> {
    let runway = cash_runway(days)?;
    if runway >= Decimal::from(min_days) {
        return None;
    }

    let severity = if runway < Decimal::from(RUNWAY_CRITICAL_DAYS) {
        Severity::Critical
    } else {
        Severity::High
    };

    Some(NewAlert {
        company_id,
        alert_type: AlertType::CashFlow,
        severity,
        title: "Cash runway is short".to_string(),
        message: format!("Cash lasts about {} days at the current burn rate (minimum {} days)", runway, min_days),
        metadata: json!({
            "runwayDays": runway.to_string(),
            "minDays": min_days,
        }),
    })
}

/// 일일 리포트 (전날 주문/매출/광고비/ROAS 요약)
pub fn daily_report_alert(
    company_id: i64,
    date: NaiveDate,
    orders: &[Order],
    metrics: &[NormalizedMetric],
) -> NewAlert {
    let day_orders: Vec<&Order> = orders
        .iter()
        .filter(|o| o.order_date.date_naive() == date)
        .collect();
    let revenue: Decimal = day_orders
        .iter()
        .filter(|o| !matches!(o.status, OrderStatus::Cancelled | OrderStatus::Returned))
        .map(|o| o.total_amount)
        .sum();

    let day_metrics: Vec<NormalizedMetric> = metrics.iter().filter(|m| m.date == date).cloned().collect();
    let spend = total_spend(&latest_snapshots(&day_metrics));
    let roas = spend.roas();

    NewAlert {
        company_id,
        alert_type: AlertType::DailyReport,
        severity: Severity::Low,
        title: format!("Daily report {}", date),
        message: format!(
            "{} orders, revenue {}, ad spend {}, ROAS {}%",
            day_orders.len(),
            revenue,
            spend.cost,
            roas
        ),
        metadata: json!({
            "date": date.to_string(),
            "orders": day_orders.len(),
            "revenue": revenue.to_string(),
            "adSpend": spend.cost.to_string(),
            "adRevenue": spend.revenue.to_string(),
            "roas": roas.to_string(),
        }),
    }
}
