use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::domains::orders::models::{
    Order, OrderStats, OrderStatus, Platform, PlatformBreakdown, ShippingPerformance, StatsPeriod,
    TimelineBucket,
};

/// 정시 출고 기준 (주문 후 2일 이내)
pub const ON_TIME_SHIPPING_DAYS: f64 = 2.0;

/// 매출 집계 대상 여부 (취소/반품 제외)
fn counts_as_revenue(order: &Order) -> bool {
    !matches!(order.status, OrderStatus::Cancelled | OrderStatus::Returned)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 기간 내 주문으로 통계 계산
/// Pure aggregation over the orders placed inside `[from, to]`
pub fn compute_stats(orders: &[Order], period: StatsPeriod, from: DateTime<Utc>, to: DateTime<Utc>) -> OrderStats {
    let in_window: Vec<&Order> = orders
        .iter()
        .filter(|o| o.order_date >= from && o.order_date <= to)
        .collect();

    let mut status_breakdown: BTreeMap<String, i64> = OrderStatus::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), 0))
        .collect();
    let mut platforms: HashMap<Platform, (i64, Decimal)> = HashMap::new();
    let mut timeline: BTreeMap<String, (i64, Decimal)> = BTreeMap::new();

    let mut total_revenue = Decimal::ZERO;
    let mut revenue_orders = 0i64;

    for order in &in_window {
        *status_breakdown.entry(order.status.as_str().to_string()).or_default() += 1;

        let revenue = if counts_as_revenue(order) {
            revenue_orders += 1;
            total_revenue += order.total_amount;
            order.total_amount
        } else {
            Decimal::ZERO
        };

        let platform = platforms.entry(order.platform).or_default();
        platform.0 += 1;
        platform.1 += revenue;

        let bucket = timeline.entry(period.bucket_key(order.order_date)).or_default();
        bucket.0 += 1;
        bucket.1 += revenue;
    }

    let average_order_value = if revenue_orders > 0 {
        (total_revenue / Decimal::from(revenue_orders)).round_dp(2)
    } else {
        Decimal::ZERO
    };

    let mut platform_breakdown: Vec<PlatformBreakdown> = platforms
        .into_iter()
        .map(|(platform, (orders, revenue))| PlatformBreakdown { platform, orders, revenue })
        .collect();
    platform_breakdown.sort_by(|a, b| b.revenue.cmp(&a.revenue).then(a.platform.cmp(&b.platform)));

    let timeline = timeline
        .into_iter()
        .map(|(bucket, (orders, revenue))| TimelineBucket { bucket, orders, revenue })
        .collect();

    OrderStats {
        period,
        from,
        to,
        total_orders: in_window.len() as i64,
        total_revenue,
        average_order_value,
        status_breakdown,
        platform_breakdown,
        timeline,
        shipping: shipping_performance(&in_window),
    }
}

/// 출고 성과 (shipped_at − order_date)
fn shipping_performance(orders: &[&Order]) -> ShippingPerformance {
    let latencies: Vec<f64> = orders
        .iter()
        .filter_map(|o| o.shipped_at.map(|shipped| (shipped - o.order_date).num_seconds() as f64 / 86_400.0))
        .collect();

    if latencies.is_empty() {
        return ShippingPerformance {
            shipped_count: 0,
            average_shipping_days: 0.0,
            on_time_rate: 0.0,
        };
    }

    let count = latencies.len() as f64;
    let on_time = latencies.iter().filter(|days| **days <= ON_TIME_SHIPPING_DAYS).count() as f64;

    ShippingPerformance {
        shipped_count: latencies.len() as i64,
        average_shipping_days: round2(latencies.iter().sum::<f64>() / count),
        on_time_rate: round2(on_time / count * 100.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use serde_json::json;

    use crate::domains::orders::models::PaymentStatus;

    fn order(id: i64, platform: Platform, status: OrderStatus, amount: i64, day: u32) -> Order {
        let order_date = Utc.with_ymd_and_hms(2024, 1, day, 9, 0, 0).unwrap();
        Order {
            id,
            order_number: format!("ORD-{}", id),
            platform_order_id: None,
            company_id: 1,
            platform,
            customer_name: "홍길동".to_string(),
            customer_email: None,
            customer_phone: None,
            product_name: "머그컵".to_string(),
            sku: None,
            quantity: 1,
            unit_price: Decimal::from(amount),
            total_amount: Decimal::from(amount),
            recipient_name: None,
            shipping_address: None,
            shipping_method: None,
            tracking_number: None,
            carrier_code: None,
            status,
            payment_status: PaymentStatus::Paid,
            order_date,
            shipped_at: None,
            delivered_at: None,
            created_at: order_date,
            updated_at: order_date,
            metadata: json!({}),
            version: 1,
        }
    }

    #[test]
    fn cancelled_orders_do_not_count_as_revenue() {
        let from = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap();
        let orders = vec![
            order(1, Platform::Coupang, OrderStatus::New, 10_000, 2),
            order(2, Platform::Coupang, OrderStatus::Cancelled, 50_000, 2),
            order(3, Platform::Smartstore, OrderStatus::Delivered, 20_000, 3),
        ];

        let stats = compute_stats(&orders, StatsPeriod::Daily, from, to);

        assert_eq!(stats.total_orders, 3);
        assert_eq!(stats.total_revenue, Decimal::from(30_000));
        assert_eq!(stats.average_order_value, Decimal::from(15_000));
        assert_eq!(stats.status_breakdown["cancelled"], 1);
        assert_eq!(stats.status_breakdown["returned"], 0);
        assert_eq!(stats.platform_breakdown[0].platform, Platform::Smartstore);
        assert_eq!(stats.timeline.len(), 2);
        assert_eq!(stats.timeline[0].bucket, "2024-01-02");
        assert_eq!(stats.timeline[0].orders, 2);
    }

    #[test]
    fn on_time_rate_uses_two_day_cutoff() {
        let from = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap();
        let mut fast = order(1, Platform::Coupang, OrderStatus::Shipped, 10_000, 5);
        fast.shipped_at = Some(fast.order_date + Duration::days(1));
        let mut slow = order(2, Platform::Coupang, OrderStatus::Delivered, 10_000, 5);
        slow.shipped_at = Some(slow.order_date + Duration::days(3));

        let stats = compute_stats(&[fast, slow], StatsPeriod::Weekly, from, to);

        assert_eq!(stats.shipping.shipped_count, 2);
        assert_eq!(stats.shipping.average_shipping_days, 2.0);
        assert_eq!(stats.shipping.on_time_rate, 50.0);
        assert_eq!(stats.timeline[0].bucket, "2024-W01");
    }

    #[test]
    fn empty_window_has_zero_averages() {
        let now = Utc::now();
        let stats = compute_stats(&[], StatsPeriod::Monthly, now - Duration::days(365), now);
        assert_eq!(stats.average_order_value, Decimal::ZERO);
        assert_eq!(stats.shipping.on_time_rate, 0.0);
        assert!(stats.platform_breakdown.is_empty());
    }
}
