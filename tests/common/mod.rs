// =====================================================
// 통합 테스트 공통 헬퍼
// =====================================================
// 목적: 모든 통합 테스트에서 공통으로 사용하는 셋업 함수와 가짜 구현 제공
//
// - MemoryStore: 모든 저장소 트레이트의 메모리 구현 (DB 없이 실행)
// - FakeCarrier / FakeMarketplace: 외부 API 대신 호출 기록만 남김
//
// 사용법:
// ```rust
// mod common;
// use common::*;
//
// #[tokio::test]
// async fn test_something() {
//     let app = setup_test().await;
//     // 테스트 코드...
// }
// ```
// =====================================================
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use parking_lot::Mutex;
use rust_decimal::Decimal;
use serde_json::json;
use uuid::Uuid;

use commerce_dashboard::domains::alerts::models::{Alert, CashFlowDaily, InventoryItem, NewAlert};
use commerce_dashboard::domains::auth::models::{
    Company, LoginRequest, RegisterRequest, Session, SessionCreate, User, UserCreate,
};
use commerce_dashboard::domains::dashboard::models::{ChartData, DashboardMetric, DashboardSection};
use commerce_dashboard::domains::integrations::marketplace::MarketplaceClient;
use commerce_dashboard::domains::integrations::models::{
    DateRange, NormalizedMetric, NormalizedOrder, PlatformCredentials, PlatformIntegration, TrackingEvent,
    TrackingInfo,
};
use commerce_dashboard::domains::integrations::services::IntegrationRegistry;
use commerce_dashboard::domains::integrations::tracking::CarrierGateway;
use commerce_dashboard::domains::orders::models::{
    ClaimCreate, ClaimStatus, Order, OrderClaim, OrderFilter, OrderStatus, OrderUpdate, PaymentStatus,
    Platform, ShippingCompany, StatusHistory, StatusHistoryCreate,
};
use commerce_dashboard::shared::config::Config;
use commerce_dashboard::shared::database::*;
use commerce_dashboard::shared::errors::IntegrationError;
use commerce_dashboard::shared::services::AppState;
use commerce_dashboard::shared::utils::PageRequest;

// 테스트용 상수
pub const TEST_COMPANY_ID: i64 = 1;
pub const OTHER_COMPANY_ID: i64 = 2;
pub const TEST_EMAIL: &str = "admin@acme.test";
pub const TEST_PASSWORD: &str = "password123";

pub const CJ_ID: i64 = 1;
pub const HANJIN_ID: i64 = 2;
pub const INACTIVE_CARRIER_ID: i64 = 3;

/// 고정 기준 시각 (주문일 계산용)
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
}

// =====================================================
// MemoryStore
// =====================================================

#[derive(Default)]
struct Tables {
    next_id: i64,
    companies: Vec<Company>,
    users: Vec<User>,
    sessions: Vec<Session>,
    orders: Vec<Order>,
    history: Vec<StatusHistory>,
    claims: Vec<OrderClaim>,
    shipping_companies: Vec<ShippingCompany>,
    inventory: Vec<InventoryItem>,
    cash_flow: Vec<CashFlowDaily>,
    ad_performance: Vec<(i64, NormalizedMetric)>,
    integrations: Vec<PlatformIntegration>,
    alerts: Vec<Alert>,
    metrics: HashMap<DashboardSection, Vec<DashboardMetric>>,
    charts: HashMap<DashboardSection, Vec<ChartData>>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// 모든 저장소 트레이트의 메모리 구현
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        let store = Self::default();
        // 시드 데이터와 id가 겹치지 않도록
        store.tables.lock().next_id = 1000;
        Arc::new(store)
    }

    /// 모든 저장소 슬롯을 이 메모리 저장소로 채움
    pub fn into_stores(self: &Arc<Self>) -> Stores {
        Stores {
            companies: self.clone(),
            users: self.clone(),
            sessions: self.clone(),
            orders: self.clone(),
            claims: self.clone(),
            shipping_companies: self.clone(),
            inventory: self.clone(),
            cash_flow: self.clone(),
            ad_performance: self.clone(),
            integrations: self.clone(),
            alerts: self.clone(),
            dashboard: self.clone(),
        }
    }

    // ---------- 시드/조회 헬퍼 ----------

    pub fn add_company(&self, id: i64, name: &str, is_active: bool) {
        self.tables.lock().companies.push(Company {
            id,
            name: name.to_string(),
            is_active,
            created_at: base_time(),
        });
    }

    pub fn add_carrier(&self, id: i64, code: &str, name: &str, is_active: bool) {
        self.tables.lock().shipping_companies.push(ShippingCompany {
            id,
            name: name.to_string(),
            code: code.to_string(),
            tracking_url_template: Some(format!("https://tracking.test/{}/{{trackingNumber}}", code)),
            api_endpoint: None,
            api_key: None,
            is_active,
        });
    }

    pub fn add_order(&self, order: Order) {
        self.tables.lock().orders.push(order);
    }

    pub fn add_inventory(&self, company_id: i64, sku: &str, current_stock: i32, min_stock: i32) {
        let mut tables = self.tables.lock();
        let id = tables.next_id();
        tables.inventory.push(InventoryItem {
            id,
            company_id,
            sku: sku.to_string(),
            product_name: format!("Product {}", sku),
            current_stock,
            min_stock,
            max_stock: min_stock * 10,
            unit_price: Decimal::from(10_000),
            category: None,
            updated_at: Utc::now(),
        });
    }

    pub fn add_cash_flow(&self, row: CashFlowDaily) {
        self.tables.lock().cash_flow.push(row);
    }

    pub fn add_ad_metric(&self, company_id: i64, metric: NormalizedMetric) {
        self.tables.lock().ad_performance.push((company_id, metric));
    }

    pub fn add_integration(&self, company_id: i64, platform: &str) -> i64 {
        let mut tables = self.tables.lock();
        let id = tables.next_id();
        tables.integrations.push(PlatformIntegration {
            id,
            company_id,
            platform: platform.to_string(),
            credentials: PlatformCredentials::default(),
            is_active: true,
            last_synced_at: None,
        });
        id
    }

    pub fn order(&self, id: i64) -> Option<Order> {
        self.tables.lock().orders.iter().find(|o| o.id == id).cloned()
    }

    pub fn history_of(&self, order_id: i64) -> Vec<StatusHistory> {
        self.tables
            .lock()
            .history
            .iter()
            .filter(|h| h.order_id == order_id)
            .cloned()
            .collect()
    }

    pub fn alerts_of(&self, company_id: i64) -> Vec<Alert> {
        self.tables
            .lock()
            .alerts
            .iter()
            .filter(|a| a.company_id == company_id)
            .cloned()
            .collect()
    }

    pub fn orders_of(&self, company_id: i64) -> Vec<Order> {
        self.tables
            .lock()
            .orders
            .iter()
            .filter(|o| o.company_id == company_id)
            .cloned()
            .collect()
    }

    pub fn claim(&self, id: i64) -> Option<OrderClaim> {
        self.tables.lock().claims.iter().find(|c| c.id == id).cloned()
    }

    pub fn integration(&self, id: i64) -> Option<PlatformIntegration> {
        self.tables.lock().integrations.iter().find(|i| i.id == id).cloned()
    }

    /// 동시 수정 흉내 (버전만 올림)
    pub fn bump_version(&self, order_id: i64) {
        if let Some(order) = self.tables.lock().orders.iter_mut().find(|o| o.id == order_id) {
            order.version += 1;
        }
    }
}

#[async_trait]
impl CompanyStore for MemoryStore {
    async fn create(&self, name: &str) -> Result<Company> {
        let mut tables = self.tables.lock();
        let company = Company {
            id: tables.next_id(),
            name: name.to_string(),
            is_active: true,
            created_at: Utc::now(),
        };
        tables.companies.push(company.clone());
        Ok(company)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Company>> {
        Ok(self.tables.lock().companies.iter().find(|c| c.id == id).cloned())
    }

    async fn list_active(&self) -> Result<Vec<Company>> {
        let mut companies: Vec<Company> = self
            .tables
            .lock()
            .companies
            .iter()
            .filter(|c| c.is_active)
            .cloned()
            .collect();
        companies.sort_by_key(|c| c.id);
        Ok(companies)
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create(&self, user: UserCreate) -> Result<User> {
        let mut tables = self.tables.lock();
        let now = Utc::now();
        let user = User {
            id: tables.next_id(),
            company_id: user.company_id,
            email: user.email,
            password_hash: user.password_hash,
            name: user.name,
            created_at: now,
            updated_at: now,
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self.tables.lock().users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        Ok(self.tables.lock().users.iter().find(|u| u.id == id).cloned())
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn create(&self, session: SessionCreate) -> Result<Session> {
        let session = Session {
            id: Uuid::new_v4(),
            user_id: session.user_id,
            token_hash: session.token_hash,
            expires_at: session.expires_at,
            revoked: false,
            created_at: Utc::now(),
        };
        self.tables.lock().sessions.push(session.clone());
        Ok(session)
    }

    async fn find_by_token_hash(&self, token_hash: &str) -> Result<Option<Session>> {
        Ok(self
            .tables
            .lock()
            .sessions
            .iter()
            .find(|s| s.token_hash == token_hash)
            .cloned())
    }

    async fn revoke(&self, token_hash: &str) -> Result<bool> {
        let mut tables = self.tables.lock();
        match tables
            .sessions
            .iter_mut()
            .find(|s| s.token_hash == token_hash && !s.revoked)
        {
            Some(session) => {
                session.revoked = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl OrderStore for MemoryStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Order>> {
        Ok(self.order(id))
    }

    async fn list(&self, company_id: i64, filter: &OrderFilter, page: PageRequest) -> Result<(Vec<Order>, i64)> {
        let mut matched: Vec<Order> = self
            .tables
            .lock()
            .orders
            .iter()
            .filter(|o| o.company_id == company_id && filter.matches(o))
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.order_date.cmp(&a.order_date).then(b.id.cmp(&a.id)));

        let total = matched.len() as i64;
        let items = matched
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit as usize)
            .collect();
        Ok((items, total))
    }

    async fn find_since(&self, company_id: i64, since: DateTime<Utc>) -> Result<Vec<Order>> {
        let mut orders: Vec<Order> = self
            .tables
            .lock()
            .orders
            .iter()
            .filter(|o| o.company_id == company_id && o.order_date >= since)
            .cloned()
            .collect();
        orders.sort_by(|a, b| a.order_date.cmp(&b.order_date).then(a.id.cmp(&b.id)));
        Ok(orders)
    }

    async fn save_update(&self, update: &OrderUpdate, history: Option<&StatusHistoryCreate>) -> Result<bool> {
        let mut tables = self.tables.lock();
        let Some(position) = tables
            .orders
            .iter()
            .position(|o| o.id == update.order_id && o.version == update.expected_version)
        else {
            return Ok(false);
        };

        let updated = update.applied_to(&tables.orders[position]);
        tables.orders[position] = updated;

        if let Some(history) = history {
            let id = tables.next_id();
            tables.history.push(StatusHistory {
                id,
                order_id: history.order_id,
                from_status: history.from_status,
                to_status: history.to_status,
                changed_by: history.changed_by.clone(),
                note: history.note.clone(),
                created_at: update.updated_at,
            });
        }
        Ok(true)
    }

    async fn history(&self, order_id: i64) -> Result<Vec<StatusHistory>> {
        Ok(self.history_of(order_id))
    }

    async fn insert_synced(&self, company_id: i64, order: &NormalizedOrder) -> Result<bool> {
        let mut tables = self.tables.lock();
        let exists = tables.orders.iter().any(|o| {
            o.company_id == company_id
                && o.platform == order.platform
                && o.platform_order_id.as_deref() == Some(order.platform_order_id.as_str())
        });
        if exists {
            return Ok(false);
        }

        let id = tables.next_id();
        let now = Utc::now();
        tables.orders.push(Order {
            id,
            order_number: order.order_number(),
            platform_order_id: Some(order.platform_order_id.clone()),
            company_id,
            platform: order.platform,
            customer_name: order.customer_name.clone(),
            customer_email: order.customer_email.clone(),
            customer_phone: order.customer_phone.clone(),
            product_name: order.product_name.clone(),
            sku: order.sku.clone(),
            quantity: order.quantity,
            unit_price: order.unit_price,
            total_amount: order.total_amount,
            recipient_name: order.recipient_name.clone(),
            shipping_address: order.shipping_address.clone(),
            shipping_method: None,
            tracking_number: None,
            carrier_code: None,
            status: order.status,
            payment_status: order.payment_status,
            order_date: order.order_date,
            shipped_at: None,
            delivered_at: None,
            created_at: now,
            updated_at: now,
            metadata: order.metadata.clone(),
            version: 1,
        });
        Ok(true)
    }
}

#[async_trait]
impl ClaimStore for MemoryStore {
    async fn create(&self, claim: ClaimCreate) -> Result<OrderClaim> {
        let mut tables = self.tables.lock();
        let claim = OrderClaim {
            id: tables.next_id(),
            order_id: claim.order_id,
            company_id: claim.company_id,
            claim_type: claim.claim_type,
            reason: claim.reason,
            status: ClaimStatus::Requested,
            created_at: Utc::now(),
            processed_at: None,
        };
        tables.claims.push(claim.clone());
        Ok(claim)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<OrderClaim>> {
        Ok(self.tables.lock().claims.iter().find(|c| c.id == id).cloned())
    }

    async fn list(&self, company_id: i64, status: Option<ClaimStatus>) -> Result<Vec<OrderClaim>> {
        let mut claims: Vec<OrderClaim> = self
            .tables
            .lock()
            .claims
            .iter()
            .filter(|c| c.company_id == company_id && status.is_none_or(|s| s == c.status))
            .cloned()
            .collect();
        claims.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(claims)
    }

    async fn update_status(
        &self,
        id: i64,
        from: ClaimStatus,
        to: ClaimStatus,
        processed_at: Option<DateTime<Utc>>,
    ) -> Result<bool> {
        let mut tables = self.tables.lock();
        match tables.claims.iter_mut().find(|c| c.id == id && c.status == from) {
            Some(claim) => {
                claim.status = to;
                claim.processed_at = processed_at;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl ShippingCompanyStore for MemoryStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<ShippingCompany>> {
        Ok(self
            .tables
            .lock()
            .shipping_companies
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShippingCompany>> {
        Ok(self
            .tables
            .lock()
            .shipping_companies
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code))
            .cloned())
    }

    async fn list_active(&self) -> Result<Vec<ShippingCompany>> {
        let mut carriers: Vec<ShippingCompany> = self
            .tables
            .lock()
            .shipping_companies
            .iter()
            .filter(|c| c.is_active)
            .cloned()
            .collect();
        carriers.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(carriers)
    }
}

#[async_trait]
impl InventoryStore for MemoryStore {
    async fn list(&self, company_id: i64) -> Result<Vec<InventoryItem>> {
        let mut items: Vec<InventoryItem> = self
            .tables
            .lock()
            .inventory
            .iter()
            .filter(|i| i.company_id == company_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.sku.cmp(&b.sku));
        Ok(items)
    }
}

#[async_trait]
impl CashFlowStore for MemoryStore {
    async fn find_since(&self, company_id: i64, since: NaiveDate) -> Result<Vec<CashFlowDaily>> {
        let mut rows: Vec<CashFlowDaily> = self
            .tables
            .lock()
            .cash_flow
            .iter()
            .filter(|r| r.company_id == company_id && r.date >= since)
            .cloned()
            .collect();
        rows.sort_by_key(|r| r.date);
        Ok(rows)
    }
}

#[async_trait]
impl AdPerformanceStore for MemoryStore {
    async fn insert_many(&self, company_id: i64, metrics: &[NormalizedMetric]) -> Result<u64> {
        let mut tables = self.tables.lock();
        tables
            .ad_performance
            .extend(metrics.iter().cloned().map(|m| (company_id, m)));
        Ok(metrics.len() as u64)
    }

    async fn find_in_range(&self, company_id: i64, range: DateRange) -> Result<Vec<NormalizedMetric>> {
        let mut rows: Vec<NormalizedMetric> = self
            .tables
            .lock()
            .ad_performance
            .iter()
            .filter(|(company, m)| *company == company_id && m.date >= range.start && m.date <= range.end)
            .map(|(_, m)| m.clone())
            .collect();
        // 같은 날짜 안에서는 추가된 순서 유지 (stable sort)
        rows.sort_by_key(|m| m.date);
        Ok(rows)
    }
}

#[async_trait]
impl IntegrationStore for MemoryStore {
    async fn list_active(&self, company_id: i64) -> Result<Vec<PlatformIntegration>> {
        Ok(self
            .tables
            .lock()
            .integrations
            .iter()
            .filter(|i| i.company_id == company_id && i.is_active)
            .cloned()
            .collect())
    }

    async fn mark_synced(&self, integration_id: i64, at: DateTime<Utc>) -> Result<()> {
        if let Some(integration) = self
            .tables
            .lock()
            .integrations
            .iter_mut()
            .find(|i| i.id == integration_id)
        {
            integration.last_synced_at = Some(at);
        }
        Ok(())
    }
}

#[async_trait]
impl AlertStore for MemoryStore {
    async fn create(&self, alert: NewAlert) -> Result<Alert> {
        let mut tables = self.tables.lock();
        let alert = Alert {
            id: tables.next_id(),
            company_id: alert.company_id,
            alert_type: alert.alert_type,
            severity: alert.severity,
            title: alert.title,
            message: alert.message,
            metadata: alert.metadata,
            is_read: false,
            created_at: Utc::now(),
        };
        tables.alerts.push(alert.clone());
        Ok(alert)
    }

    async fn list(&self, company_id: i64, unread_only: bool, limit: i64) -> Result<Vec<Alert>> {
        let mut alerts: Vec<Alert> = self
            .alerts_of(company_id)
            .into_iter()
            .filter(|a| !unread_only || !a.is_read)
            .collect();
        alerts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        alerts.truncate(limit.max(0) as usize);
        Ok(alerts)
    }

    async fn unread_count(&self, company_id: i64) -> Result<i64> {
        Ok(self.alerts_of(company_id).iter().filter(|a| !a.is_read).count() as i64)
    }

    async fn mark_read(&self, company_id: i64, alert_id: i64) -> Result<bool> {
        let mut tables = self.tables.lock();
        match tables
            .alerts
            .iter_mut()
            .find(|a| a.id == alert_id && a.company_id == company_id)
        {
            Some(alert) => {
                alert.is_read = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl DashboardStore for MemoryStore {
    async fn metrics(&self, section: DashboardSection) -> Result<Vec<DashboardMetric>> {
        let mut metrics = self.tables.lock().metrics.get(&section).cloned().unwrap_or_default();
        metrics.sort_by(|a, b| a.metric_name.cmp(&b.metric_name));
        Ok(metrics)
    }

    async fn charts(&self, section: DashboardSection, chart_id: Option<&str>) -> Result<Vec<ChartData>> {
        let mut charts: Vec<ChartData> = self
            .tables
            .lock()
            .charts
            .get(&section)
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .filter(|c| chart_id.is_none_or(|id| c.chart_id == id))
            .collect();
        charts.sort_by(|a, b| a.chart_id.cmp(&b.chart_id));
        Ok(charts)
    }

    async fn upsert_metric(&self, section: DashboardSection, metric: &DashboardMetric) -> Result<()> {
        let mut tables = self.tables.lock();
        let metrics = tables.metrics.entry(section).or_default();
        metrics.retain(|m| m.metric_name != metric.metric_name);
        metrics.push(metric.clone());
        Ok(())
    }

    async fn upsert_chart(&self, section: DashboardSection, chart: &ChartData) -> Result<()> {
        let mut tables = self.tables.lock();
        let charts = tables.charts.entry(section).or_default();
        charts.retain(|c| c.chart_id != chart.chart_id);
        charts.push(chart.clone());
        Ok(())
    }
}

// =====================================================
// 가짜 외부 연동
// =====================================================

/// 송장 번호를 `{code}-{orderNumber}`로 발급하는 택배사
#[derive(Default)]
pub struct FakeCarrier {
    /// 이 주문 id는 발급 실패
    pub fail_for: Mutex<Vec<i64>>,
}

#[async_trait]
impl CarrierGateway for FakeCarrier {
    async fn issue_tracking_number(
        &self,
        carrier: &ShippingCompany,
        order: &Order,
    ) -> Result<String, IntegrationError> {
        if self.fail_for.lock().contains(&order.id) {
            return Err(IntegrationError::new(&carrier.code, "carrier rejected the request"));
        }
        Ok(format!("{}-{}", carrier.code, order.order_number))
    }

    async fn track(
        &self,
        carrier: &ShippingCompany,
        tracking_number: &str,
    ) -> Result<TrackingInfo, IntegrationError> {
        Ok(TrackingInfo {
            tracking_number: tracking_number.to_string(),
            carrier_code: carrier.code.clone(),
            carrier_name: carrier.name.clone(),
            status: "in_transit".to_string(),
            delivered: false,
            tracking_url: carrier.tracking_url(tracking_number),
            events: vec![TrackingEvent {
                time: base_time(),
                location: Some("Seoul Hub".to_string()),
                description: "Picked up".to_string(),
            }],
        })
    }
}

/// 주문을 돌려주고, 출고/취소 통보를 기록하는 마켓플레이스
pub struct FakeMarketplace {
    pub platform: Platform,
    pub orders: Mutex<Vec<NormalizedOrder>>,
    pub notifications: Mutex<Vec<String>>,
    pub fail_fetch: Mutex<bool>,
    pub fail_notify: Mutex<bool>,
}

impl FakeMarketplace {
    pub fn new(platform: Platform) -> Arc<Self> {
        Arc::new(Self {
            platform,
            orders: Mutex::new(Vec::new()),
            notifications: Mutex::new(Vec::new()),
            fail_fetch: Mutex::new(false),
            fail_notify: Mutex::new(false),
        })
    }

    pub fn notifications(&self) -> Vec<String> {
        self.notifications.lock().clone()
    }
}

#[async_trait]
impl MarketplaceClient for FakeMarketplace {
    fn platform(&self) -> Platform {
        self.platform
    }

    async fn fetch_orders(
        &self,
        _credentials: &PlatformCredentials,
        _since: DateTime<Utc>,
    ) -> Result<Vec<NormalizedOrder>, IntegrationError> {
        if *self.fail_fetch.lock() {
            return Err(IntegrationError::new(self.platform, "upstream unavailable"));
        }
        Ok(self.orders.lock().clone())
    }

    async fn notify_shipment(
        &self,
        _credentials: &PlatformCredentials,
        order: &Order,
        carrier_code: &str,
        tracking_number: &str,
    ) -> Result<(), IntegrationError> {
        if *self.fail_notify.lock() {
            return Err(IntegrationError::new(self.platform, "dispatch rejected"));
        }
        self.notifications
            .lock()
            .push(format!("ship:{}:{}:{}", order.order_number, carrier_code, tracking_number));
        Ok(())
    }

    async fn notify_cancellation(
        &self,
        _credentials: &PlatformCredentials,
        order: &Order,
        reason: &str,
    ) -> Result<(), IntegrationError> {
        if *self.fail_notify.lock() {
            return Err(IntegrationError::new(self.platform, "cancel rejected"));
        }
        self.notifications
            .lock()
            .push(format!("cancel:{}:{}", order.order_number, reason));
        Ok(())
    }
}

// =====================================================
// 시드 데이터
// =====================================================

/// 테스트 주문 생성 (company 1, 웹사이트 주문)
pub fn sample_order(id: i64, company_id: i64, order_number: &str, status: OrderStatus, order_date: DateTime<Utc>) -> Order {
    Order {
        id,
        order_number: order_number.to_string(),
        platform_order_id: None,
        company_id,
        platform: Platform::Website,
        customer_name: "Kim Minji".to_string(),
        customer_email: Some("minji@example.com".to_string()),
        customer_phone: None,
        product_name: "Wireless Mouse".to_string(),
        sku: Some("WM-01".to_string()),
        quantity: 2,
        unit_price: Decimal::from(15_000),
        total_amount: Decimal::from(30_000),
        recipient_name: Some("Kim Minji".to_string()),
        shipping_address: Some("Seoul".to_string()),
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

/// 동기화용 정규화 주문
pub fn normalized_order(platform: Platform, platform_order_id: &str) -> NormalizedOrder {
    NormalizedOrder {
        platform,
        platform_order_id: platform_order_id.to_string(),
        customer_name: "Lee Jiho".to_string(),
        customer_email: None,
        customer_phone: None,
        product_name: "Keyboard".to_string(),
        sku: None,
        quantity: 1,
        unit_price: Decimal::from(50_000),
        total_amount: Decimal::from(50_000),
        recipient_name: None,
        shipping_address: None,
        status: OrderStatus::New,
        payment_status: PaymentStatus::Paid,
        order_date: Utc::now() - Duration::hours(1),
        metadata: json!({}),
    }
}

/// 테스트 설정 (스케줄러 타이머는 사용하지 않음)
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.jwt_secret = "test-secret".to_string();
    config.scheduler.enabled = false;
    config
}

/// 테스트 애플리케이션
pub struct TestApp {
    pub state: AppState,
    pub store: Arc<MemoryStore>,
    pub carrier: Arc<FakeCarrier>,
    pub marketplace: Arc<FakeMarketplace>,
}

/// 테스트 전 초기화
///
/// 회사 2곳, 택배사 3곳(하나는 비활성), 스마트스토어 가짜 연동을 준비합니다.
pub async fn setup_test() -> TestApp {
    let store = MemoryStore::new();
    store.add_company(TEST_COMPANY_ID, "Acme", true);
    store.add_company(OTHER_COMPANY_ID, "Globex", true);
    store.add_carrier(CJ_ID, "CJ", "CJ대한통운", true);
    store.add_carrier(HANJIN_ID, "HANJIN", "한진택배", true);
    store.add_carrier(INACTIVE_CARRIER_ID, "LOGEN", "로젠택배", false);

    let carrier = Arc::new(FakeCarrier::default());
    let marketplace = FakeMarketplace::new(Platform::Smartstore);
    let registry = Arc::new(IntegrationRegistry::new().with_marketplace(marketplace.clone()));

    let state = AppState::new(store.into_stores(), registry, carrier.clone(), &test_config());

    TestApp {
        state,
        store,
        carrier,
        marketplace,
    }
}

impl TestApp {
    /// 테스트 사용자 등록 후 로그인, bearer 토큰 반환
    pub async fn login(&self) -> String {
        let auth = &self.state.auth_state.auth_service;
        auth.register(RegisterRequest {
            email: TEST_EMAIL.to_string(),
            password: TEST_PASSWORD.to_string(),
            name: Some("Admin".to_string()),
            company_id: Some(TEST_COMPANY_ID),
            company_name: None,
        })
        .await
        .expect("Failed to register test user");

        let (_, issued) = auth
            .login(LoginRequest {
                email: TEST_EMAIL.to_string(),
                password: TEST_PASSWORD.to_string(),
            })
            .await
            .expect("Failed to login test user");
        issued.token
    }
}
