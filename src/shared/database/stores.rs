use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use crate::domains::alerts::models::{Alert, CashFlowDaily, InventoryItem, NewAlert};
use crate::domains::auth::models::{Company, Session, SessionCreate, User, UserCreate};
use crate::domains::dashboard::models::{ChartData, DashboardMetric, DashboardSection};
use crate::domains::integrations::models::{DateRange, NormalizedMetric, NormalizedOrder, PlatformIntegration};
use crate::domains::orders::models::{
    ClaimCreate, ClaimStatus, Order, OrderClaim, OrderFilter, OrderUpdate, ShippingCompany,
    StatusHistory, StatusHistoryCreate,
};
use crate::shared::utils::PageRequest;

use super::connection::Database;
use super::repositories::*;

// =====================================================
// 저장소 인터페이스
// =====================================================
// 서비스는 이 트레이트만 알고, 실제 구현은 Postgres 리포지토리 하나뿐입니다.
// 테스트는 같은 트레이트의 메모리 구현을 주입합니다.
// =====================================================

#[async_trait]
pub trait CompanyStore: Send + Sync {
    async fn create(&self, name: &str) -> Result<Company>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Company>>;
    /// 스케줄러가 순회할 활성 테넌트 (id 오름차순)
    async fn list_active(&self) -> Result<Vec<Company>>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create(&self, user: UserCreate) -> Result<User>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;
    async fn find_by_id(&self, id: i64) -> Result<Option<User>>;
}

#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn create(&self, session: SessionCreate) -> Result<Session>;
    async fn find_by_token_hash(&self, token_hash: &str) -> Result<Option<Session>>;
    /// 로그아웃 (이미 없거나 무효화된 세션이면 false)
    async fn revoke(&self, token_hash: &str) -> Result<bool>;
}

#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Order>>;

    /// 필터 + 페이지 조회 (order_date DESC, id DESC), 전체 건수 함께 반환
    async fn list(&self, company_id: i64, filter: &OrderFilter, page: PageRequest) -> Result<(Vec<Order>, i64)>;

    /// 통계용: 기간 내 모든 주문
    async fn find_since(&self, company_id: i64, since: DateTime<Utc>) -> Result<Vec<Order>>;

    /// 주문 변경 + 이력 추가를 한 트랜잭션으로 저장
    /// Returns `false` when the stored version no longer matches `expected_version`.
    async fn save_update(&self, update: &OrderUpdate, history: Option<&StatusHistoryCreate>) -> Result<bool>;

    /// 상태 이력 (오래된 순)
    async fn history(&self, order_id: i64) -> Result<Vec<StatusHistory>>;

    /// 동기화 주문 추가 (이미 있으면 false)
    async fn insert_synced(&self, company_id: i64, order: &NormalizedOrder) -> Result<bool>;
}

#[async_trait]
pub trait ClaimStore: Send + Sync {
    async fn create(&self, claim: ClaimCreate) -> Result<OrderClaim>;
    async fn find_by_id(&self, id: i64) -> Result<Option<OrderClaim>>;
    async fn list(&self, company_id: i64, status: Option<ClaimStatus>) -> Result<Vec<OrderClaim>>;
    /// 현재 상태가 `from`일 때만 변경 (다른 요청이 먼저 처리했으면 false)
    async fn update_status(
        &self,
        id: i64,
        from: ClaimStatus,
        to: ClaimStatus,
        processed_at: Option<DateTime<Utc>>,
    ) -> Result<bool>;
}

#[async_trait]
pub trait ShippingCompanyStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<ShippingCompany>>;
    async fn find_by_code(&self, code: &str) -> Result<Option<ShippingCompany>>;
    async fn list_active(&self) -> Result<Vec<ShippingCompany>>;
}

#[async_trait]
pub trait InventoryStore: Send + Sync {
    async fn list(&self, company_id: i64) -> Result<Vec<InventoryItem>>;
}

#[async_trait]
pub trait CashFlowStore: Send + Sync {
    /// `since` 이후 일별 현금 흐름 (날짜 오름차순)
    async fn find_since(&self, company_id: i64, since: NaiveDate) -> Result<Vec<CashFlowDaily>>;
}

#[async_trait]
pub trait AdPerformanceStore: Send + Sync {
    /// 추가 전용 (수정 없음)
    async fn insert_many(&self, company_id: i64, metrics: &[NormalizedMetric]) -> Result<u64>;
    async fn find_in_range(&self, company_id: i64, range: DateRange) -> Result<Vec<NormalizedMetric>>;
}

#[async_trait]
pub trait IntegrationStore: Send + Sync {
    async fn list_active(&self, company_id: i64) -> Result<Vec<PlatformIntegration>>;
    async fn mark_synced(&self, integration_id: i64, at: DateTime<Utc>) -> Result<()>;
}

#[async_trait]
pub trait AlertStore: Send + Sync {
    async fn create(&self, alert: NewAlert) -> Result<Alert>;
    /// 최신순
    async fn list(&self, company_id: i64, unread_only: bool, limit: i64) -> Result<Vec<Alert>>;
    async fn unread_count(&self, company_id: i64) -> Result<i64>;
    /// 읽음 처리 (다른 회사 알림이거나 없으면 false)
    async fn mark_read(&self, company_id: i64, alert_id: i64) -> Result<bool>;
}

#[async_trait]
pub trait DashboardStore: Send + Sync {
    async fn metrics(&self, section: DashboardSection) -> Result<Vec<DashboardMetric>>;
    async fn charts(&self, section: DashboardSection, chart_id: Option<&str>) -> Result<Vec<ChartData>>;
    async fn upsert_metric(&self, section: DashboardSection, metric: &DashboardMetric) -> Result<()>;
    async fn upsert_chart(&self, section: DashboardSection, chart: &ChartData) -> Result<()>;
}

/// 모든 저장소 묶음
/// Every store the services need, shared behind `Arc`
#[derive(Clone)]
pub struct Stores {
    pub companies: Arc<dyn CompanyStore>,
    pub users: Arc<dyn UserStore>,
    pub sessions: Arc<dyn SessionStore>,
    pub orders: Arc<dyn OrderStore>,
    pub claims: Arc<dyn ClaimStore>,
    pub shipping_companies: Arc<dyn ShippingCompanyStore>,
    pub inventory: Arc<dyn InventoryStore>,
    pub cash_flow: Arc<dyn CashFlowStore>,
    pub ad_performance: Arc<dyn AdPerformanceStore>,
    pub integrations: Arc<dyn IntegrationStore>,
    pub alerts: Arc<dyn AlertStore>,
    pub dashboard: Arc<dyn DashboardStore>,
}

impl Stores {
    /// Postgres 리포지토리로 구성
    pub fn postgres(db: &Database) -> Self {
        let pool = db.pool().clone();
        Self {
            companies: Arc::new(CompanyRepository::new(pool.clone())),
            users: Arc::new(UserRepository::new(pool.clone())),
            sessions: Arc::new(SessionRepository::new(pool.clone())),
            orders: Arc::new(OrderRepository::new(pool.clone())),
            claims: Arc::new(ClaimRepository::new(pool.clone())),
            shipping_companies: Arc::new(ShippingCompanyRepository::new(pool.clone())),
            inventory: Arc::new(InventoryRepository::new(pool.clone())),
            cash_flow: Arc::new(CashFlowRepository::new(pool.clone())),
            ad_performance: Arc::new(AdPerformanceRepository::new(pool.clone())),
            integrations: Arc::new(IntegrationRepository::new(pool.clone())),
            alerts: Arc::new(AlertRepository::new(pool.clone())),
            dashboard: Arc::new(DashboardRepository::new(pool)),
        }
    }
}
