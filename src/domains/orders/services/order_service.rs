use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::domains::integrations::models::{IntegrationTarget, TrackingInfo};
use crate::domains::integrations::services::IntegrationRegistry;
use crate::domains::integrations::tracking::CarrierGateway;
use crate::domains::orders::models::{
    BulkShipRequest, BulkShipResponse, BulkShipResult, ListOrdersQuery, Order, OrderDetail,
    OrderFilter, OrderPage, OrderStats, OrderStatus, OrderUpdate, Platform, ShippingCompany,
    StatsPeriod, StatusChange, StatusHistoryCreate, UpdateStatusRequest,
};
use crate::domains::orders::services::stats::compute_stats;
use crate::shared::database::{IntegrationStore, OrderStore, ShippingCompanyStore};
use crate::shared::errors::{AppError, ErrorResponse};
use crate::shared::utils::{PageInfo, PageRequest};

// =====================================================
// 주문 관리 서비스
// =====================================================
// 상태 전이 규칙은 OrderStatus::can_transition_to 한 곳에서만 판단하고,
// 모든 변경은 update_status를 거쳐 이력과 함께 저장됩니다.
//
// 플랫폼 통보(출고/취소)는 best-effort:
// 실패해도 로컬 변경은 유지하고 warn 로그만 남김
// =====================================================

/// 플랫폼에 알릴 이벤트
enum PlatformEvent<'a> {
    Shipment { carrier_code: &'a str, tracking_number: &'a str },
    Cancellation { reason: &'a str },
}

#[derive(Clone)]
pub struct OrderService {
    orders: Arc<dyn OrderStore>,
    shipping_companies: Arc<dyn ShippingCompanyStore>,
    integrations: Arc<dyn IntegrationStore>,
    carriers: Arc<dyn CarrierGateway>,
    registry: Arc<IntegrationRegistry>,
}

impl OrderService {
    pub fn new(
        orders: Arc<dyn OrderStore>,
        shipping_companies: Arc<dyn ShippingCompanyStore>,
        integrations: Arc<dyn IntegrationStore>,
        carriers: Arc<dyn CarrierGateway>,
        registry: Arc<IntegrationRegistry>,
    ) -> Self {
        Self {
            orders,
            shipping_companies,
            integrations,
            carriers,
            registry,
        }
    }

    /// 주문 목록 (필터 + 페이지)
    /// List a tenant's orders, newest first
    pub async fn list_orders(&self, company_id: i64, query: ListOrdersQuery) -> Result<OrderPage, AppError> {
        let filter = OrderFilter {
            status: parse_optional("status", query.status.as_deref())?,
            platform: parse_optional::<Platform>("platform", query.platform.as_deref())?,
            date_from: parse_date_bound("dateFrom", query.date_from.as_deref(), false)?,
            date_to: parse_date_bound("dateTo", query.date_to.as_deref(), true)?,
            search: query
                .search
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        };
        let page = page_request(query.page, query.limit)?;

        let (orders, total) = self.orders.list(company_id, &filter, page).await?;
        let info = PageInfo::new(page, total);

        Ok(OrderPage {
            orders,
            total_count: total,
            current_page: info.current_page,
            total_pages: info.total_pages,
        })
    }

    /// 주문 상세 (상태 이력 포함)
    pub async fn get_order(&self, company_id: i64, order_id: i64) -> Result<OrderDetail, AppError> {
        let order = self.load(company_id, order_id).await?;
        let history = self.orders.history(order.id).await?;
        Ok(OrderDetail { order, history })
    }

    /// API 요청으로 상태 변경
    /// Validate a PATCH body and apply it. Cancellation goes through `cancel`.
    pub async fn apply_status_request(
        &self,
        company_id: i64,
        order_id: i64,
        request: UpdateStatusRequest,
        actor: &str,
    ) -> Result<Order, AppError> {
        let status: OrderStatus = request
            .status
            .parse()
            .map_err(|e: String| AppError::validation("status", e))?;

        if status == OrderStatus::Cancelled {
            return self.cancel(company_id, order_id, request.reason, actor).await;
        }

        // 택배사 코드는 등록된 것만 허용
        let carrier_code = match request.shipping_company.as_deref().map(str::trim) {
            Some(code) if !code.is_empty() => Some(self.find_carrier_by_code(code).await?.code),
            _ => None,
        };

        if let Some(metadata) = &request.metadata {
            if !metadata.is_object() {
                return Err(AppError::validation("metadata", "metadata must be a JSON object"));
            }
        }

        let change = StatusChange {
            status,
            tracking_number: request.tracking_number.filter(|t| !t.trim().is_empty()),
            carrier_code,
            reason: request.reason.filter(|r| !r.trim().is_empty()),
            metadata: request.metadata,
        };

        self.update_status(company_id, order_id, change, actor).await
    }

    /// 상태 변경 (모든 주문 변경의 단일 진입점)
    /// Apply a status change. Appends one history row only when the status actually changes.
    pub async fn update_status(
        &self,
        company_id: i64,
        order_id: i64,
        change: StatusChange,
        actor: &str,
    ) -> Result<Order, AppError> {
        let order = self.load(company_id, order_id).await?;

        if !order.status.can_transition_to(change.status) {
            return Err(AppError::invalid_state(format!(
                "Cannot change order {} from {} to {}",
                order.order_number, order.status, change.status
            )));
        }

        let now = Utc::now();
        let mut update = OrderUpdate::from_order(&order, now);
        update.status = change.status;

        if let Some(tracking_number) = &change.tracking_number {
            update.tracking_number = Some(tracking_number.clone());
        }
        if let Some(carrier_code) = &change.carrier_code {
            update.carrier_code = Some(carrier_code.clone());
        }
        if change.status == OrderStatus::Shipped && update.shipped_at.is_none() {
            update.shipped_at = Some(now);
        }
        if change.status == OrderStatus::Delivered {
            update.shipped_at.get_or_insert(now);
            update.delivered_at.get_or_insert(now);
        }

        if let Some(extra) = &change.metadata {
            merge_metadata(&mut update.metadata, extra);
        }
        if let (OrderStatus::Cancelled, Some(reason)) = (change.status, &change.reason) {
            merge_metadata(&mut update.metadata, &json!({ "cancelReason": reason }));
        }

        let status_changed = order.status != change.status;
        let history = status_changed.then(|| StatusHistoryCreate {
            order_id: order.id,
            from_status: order.status,
            to_status: change.status,
            changed_by: actor.to_string(),
            note: change.reason.clone(),
        });

        if !self.orders.save_update(&update, history.as_ref()).await? {
            return Err(AppError::Conflict(format!(
                "Order {} was modified concurrently, reload and retry",
                order.order_number
            )));
        }

        let updated = update.applied_to(&order);

        if status_changed {
            info!(
                order_id = updated.id,
                from = %order.status,
                to = %updated.status,
                actor,
                "Order status changed"
            );
            self.after_transition(&updated, change.reason.as_deref()).await;
        }

        Ok(updated)
    }

    /// 일괄 출고
    /// Ship every order independently; one result per input id, in input order
    pub async fn bulk_ship(
        &self,
        company_id: i64,
        request: BulkShipRequest,
        actor: &str,
    ) -> Result<BulkShipResponse, AppError> {
        if request.order_ids.is_empty() {
            return Err(AppError::validation("orderIds", "orderIds must not be empty"));
        }

        // 택배사가 없으면 아무것도 시도하지 않음
        let carrier = self
            .shipping_companies
            .find_by_id(request.shipping_company_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Shipping company {} not found", request.shipping_company_id))
            })?;
        if !carrier.is_active {
            return Err(AppError::invalid_state(format!("Shipping company {} is inactive", carrier.code)));
        }

        let mut results = Vec::with_capacity(request.order_ids.len());
        for order_id in request.order_ids {
            let result = match self.ship_one(company_id, order_id, &carrier, actor).await {
                Ok(order) => BulkShipResult {
                    order_id,
                    success: true,
                    tracking_number: order.tracking_number,
                    message: None,
                },
                Err(e) => BulkShipResult {
                    order_id,
                    success: false,
                    tracking_number: None,
                    message: Some(public_message(e)),
                },
            };
            results.push(result);
        }

        let shipped = results.iter().filter(|r| r.success).count();
        let total = results.len();
        info!(company_id, carrier = %carrier.code, shipped, total, "Bulk ship finished");

        Ok(BulkShipResponse {
            success: shipped == total,
            message: format!("Shipped {} of {} orders", shipped, total),
            results,
        })
    }

    async fn ship_one(
        &self,
        company_id: i64,
        order_id: i64,
        carrier: &ShippingCompany,
        actor: &str,
    ) -> Result<Order, AppError> {
        let order = self.load(company_id, order_id).await?;

        // 이미 출고된 주문에 송장을 다시 발급하지 않음
        if order.status == OrderStatus::Shipped || !order.status.can_transition_to(OrderStatus::Shipped) {
            return Err(AppError::invalid_state(format!(
                "Order {} cannot be shipped from {}",
                order.order_number, order.status
            )));
        }

        let tracking_number = self.carriers.issue_tracking_number(carrier, &order).await?;
        let change = StatusChange::to(OrderStatus::Shipped).with_tracking(tracking_number, Some(carrier.code.clone()));

        self.update_status(company_id, order.id, change, actor).await
    }

    /// 주문 취소
    /// Cancel before shipping. Cancelling an already-cancelled order is a no-op success.
    pub async fn cancel(
        &self,
        company_id: i64,
        order_id: i64,
        reason: Option<String>,
        actor: &str,
    ) -> Result<Order, AppError> {
        let reason = reason
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty())
            .ok_or_else(|| AppError::validation("reason", "Cancellation reason is required"))?;

        let order = self.load(company_id, order_id).await?;

        if order.status == OrderStatus::Cancelled {
            return Ok(order);
        }
        if order.status.is_shipped_or_later() {
            return Err(AppError::invalid_state(format!(
                "Order {} is already {} and cannot be cancelled",
                order.order_number, order.status
            )));
        }

        self.update_status(
            company_id,
            order.id,
            StatusChange::to(OrderStatus::Cancelled).with_reason(reason),
            actor,
        )
        .await
    }

    /// 배송 조회
    pub async fn get_tracking_info(
        &self,
        tracking_number: &str,
        company_code: Option<&str>,
    ) -> Result<TrackingInfo, AppError> {
        let code = company_code
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .ok_or_else(|| AppError::validation("companyCode", "companyCode is required"))?;

        let carrier = self.find_carrier_by_code(code).await?;
        let info = self.carriers.track(&carrier, tracking_number).await?;
        Ok(info)
    }

    /// 주문 통계
    pub async fn get_stats(&self, company_id: i64, period: StatsPeriod) -> Result<OrderStats, AppError> {
        let now = Utc::now();
        let from = period.window_start(now);
        let orders = self.orders.find_since(company_id, from).await?;
        Ok(compute_stats(&orders, period, from, now))
    }

    pub async fn list_shipping_companies(&self) -> Result<Vec<ShippingCompany>, AppError> {
        Ok(self.shipping_companies.list_active().await?)
    }

    /// 테넌트 소유 주문 조회 (다른 회사 주문은 없는 것으로 취급)
    async fn load(&self, company_id: i64, order_id: i64) -> Result<Order, AppError> {
        self.orders
            .find_by_id(order_id)
            .await?
            .filter(|order| order.company_id == company_id)
            .ok_or_else(|| AppError::not_found(format!("Order {} not found", order_id)))
    }

    async fn find_carrier_by_code(&self, code: &str) -> Result<ShippingCompany, AppError> {
        self.shipping_companies
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Unknown shipping company: {}", code)))
    }

    async fn after_transition(&self, order: &Order, reason: Option<&str>) {
        match order.status {
            OrderStatus::Shipped => {
                if let (Some(carrier_code), Some(tracking_number)) =
                    (order.carrier_code.as_deref(), order.tracking_number.as_deref())
                {
                    self.notify_platform(order, PlatformEvent::Shipment { carrier_code, tracking_number })
                        .await;
                }
            }
            OrderStatus::Cancelled => {
                let reason = reason.unwrap_or_default();
                self.notify_platform(order, PlatformEvent::Cancellation { reason }).await;
            }
            _ => {}
        }
    }

    /// 판매 플랫폼에 변경 통보 (best-effort)
    async fn notify_platform(&self, order: &Order, event: PlatformEvent<'_>) {
        if order.platform_order_id.is_none() {
            return;
        }
        let Some(client) = self.registry.marketplace(order.platform) else {
            return;
        };

        let integrations = match self.integrations.list_active(order.company_id).await {
            Ok(integrations) => integrations,
            Err(e) => {
                warn!(order_id = order.id, "Failed to load integrations for notification: {:#}", e);
                return;
            }
        };
        let Some(integration) = integrations
            .into_iter()
            .find(|i| i.target() == Some(IntegrationTarget::Marketplace(order.platform)))
        else {
            return;
        };

        let result = match event {
            PlatformEvent::Shipment { carrier_code, tracking_number } => {
                client
                    .notify_shipment(&integration.credentials, order, carrier_code, tracking_number)
                    .await
            }
            PlatformEvent::Cancellation { reason } => {
                client.notify_cancellation(&integration.credentials, order, reason).await
            }
        };

        if let Err(e) = result {
            warn!(order_id = order.id, platform = %order.platform, "Platform notification failed: {}", e);
        }
    }
}

/// 클라이언트에 보여줄 메시지 (내부 에러 상세는 로그로만)
fn public_message(err: AppError) -> String {
    let (_, axum::Json(body)): ErrorResponse = err.into();
    body["message"].as_str().unwrap_or("Internal server error").to_string()
}

/// 키 단위 병합 (객체가 아니면 통째로 교체)
fn merge_metadata(target: &mut Value, extra: &Value) {
    match (target.as_object_mut(), extra.as_object()) {
        (Some(target), Some(extra)) => {
            for (key, value) in extra {
                target.insert(key.clone(), value.clone());
            }
        }
        _ => *target = extra.clone(),
    }
}

fn parse_optional<T>(field: &str, raw: Option<&str>) -> Result<Option<T>, AppError>
where
    T: std::str::FromStr<Err = String>,
{
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(value) => value.parse().map(Some).map_err(|e| AppError::validation(field, e)),
        None => Ok(None),
    }
}

/// RFC 3339 또는 YYYY-MM-DD
/// A bare date used as an upper bound covers the whole day.
pub(crate) fn parse_date_bound(
    field: &str,
    raw: Option<&str>,
    end_of_day: bool,
) -> Result<Option<DateTime<Utc>>, AppError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(at.with_timezone(&Utc)));
    }

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        AppError::validation(field, format!("{} must be RFC 3339 or YYYY-MM-DD, got '{}'", field, raw))
    })?;
    let time = if end_of_day {
        NaiveTime::from_hms_micro_opt(23, 59, 59, 999_999).unwrap_or(NaiveTime::MIN)
    } else {
        NaiveTime::MIN
    };
    Ok(Some(Utc.from_utc_datetime(&date.and_time(time))))
}

/// page/limit 검증 (1 미만이면 400)
pub(crate) fn page_request(page: Option<i64>, limit: Option<i64>) -> Result<PageRequest, AppError> {
    fn positive(field: &str, value: Option<i64>) -> Result<Option<u32>, AppError> {
        match value {
            None => Ok(None),
            Some(v) if v >= 1 => Ok(Some(u32::try_from(v).unwrap_or(u32::MAX))),
            Some(v) => Err(AppError::validation(field, format!("{} must be at least 1, got {}", field, v))),
        }
    }

    let page = positive("page", page)?;
    let limit = positive("limit", limit)?;
    PageRequest::new(page, limit).ok_or_else(|| AppError::validation("page", "page and limit must be at least 1"))
}
