use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::domains::orders::models::{
    ClaimCreate, ClaimStatus, ClaimType, CreateClaimRequest, OrderClaim, OrderStatus, StatusChange,
};
use crate::domains::orders::services::OrderService;
use crate::shared::database::{ClaimStore, OrderStore};
use crate::shared::errors::AppError;

// 반품/교환 클레임
// 반품 승인 순서: 클레임 requested → approved (조건부), 그 다음 주문 → returned.
// 주문 전이가 실패하면 클레임을 requested로 되돌리므로 주문만 returned가 되는 경우는 없음.
// The two writes go through different stores, so for a moment the claim reads
// approved while the order is still shipped/delivered.
#[derive(Clone)]
pub struct ClaimService {
    claims: Arc<dyn ClaimStore>,
    orders: Arc<dyn OrderStore>,
    order_service: OrderService,
}

impl ClaimService {
    pub fn new(claims: Arc<dyn ClaimStore>, orders: Arc<dyn OrderStore>, order_service: OrderService) -> Self {
        Self {
            claims,
            orders,
            order_service,
        }
    }

    /// 클레임 접수 (출고/배송 완료 주문만)
    pub async fn create_claim(
        &self,
        company_id: i64,
        order_id: i64,
        request: CreateClaimRequest,
    ) -> Result<OrderClaim, AppError> {
        let claim_type: ClaimType = request
            .claim_type
            .parse()
            .map_err(|e: String| AppError::validation("claimType", e))?;
        let reason = request
            .reason
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty())
            .ok_or_else(|| AppError::validation("reason", "Claim reason is required"))?;

        let order = self
            .orders
            .find_by_id(order_id)
            .await?
            .filter(|o| o.company_id == company_id)
            .ok_or_else(|| AppError::not_found(format!("Order {} not found", order_id)))?;

        if !matches!(order.status, OrderStatus::Shipped | OrderStatus::Delivered) {
            return Err(AppError::invalid_state(format!(
                "Order {} is {} and cannot be claimed",
                order.order_number, order.status
            )));
        }

        let claim = self
            .claims
            .create(ClaimCreate {
                order_id: order.id,
                company_id,
                claim_type,
                reason,
            })
            .await?;

        info!(claim_id = claim.id, order_id, claim_type = claim_type.as_str(), "Claim created");
        Ok(claim)
    }

    pub async fn list_claims(&self, company_id: i64, status: Option<&str>) -> Result<Vec<OrderClaim>, AppError> {
        let status = match status.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => Some(raw.parse::<ClaimStatus>().map_err(|e| AppError::validation("status", e))?),
            None => None,
        };
        Ok(self.claims.list(company_id, status).await?)
    }

    /// 클레임 처리 (승인/거절/완료)
    pub async fn process_claim(
        &self,
        company_id: i64,
        claim_id: i64,
        status: &str,
        actor: &str,
    ) -> Result<OrderClaim, AppError> {
        let next: ClaimStatus = status.parse().map_err(|e: String| AppError::validation("status", e))?;

        let claim = self
            .claims
            .find_by_id(claim_id)
            .await?
            .filter(|c| c.company_id == company_id)
            .ok_or_else(|| AppError::not_found(format!("Claim {} not found", claim_id)))?;

        if !claim.status.can_transition_to(next) {
            return Err(AppError::invalid_state(format!(
                "Claim {} cannot move from {} to {}",
                claim.id, claim.status, next
            )));
        }

        // 클레임을 먼저 조건부 갱신 (동시 처리 중 하나만 통과)
        let processed_at = Utc::now();
        if !self
            .claims
            .update_status(claim.id, claim.status, next, Some(processed_at))
            .await?
        {
            return Err(AppError::Conflict(format!(
                "Claim {} was processed by another request",
                claim.id
            )));
        }

        // 반품 승인: 주문을 returned로, 실패하면 클레임을 원래 상태로 되돌림
        if next == ClaimStatus::Approved && claim.claim_type == ClaimType::Return {
            let returned = self
                .order_service
                .update_status(
                    company_id,
                    claim.order_id,
                    StatusChange::to(OrderStatus::Returned).with_reason(claim.reason.clone()),
                    actor,
                )
                .await;

            if let Err(e) = returned {
                match self
                    .claims
                    .update_status(claim.id, next, claim.status, claim.processed_at)
                    .await
                {
                    Ok(true) => {}
                    Ok(false) => warn!(claim_id, "Claim changed before it could be restored"),
                    Err(restore) => warn!(claim_id, "Failed to restore claim status: {:#}", restore),
                }
                return Err(e);
            }
        }

        info!(claim_id, status = %next, actor, "Claim processed");
        Ok(OrderClaim {
            status: next,
            processed_at: Some(processed_at),
            ..claim
        })
    }
}
