use utoipa::OpenApi;

// Import models for OpenAPI schema
use crate::domains::alerts::models::*;
use crate::domains::auth::models::*;
use crate::domains::dashboard::models::*;
use crate::domains::integrations::models::{AdPlatform, NormalizedMetric, TrackingEvent, TrackingInfo};
use crate::domains::orders::models::*;
use crate::domains::scheduler::models::*;

// OpenAPI 스키마 정의: Swagger 문서 자동 생성
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::domains::auth::handlers::auth_handler::register,
        crate::domains::auth::handlers::auth_handler::login,
        crate::domains::auth::handlers::auth_handler::logout,
        crate::domains::auth::handlers::auth_handler::verify,
        crate::domains::orders::handlers::order_handler::list_orders,
        crate::domains::orders::handlers::order_handler::get_order,
        crate::domains::orders::handlers::order_handler::update_status,
        crate::domains::orders::handlers::order_handler::bulk_ship,
        crate::domains::orders::handlers::order_handler::cancel_order,
        crate::domains::orders::handlers::order_handler::get_tracking_info,
        crate::domains::orders::handlers::order_handler::get_stats,
        crate::domains::orders::handlers::order_handler::list_shipping_companies,
        crate::domains::orders::handlers::claim_handler::create_claim,
        crate::domains::orders::handlers::claim_handler::list_claims,
        crate::domains::orders::handlers::claim_handler::process_claim,
        crate::domains::alerts::handlers::alert_handler::list_alerts,
        crate::domains::alerts::handlers::alert_handler::mark_read,
        crate::domains::dashboard::handlers::dashboard_handler::get_metrics,
        crate::domains::dashboard::handlers::dashboard_handler::get_charts,
        crate::domains::dashboard::handlers::dashboard_handler::upsert_metric,
        crate::domains::dashboard::handlers::dashboard_handler::upsert_chart,
        crate::domains::scheduler::handlers::scheduler_handler::get_status,
        crate::domains::scheduler::handlers::scheduler_handler::trigger_alerts,
        crate::domains::scheduler::handlers::scheduler_handler::trigger_job,
        crate::domains::scheduler::handlers::scheduler_handler::enable,
        crate::domains::scheduler::handlers::scheduler_handler::disable
    ),
    components(schemas(
        RegisterRequest,
        RegisterResponse,
        LoginRequest,
        LoginResponse,
        VerifyResponse,
        UserResponse,
        Company,
        Order,
        OrderStatus,
        PaymentStatus,
        Platform,
        OrderPage,
        OrderDetail,
        StatusHistory,
        UpdateStatusRequest,
        OrderActionResponse,
        ActionResponse,
        BulkShipRequest,
        BulkShipResponse,
        BulkShipResult,
        CancelOrderRequest,
        TrackingInfo,
        TrackingEvent,
        StatsPeriod,
        OrderStats,
        PlatformBreakdown,
        TimelineBucket,
        ShippingPerformance,
        ShippingCompany,
        OrderClaim,
        ClaimType,
        ClaimStatus,
        CreateClaimRequest,
        ProcessClaimRequest,
        Alert,
        AlertType,
        Severity,
        AlertsResponse,
        AdPlatform,
        NormalizedMetric,
        DashboardSection,
        DashboardMetric,
        ChartData,
        UpsertMetricRequest,
        UpsertChartRequest,
        SchedulerStatus,
        JobStatus,
        JobState,
        JobRunReport
    )),
    modifiers(
        &SecurityAddon
    ),
    tags(
        (name = "Auth", description = "Authentication API endpoints (session-backed bearer tokens)"),
        (name = "Orders", description = "Order management across marketplaces"),
        (name = "Claims", description = "Return / exchange / cancellation claims"),
        (name = "Alerts", description = "Threshold alerts and daily reports"),
        (name = "Dashboard", description = "Dashboard metrics and charts"),
        (name = "Scheduler", description = "Background job control")
    ),
    info(
        title = "Commerce Dashboard API",
        description = "Multi-tenant order, advertising and alert backend for online sellers",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

// Security scheme 정의: Swagger UI에서 "Authorize" 버튼 추가
pub struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
