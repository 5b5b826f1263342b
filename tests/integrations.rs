// =====================================================
// 외부 연동 클라이언트 테스트
// =====================================================
// 로컬 axum 서버를 플랫폼 API 대신 띄워서 요청/정규화를 확인

mod common;
use common::*;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, Query};
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{NaiveDate, TimeZone, Utc};
use parking_lot::Mutex;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use commerce_dashboard::domains::integrations::ads::{
    AdPlatformClient, FacebookAdsClient, GoogleAdsClient, NaverAdsClient,
};
use commerce_dashboard::domains::integrations::marketplace::{
    CoupangClient, MarketplaceClient, NaverCommerceClient,
};
use commerce_dashboard::domains::integrations::models::{AdPlatform, DateRange, PlatformCredentials};
use commerce_dashboard::domains::integrations::signing::naver_ads_signature;
use commerce_dashboard::domains::integrations::tracking::{CarrierGateway, HttpCarrierGateway};
use commerce_dashboard::domains::orders::models::{OrderStatus, PaymentStatus, Platform, ShippingCompany};
use commerce_dashboard::shared::clients::build_http_client;

/// 로컬 서버 실행 후 base URL 반환
async fn spawn_server(router: Router) -> String {
    spawn_server_with(|_| router).await
}

/// 자기 base URL이 필요한 라우터용 (paging.next 등 절대 URL 응답)
async fn spawn_server_with(build: impl FnOnce(String) -> Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let router = build(base.clone());
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    base
}

fn http() -> reqwest::Client {
    build_http_client(Duration::from_secs(5)).unwrap()
}

fn march(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
}

fn google_credentials() -> PlatformCredentials {
    PlatformCredentials {
        client_id: Some("client".to_string()),
        client_secret: Some("secret".to_string()),
        refresh_token: Some("refresh".to_string()),
        developer_token: Some("dev-token".to_string()),
        customer_id: Some("123-456-7890".to_string()),
        ..Default::default()
    }
}

fn coupang_credentials() -> PlatformCredentials {
    PlatformCredentials {
        api_key: Some("access-key".to_string()),
        secret_key: Some("secret-key".to_string()),
        vendor_id: Some("A00012345".to_string()),
        ..Default::default()
    }
}

/// Google OAuth 토큰 + searchStream 모의 서버
/// 요청 경로와 헤더를 기록
fn google_router(seen: Arc<Mutex<Vec<String>>>) -> Router {
    let token_seen = seen.clone();
    Router::new()
        .route(
            "/token",
            post(move |body: String| async move {
                token_seen.lock().push(format!("token:{}", body.contains("grant_type=refresh_token")));
                Json(json!({ "access_token": "ya29.test", "expires_in": 3599 }))
            }),
        )
        // "googleAds:searchStream" 세그먼트는 라우트 패턴 대신 fallback에서 처리
        .fallback(move |uri: Uri, headers: HeaderMap| async move {
            let auth = headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            let developer = headers
                .get("developer-token")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            seen.lock().push(format!("{} {} {}", uri.path(), auth, developer));

            Json(json!([{
                "results": [
                    {
                        "campaign": { "id": "111", "name": "Brand" },
                        "segments": { "date": "2024-03-01" },
                        "metrics": {
                            "impressions": "10000",
                            "clicks": "250",
                            "costMicros": "12345678",
                            "conversions": 3,
                            "conversionsValue": 49382.712
                        }
                    },
                    {
                        "campaign": { "id": 222, "name": "Generic" },
                        "segments": { "date": "2024-03-02" },
                        "metrics": { "impressions": 0, "clicks": 0, "costMicros": 0 }
                    }
                ]
            }]))
        })
}

/// 테스트: Google Ads 토큰 발급 후 searchStream 결과를 정규화
#[tokio::test]
async fn test_google_ads_fetch_and_normalize() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let base = spawn_server(google_router(seen.clone())).await;
    let client = GoogleAdsClient::with_endpoints(http(), &base, &format!("{}/token", base));

    let metrics = client
        .fetch_performance(&google_credentials(), DateRange::new(march(1), march(2)).unwrap())
        .await
        .unwrap();

    let calls = seen.lock().clone();
    assert_eq!(calls[0], "token:true");
    assert_eq!(
        calls[1],
        "/customers/1234567890/googleAds:searchStream Bearer ya29.test dev-token"
    );

    assert_eq!(metrics.len(), 2);
    let brand = &metrics[0];
    assert_eq!(brand.platform, AdPlatform::GoogleAds);
    assert_eq!(brand.date, march(1));
    assert_eq!(brand.campaign_id.as_deref(), Some("111"));
    assert_eq!(brand.impressions, 10_000);
    assert_eq!(brand.clicks, 250);
    // 12,345,678 micros → 12.35
    assert_eq!(brand.cost, Decimal::new(1235, 2));
    assert_eq!(brand.revenue, Decimal::new(4938271, 2));
    // 250 / 10000 = 2.5%
    assert_eq!(brand.ctr, Decimal::new(250, 2));

    // 숫자 캠페인 ID, 지표 0 → 파생 지표 0
    let generic = &metrics[1];
    assert_eq!(generic.campaign_id.as_deref(), Some("222"));
    assert_eq!(generic.ctr, Decimal::ZERO);
    assert_eq!(generic.roas, Decimal::ZERO);
}

/// 테스트: 업스트림 5xx는 플랫폼 이름을 담은 IntegrationError
#[tokio::test]
async fn test_google_ads_upstream_error() {
    let router = Router::new().route(
        "/token",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "token service down") }),
    );
    let base = spawn_server(router).await;
    let client = GoogleAdsClient::with_endpoints(http(), &base, &format!("{}/token", base));

    let err = client
        .fetch_performance(&google_credentials(), DateRange::new(march(1), march(1)).unwrap())
        .await
        .unwrap_err();

    assert_eq!(err.platform, "google_ads");
    assert!(err.message.contains("500"));
    assert!(err.message.contains("token service down"));
}

/// 테스트: 필수 자격증명이 없으면 요청 전에 실패
#[tokio::test]
async fn test_google_ads_missing_credentials() {
    let client = GoogleAdsClient::with_endpoints(http(), "http://127.0.0.1:9", "http://127.0.0.1:9/token");
    let credentials = PlatformCredentials {
        developer_token: None,
        ..google_credentials()
    };

    let err = client
        .fetch_performance(&credentials, DateRange::new(march(1), march(1)).unwrap())
        .await
        .unwrap_err();

    assert_eq!(err.platform, "google_ads");
    assert!(err.message.contains("developerToken"));
}

/// 테스트: 쿠팡 발주서 조회는 상태별로 요청하고 서명 헤더를 붙임
#[tokio::test]
async fn test_coupang_fetch_orders() {
    let statuses = Arc::new(Mutex::new(Vec::new()));
    let recorded = statuses.clone();
    let router = Router::new().route(
        "/v2/providers/openapi/apis/api/v4/vendors/:vendor_id/ordersheets",
        get(
            move |Path(vendor_id): Path<String>,
                  Query(query): Query<HashMap<String, String>>,
                  headers: HeaderMap| async move {
                let auth = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default();
                if vendor_id != "A00012345"
                    || !auth.starts_with("CEA algorithm=HmacSHA256, access-key=access-key, signed-date=")
                {
                    return (StatusCode::UNAUTHORIZED, Json(json!({ "message": "bad signature" })));
                }

                let status = query.get("status").cloned().unwrap_or_default();
                recorded.lock().push(status.clone());

                let data = if status == "ACCEPT" {
                    json!([{
                        "orderId": 9001,
                        "shipmentBoxId": "77",
                        "orderedAt": "2024-03-01T09:30:00",
                        "status": "ACCEPT",
                        "orderer": { "name": "홍길동", "email": "hong@example.com", "safeNumber": "0502-1234-5678" },
                        "receiver": { "name": "김수령", "addr1": "서울시 강남구", "addr2": "101호" },
                        "orderItems": [
                            { "vendorItemName": "티셔츠", "shippingCount": 2, "salesPrice": 15000,
                              "orderPrice": 30000, "externalVendorSkuCode": "TS-01" }
                        ]
                    }])
                } else {
                    json!([])
                };
                (StatusCode::OK, Json(json!({ "code": 200, "data": data })))
            },
        ),
    );
    let base = spawn_server(router).await;
    let client = CoupangClient::with_base_url(http(), &base);

    let since = Utc.with_ymd_and_hms(2024, 2, 28, 0, 0, 0).unwrap();
    let orders = client.fetch_orders(&coupang_credentials(), since).await.unwrap();

    assert_eq!(
        *statuses.lock(),
        vec!["ACCEPT", "INSTRUCT", "DEPARTURE", "DELIVERING", "FINAL_DELIVERY"]
    );
    assert_eq!(orders.len(), 1);

    let order = &orders[0];
    assert_eq!(order.platform, Platform::Coupang);
    assert_eq!(order.order_number(), "CP-9001");
    assert_eq!(order.status, OrderStatus::New);
    // KST 09:30 → UTC 00:30
    assert_eq!(order.order_date, Utc.with_ymd_and_hms(2024, 3, 1, 0, 30, 0).unwrap());
    assert_eq!(order.customer_name, "홍길동");
    assert_eq!(order.recipient_name.as_deref(), Some("김수령"));
    assert_eq!(order.sku.as_deref(), Some("TS-01"));
    assert_eq!(order.quantity, 2);
    assert_eq!(order.total_amount, Decimal::from(30_000));
    assert_eq!(order.metadata["shipmentBoxId"], 77);
}

/// 테스트: 쿠팡 업체 코드 누락
#[tokio::test]
async fn test_coupang_missing_vendor_id() {
    let client = CoupangClient::with_base_url(http(), "http://127.0.0.1:9");
    let credentials = PlatformCredentials {
        vendor_id: None,
        ..coupang_credentials()
    };

    let err = client
        .fetch_orders(&credentials, Utc::now())
        .await
        .unwrap_err();
    assert_eq!(err.platform, "coupang");
    assert!(err.message.contains("vendorId"));
}

fn carrier(api_endpoint: Option<String>) -> ShippingCompany {
    ShippingCompany {
        id: CJ_ID,
        name: "CJ대한통운".to_string(),
        code: "CJ".to_string(),
        tracking_url_template: Some("https://trace.test/{trackingNumber}".to_string()),
        api_endpoint,
        api_key: Some("carrier-key".to_string()),
        is_active: true,
    }
}

/// 테스트: 택배사 API로 송장 발급 및 배송 조회
#[tokio::test]
async fn test_carrier_gateway_uses_api_endpoint() {
    let router = Router::new()
        .route(
            "/tracking-numbers",
            post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                if headers.get("x-api-key").and_then(|v| v.to_str().ok()) != Some("carrier-key") {
                    return (StatusCode::UNAUTHORIZED, Json(json!({})));
                }
                let number = format!("CJ-{}", body["orderNumber"].as_str().unwrap_or_default());
                (StatusCode::OK, Json(json!({ "trackingNumber": number })))
            }),
        )
        .route(
            "/tracking/:number",
            get(|Path(number): Path<String>| async move {
                Json(json!({
                    "status": "배송완료",
                    "delivered": true,
                    "events": [
                        { "time": "2024-03-02T01:00:00Z", "location": "강남", "description": "집화" },
                        { "time": "2024-03-03T05:00:00Z", "description": format!("{} 배달 완료", number) }
                    ]
                }))
            }),
        );
    let base = spawn_server(router).await;
    let gateway = HttpCarrierGateway::new(http());
    let carrier = carrier(Some(base));
    let order = sample_order(1, TEST_COMPANY_ID, "ORD-100", OrderStatus::Preparing, base_time());

    let tracking_number = gateway.issue_tracking_number(&carrier, &order).await.unwrap();
    assert_eq!(tracking_number, "CJ-ORD-100");

    let info = gateway.track(&carrier, &tracking_number).await.unwrap();
    assert!(info.delivered);
    assert_eq!(info.carrier_code, "CJ");
    assert_eq!(info.tracking_url.as_deref(), Some("https://trace.test/CJ-ORD-100"));
    assert_eq!(info.events.len(), 2);
    assert_eq!(info.events[1].description, "CJ-ORD-100 배달 완료");
    assert!(info.events[1].location.is_none());
}

/// 테스트: API가 없는 택배사는 송장번호를 로컬에서 만들고 조회 URL만 제공
#[tokio::test]
async fn test_carrier_gateway_without_endpoint() {
    let gateway = HttpCarrierGateway::new(http());
    let carrier = carrier(None);
    let order = sample_order(1, TEST_COMPANY_ID, "ORD-100", OrderStatus::Preparing, base_time());

    let tracking_number = gateway.issue_tracking_number(&carrier, &order).await.unwrap();
    assert!(tracking_number.starts_with("CJ"));

    let info = gateway.track(&carrier, &tracking_number).await.unwrap();
    assert_eq!(info.status, "unavailable");
    assert!(!info.delivered);
    assert_eq!(
        info.tracking_url,
        Some(format!("https://trace.test/{}", tracking_number))
    );
}

/// 테스트: 택배사 API 오류는 택배사 코드를 담아 반환
#[tokio::test]
async fn test_carrier_gateway_error_names_carrier() {
    let router = Router::new().route(
        "/tracking-numbers",
        post(|| async { (StatusCode::BAD_GATEWAY, "upstream down") }),
    );
    let base = spawn_server(router).await;
    let gateway = HttpCarrierGateway::new(http());
    let order = sample_order(1, TEST_COMPANY_ID, "ORD-100", OrderStatus::Preparing, base_time());

    let err = gateway
        .issue_tracking_number(&carrier(Some(base)), &order)
        .await
        .unwrap_err();
    assert_eq!(err.platform, "CJ");
    assert!(err.message.contains("502"));
}

// =====================================================
// Facebook Marketing API
// =====================================================

fn facebook_credentials() -> PlatformCredentials {
    PlatformCredentials {
        access_token: Some("fb-token".to_string()),
        account_id: Some("act_998877".to_string()),
        ..Default::default()
    }
}

fn insight_row(campaign_id: &str) -> Value {
    json!({
        "campaign_id": campaign_id,
        "campaign_name": format!("Campaign {}", campaign_id),
        "date_start": "2024-03-01",
        "date_stop": "2024-03-01",
        "impressions": "2000",
        "clicks": "40",
        "spend": "30.25",
        "actions": [
            { "action_type": "link_click", "value": "40" },
            { "action_type": "purchase", "value": "2" },
            { "action_type": "omni_purchase", "value": "2" }
        ],
        "action_values": [
            { "action_type": "purchase", "value": "120.50" },
            { "action_type": "omni_purchase", "value": "120.50" }
        ]
    })
}

/// 첫 페이지 + /page/:n 페이지 (last_page 이후에는 next 없음, None이면 끝없이 이어짐)
fn facebook_router(base: String, last_page: Option<usize>, requests: Arc<Mutex<Vec<String>>>) -> Router {
    let first_base = base.clone();
    let first_requests = requests.clone();

    Router::new()
        .route(
            "/act_998877/insights",
            get(move |Query(query): Query<HashMap<String, String>>| async move {
                first_requests.lock().push(format!(
                    "first token={} level={} increment={} range={}",
                    query.get("access_token").cloned().unwrap_or_default(),
                    query.get("level").cloned().unwrap_or_default(),
                    query.get("time_increment").cloned().unwrap_or_default(),
                    query.get("time_range").cloned().unwrap_or_default(),
                ));
                Json(json!({
                    "data": [insight_row("c1")],
                    "paging": { "next": format!("{}/page/2?access_token=fb-token", first_base) }
                }))
            }),
        )
        .route(
            "/page/:n",
            get(move |Path(n): Path<usize>, Query(query): Query<HashMap<String, String>>| async move {
                requests.lock().push(format!(
                    "page {} token={}",
                    n,
                    query.get("access_token").cloned().unwrap_or_default()
                ));
                let next = match last_page {
                    Some(last) if n >= last => Value::Null,
                    _ => json!(format!("{}/page/{}?access_token=fb-token", base, n + 1)),
                };
                Json(json!({
                    "data": [insight_row(&format!("c{}", n))],
                    "paging": { "next": next }
                }))
            }),
        )
}

/// 테스트: paging.next를 끝까지 따라가며 구매 action으로 전환/매출 집계
#[tokio::test]
async fn test_facebook_follows_paging_next() {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = requests.clone();
    let base = spawn_server_with(move |base| facebook_router(base, Some(3), recorded)).await;
    let client = FacebookAdsClient::with_base_url(http(), &base);

    let metrics = client
        .fetch_performance(&facebook_credentials(), DateRange::new(march(1), march(2)).unwrap())
        .await
        .unwrap();

    let calls = requests.lock().clone();
    assert_eq!(calls.len(), 3);
    assert!(calls[0].starts_with("first token=fb-token level=campaign increment=1 range="));
    assert!(calls[0].contains("\"since\":\"2024-03-01\""));
    assert!(calls[0].contains("\"until\":\"2024-03-02\""));
    // next URL은 그대로 요청 (토큰 포함)
    assert_eq!(calls[1], "page 2 token=fb-token");
    assert_eq!(calls[2], "page 3 token=fb-token");

    let ids: Vec<_> = metrics.iter().map(|m| m.campaign_id.clone().unwrap_or_default()).collect();
    assert_eq!(ids, vec!["c1", "c2", "c3"]);

    let first = &metrics[0];
    assert_eq!(first.platform, AdPlatform::FacebookAds);
    assert_eq!(first.date, march(1));
    assert_eq!(first.campaign_name.as_deref(), Some("Campaign c1"));
    assert_eq!(first.impressions, 2000);
    assert_eq!(first.clicks, 40);
    assert_eq!(first.cost, Decimal::new(3025, 2));
    // purchase와 omni_purchase는 같은 구매를 중복 보고하므로 합산하지 않음
    assert_eq!(first.conversions, 2);
    assert_eq!(first.revenue, Decimal::new(12050, 2));
}

/// 테스트: next가 끝나지 않으면 50페이지에서 멈춤
#[tokio::test]
async fn test_facebook_stops_at_page_limit() {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = requests.clone();
    let base = spawn_server_with(move |base| facebook_router(base, None, recorded)).await;
    let client = FacebookAdsClient::with_base_url(http(), &base);

    let metrics = client
        .fetch_performance(&facebook_credentials(), DateRange::new(march(1), march(1)).unwrap())
        .await
        .unwrap();

    assert_eq!(requests.lock().len(), 50);
    assert_eq!(metrics.len(), 50);
    assert_eq!(metrics[49].campaign_id.as_deref(), Some("c50"));
}

/// 테스트: 중간 페이지 5xx는 facebook_ads IntegrationError
#[tokio::test]
async fn test_facebook_page_error_names_platform() {
    let base = spawn_server_with(|base| {
        Router::new()
            .route(
                "/act_998877/insights",
                get(move || async move {
                    Json(json!({
                        "data": [insight_row("c1")],
                        "paging": { "next": format!("{}/broken", base) }
                    }))
                }),
            )
            .route(
                "/broken",
                get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "insights unavailable") }),
            )
    })
    .await;
    let client = FacebookAdsClient::with_base_url(http(), &base);

    let err = client
        .fetch_performance(&facebook_credentials(), DateRange::new(march(1), march(1)).unwrap())
        .await
        .unwrap_err();

    assert_eq!(err.platform, "facebook_ads");
    assert!(err.message.contains("503"));
    assert!(err.message.contains("insights unavailable"));
}

// =====================================================
// 네이버 검색광고
// =====================================================

fn naver_ads_credentials() -> PlatformCredentials {
    PlatformCredentials {
        api_key: Some("naver-key".to_string()),
        secret_key: Some("naver-secret".to_string()),
        customer_id: Some("1234567".to_string()),
        ..Default::default()
    }
}

/// 서명 헤더 검증 (경로만 서명, 쿼리 제외)
fn naver_signature_ok(headers: &HeaderMap, uri: &str) -> bool {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    };
    let Ok(timestamp) = header("x-timestamp").parse::<i64>() else {
        return false;
    };
    let expected = naver_ads_signature("naver-secret", timestamp, "GET", uri).unwrap();

    header("x-api-key") == "naver-key" && header("x-customer") == "1234567" && header("x-signature") == expected
}

/// 테스트: 캠페인 목록 → /stats, salesAmt는 광고비, convAmt는 전환매출
#[tokio::test]
async fn test_naver_ads_campaigns_then_stats() {
    let stats_query = Arc::new(Mutex::new(HashMap::new()));
    let recorded = stats_query.clone();
    let router = Router::new()
        .route(
            "/ncc/campaigns",
            get(|headers: HeaderMap| async move {
                if !naver_signature_ok(&headers, "/ncc/campaigns") {
                    return (StatusCode::UNAUTHORIZED, Json(json!({ "title": "bad signature" })));
                }
                (
                    StatusCode::OK,
                    Json(json!([
                        { "nccCampaignId": "cmp-a", "name": "브랜드 검색" },
                        { "nccCampaignId": "cmp-b", "name": null }
                    ])),
                )
            }),
        )
        .route(
            "/stats",
            get(move |headers: HeaderMap, Query(query): Query<HashMap<String, String>>| async move {
                if !naver_signature_ok(&headers, "/stats") {
                    return (StatusCode::UNAUTHORIZED, Json(json!({ "title": "bad signature" })));
                }
                *recorded.lock() = query;
                (
                    StatusCode::OK,
                    Json(json!({
                        "data": [
                            {
                                "id": "cmp-a",
                                "dateStart": "2024-03-01",
                                "impCnt": 1000,
                                "clkCnt": "50",
                                "salesAmt": "25000",
                                "ccnt": 4,
                                "convAmt": 180000
                            },
                            {
                                "id": "cmp-b",
                                "dateStart": "2024-03-02",
                                "impCnt": 10,
                                "clkCnt": 0,
                                "salesAmt": 0
                            }
                        ]
                    })),
                )
            }),
        );
    let base = spawn_server(router).await;
    let client = NaverAdsClient::with_base_url(http(), &base);

    let metrics = client
        .fetch_performance(&naver_ads_credentials(), DateRange::new(march(1), march(2)).unwrap())
        .await
        .unwrap();

    let query = stats_query.lock().clone();
    assert_eq!(query.get("ids").map(String::as_str), Some("cmp-a,cmp-b"));
    assert_eq!(query.get("timeIncrement").map(String::as_str), Some("1"));
    assert!(query["fields"].contains("salesAmt"));
    assert!(query["timeRange"].contains("\"since\":\"2024-03-01\""));

    assert_eq!(metrics.len(), 2);
    let brand = &metrics[0];
    assert_eq!(brand.platform, AdPlatform::NaverAds);
    assert_eq!(brand.date, march(1));
    assert_eq!(brand.campaign_id.as_deref(), Some("cmp-a"));
    assert_eq!(brand.campaign_name.as_deref(), Some("브랜드 검색"));
    assert_eq!(brand.impressions, 1000);
    assert_eq!(brand.clicks, 50);
    assert_eq!(brand.cost, Decimal::from(25_000));
    assert_eq!(brand.conversions, 4);
    assert_eq!(brand.revenue, Decimal::from(180_000));

    let unnamed = &metrics[1];
    assert_eq!(unnamed.campaign_name, None);
    assert_eq!(unnamed.cost, Decimal::ZERO);
    assert_eq!(unnamed.revenue, Decimal::ZERO);
}

/// 테스트: 캠페인이 없으면 /stats를 호출하지 않음
#[tokio::test]
async fn test_naver_ads_without_campaigns() {
    let router = Router::new()
        .route("/ncc/campaigns", get(|| async { Json(json!([])) }))
        .route(
            "/stats",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "should not be called") }),
        );
    let base = spawn_server(router).await;
    let client = NaverAdsClient::with_base_url(http(), &base);

    let metrics = client
        .fetch_performance(&naver_ads_credentials(), DateRange::new(march(1), march(1)).unwrap())
        .await
        .unwrap();
    assert!(metrics.is_empty());
}

/// 테스트: /stats 5xx는 naver_ads IntegrationError
#[tokio::test]
async fn test_naver_ads_upstream_error() {
    let router = Router::new()
        .route(
            "/ncc/campaigns",
            get(|| async { Json(json!([{ "nccCampaignId": "cmp-a", "name": "브랜드" }])) }),
        )
        .route(
            "/stats",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "stats backend error") }),
        );
    let base = spawn_server(router).await;
    let client = NaverAdsClient::with_base_url(http(), &base);

    let err = client
        .fetch_performance(&naver_ads_credentials(), DateRange::new(march(1), march(1)).unwrap())
        .await
        .unwrap_err();

    assert_eq!(err.platform, "naver_ads");
    assert!(err.message.contains("500"));
}

// =====================================================
// 네이버 커머스 (스마트스토어)
// =====================================================

fn naver_commerce_credentials() -> PlatformCredentials {
    PlatformCredentials {
        client_id: Some("nc-client".to_string()),
        client_secret: Some("nc-secret".to_string()),
        ..Default::default()
    }
}

fn product_order(product_order_id: &str, status: &str) -> Value {
    json!({
        "order": {
            "orderId": "2024030100001",
            "orderDate": "2024-03-01T18:00:00.000+09:00",
            "ordererName": "이영희",
            "ordererTel": "010-9876-5432"
        },
        "productOrder": {
            "productOrderId": product_order_id,
            "productName": "텀블러",
            "quantity": "3",
            "unitPrice": 12000,
            "totalPaymentAmount": "36000",
            "productOrderStatus": status,
            "sellerProductCode": "TB-500",
            "shippingAddress": { "name": "이영희", "baseAddress": "대전시 유성구", "detailedAddress": "2층" }
        }
    })
}

/// 테스트: 토큰 발급 → 변경 상품주문 ID → 상세 조회 후 정규화
#[tokio::test]
async fn test_naver_commerce_fetch_orders() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let token_calls = calls.clone();
    let changed_calls = calls.clone();
    let query_calls = calls.clone();

    let bearer = |headers: &HeaderMap| {
        headers.get("authorization").and_then(|v| v.to_str().ok()) == Some("Bearer nc-token")
    };

    let router = Router::new()
        .route(
            "/external/v1/oauth2/token",
            post(move |body: String| async move {
                let form_ok = body.contains("client_id=nc-client")
                    && body.contains("client_secret=nc-secret")
                    && body.contains("grant_type=client_credentials")
                    && body.contains("type=SELF");
                token_calls.lock().push(format!("token:{}", form_ok));
                Json(json!({ "access_token": "nc-token", "expires_in": 10800, "token_type": "Bearer" }))
            }),
        )
        .route(
            "/external/v1/pay-order/seller/product-orders/last-changed-statuses",
            get(move |headers: HeaderMap, Query(query): Query<HashMap<String, String>>| async move {
                if !bearer(&headers) {
                    return (StatusCode::UNAUTHORIZED, Json(json!({})));
                }
                changed_calls.lock().push(format!(
                    "changed:{}",
                    query.get("lastChangedFrom").cloned().unwrap_or_default()
                ));
                (
                    StatusCode::OK,
                    Json(json!({
                        "data": {
                            "lastChangeStatuses": [
                                { "productOrderId": "PO-1", "productOrderStatus": "PAYED" },
                                { "productOrderId": "PO-2", "productOrderStatus": "CANCELED" }
                            ]
                        }
                    })),
                )
            }),
        )
        .route(
            "/external/v1/pay-order/seller/product-orders/query",
            post(move |headers: HeaderMap, Json(body): Json<Value>| async move {
                if !bearer(&headers) {
                    return (StatusCode::UNAUTHORIZED, Json(json!({})));
                }
                query_calls.lock().push(format!("query:{}", body["productOrderIds"]));
                (
                    StatusCode::OK,
                    Json(json!({
                        "data": [product_order("PO-1", "PAYED"), product_order("PO-2", "CANCELED")]
                    })),
                )
            }),
        );
    let base = spawn_server(router).await;
    let client = NaverCommerceClient::with_base_url(http(), &base);

    let since = Utc.with_ymd_and_hms(2024, 2, 29, 15, 0, 0).unwrap();
    let orders = client
        .fetch_orders(&naver_commerce_credentials(), since)
        .await
        .unwrap();

    let calls = calls.lock().clone();
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[0], "token:true");
    assert_eq!(calls[1], format!("changed:{}", since.to_rfc3339()));
    assert_eq!(calls[2], r#"query:["PO-1","PO-2"]"#);

    assert_eq!(orders.len(), 2);
    let paid = &orders[0];
    assert_eq!(paid.platform, Platform::Smartstore);
    assert_eq!(paid.order_number(), "SS-PO-1");
    assert_eq!(paid.status, OrderStatus::New);
    assert_eq!(paid.payment_status, PaymentStatus::Paid);
    // KST 18:00 → UTC 09:00
    assert_eq!(paid.order_date, Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap());
    assert_eq!(paid.customer_name, "이영희");
    assert_eq!(paid.sku.as_deref(), Some("TB-500"));
    assert_eq!(paid.quantity, 3);
    assert_eq!(paid.total_amount, Decimal::from(36_000));
    assert_eq!(paid.shipping_address.as_deref(), Some("대전시 유성구 2층"));
    assert_eq!(paid.metadata["naverOrderId"], "2024030100001");

    let cancelled = &orders[1];
    assert_eq!(cancelled.status, OrderStatus::Cancelled);
    assert_eq!(cancelled.payment_status, PaymentStatus::Cancelled);
}

/// 테스트: 토큰 발급 5xx는 smartstore IntegrationError
#[tokio::test]
async fn test_naver_commerce_token_error() {
    let router = Router::new().route(
        "/external/v1/oauth2/token",
        post(|| async { (StatusCode::BAD_GATEWAY, "oauth gateway error") }),
    );
    let base = spawn_server(router).await;
    let client = NaverCommerceClient::with_base_url(http(), &base);

    let err = client
        .fetch_orders(&naver_commerce_credentials(), Utc::now())
        .await
        .unwrap_err();

    assert_eq!(err.platform, "smartstore");
    assert!(err.message.contains("502"));
    assert!(err.message.contains("oauth gateway error"));
}

/// 테스트: 변경 주문이 없으면 상세 조회 없이 빈 결과
#[tokio::test]
async fn test_naver_commerce_no_changes() {
    let router = Router::new()
        .route(
            "/external/v1/oauth2/token",
            post(|| async { Json(json!({ "access_token": "nc-token" })) }),
        )
        .route(
            "/external/v1/pay-order/seller/product-orders/last-changed-statuses",
            get(|| async { Json(json!({ "data": { "lastChangeStatuses": [] } })) }),
        )
        .route(
            "/external/v1/pay-order/seller/product-orders/query",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "should not be called") }),
        );
    let base = spawn_server(router).await;
    let client = NaverCommerceClient::with_base_url(http(), &base);

    let orders = client
        .fetch_orders(&naver_commerce_credentials(), Utc::now())
        .await
        .unwrap();
    assert!(orders.is_empty());
}
