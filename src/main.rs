use std::sync::Arc;

use anyhow::Context;
use axum::http::{HeaderValue, Method};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use commerce_dashboard::domains::integrations::services::IntegrationRegistry;
use commerce_dashboard::domains::integrations::tracking::HttpCarrierGateway;
use commerce_dashboard::routes::{create_router, ApiDoc};
use commerce_dashboard::shared::clients::build_http_client;
use commerce_dashboard::shared::config::Config;
use commerce_dashboard::shared::database::{Database, Stores};
use commerce_dashboard::shared::services::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 로깅 초기화 (RUST_LOG, 기본 info)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // 설정 로드 (.env)
    let config = Config::from_env().context("Failed to load configuration")?;

    // DB 연결
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    db.initialize()
        .await
        .context("Failed to initialize database")?;

    // 외부 연동 (광고/마켓플레이스/택배사)
    let http_client = build_http_client(config.http_timeout)?;
    let registry = Arc::new(IntegrationRegistry::standard(http_client.clone()));
    let carriers = Arc::new(HttpCarrierGateway::new(http_client));

    // AppState 생성 (모든 Service 초기화)
    let app_state = AppState::new(Stores::postgres(&db), registry, carriers, &config);

    // 백그라운드 작업 시작
    app_state.scheduler_state.scheduler.start();

    // CORS 설정
    let cors = CorsLayer::new()
        .allow_origin(
            config
                .cors_origin
                .parse::<HeaderValue>()
                .context("CORS_ORIGIN is not a valid header value")?,
        )
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::AUTHORIZATION,
            axum::http::header::ACCEPT,
        ])
        .allow_credentials(true);

    // Router 생성
    let app = Router::new()
        .merge(create_router())
        .merge(
            SwaggerUi::new("/api")
                .url("/api-docs/openapi.json", ApiDoc::openapi())
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    // 서버 시작
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Server running on http://localhost:{}", config.port);
    info!("Swagger UI available at http://localhost:{}/api", config.port);

    // 서버 실행
    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
