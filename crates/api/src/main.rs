use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use advisor_core::domain::advice::PortfolioAdvice;
use advisor_core::domain::analytics::{AdvancedAnalytics, MarketAnalyticsReport};
use advisor_core::models::{AdvisoryInput, AdvisoryModel, AnalyticsInput};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = advisor_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    let model = advisor_core::models::from_settings(&settings).map_err(|e| {
        sentry_anyhow::capture_anyhow(&e);
        e
    })?;
    let app = router(AppState { model });

    let port = settings.port()?;
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!(%addr, "api listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

#[derive(Clone)]
struct AppState {
    model: Arc<dyn AdvisoryModel>,
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/advisory/portfolio", post(recommend_portfolio))
        .route("/analytics/market", post(market_analytics))
        .route("/analytics/advanced", get(advanced_analytics))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> &'static str {
    "ok"
}

async fn recommend_portfolio(
    State(state): State<AppState>,
    Json(input): Json<AdvisoryInput>,
) -> Result<Json<PortfolioAdvice>, StatusCode> {
    let advice = state
        .model
        .recommend_portfolio(input)
        .await
        .map_err(internal_error)?;
    Ok(Json(advice))
}

async fn market_analytics(
    State(state): State<AppState>,
    Json(input): Json<AnalyticsInput>,
) -> Result<Json<MarketAnalyticsReport>, StatusCode> {
    let report = state
        .model
        .market_analytics(input)
        .await
        .map_err(internal_error)?;
    Ok(Json(report))
}

async fn advanced_analytics(
    State(state): State<AppState>,
) -> Result<Json<AdvancedAnalytics>, StatusCode> {
    let analytics = state
        .model
        .advanced_analytics()
        .await
        .map_err(internal_error)?;
    Ok(Json(analytics))
}

fn internal_error(e: anyhow::Error) -> StatusCode {
    sentry_anyhow::capture_anyhow(&e);
    tracing::error!(error = %e, "advisory model failed");
    StatusCode::INTERNAL_SERVER_ERROR
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

fn init_sentry(settings: &advisor_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
