pub mod config;
mod error;

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use assist_agents::FlightAssistAgent;
use assist_core::{Category, Query, RecommendationEnvelope};
use assist_observability::{AppMetrics, MetricsSnapshot};
use axum::extract::rejection::JsonRejection;
use axum::extract::{DefaultBodyLimit, Json, State};
use axum::http::{header::HeaderName, HeaderValue, Method};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Router;
use serde::Serialize;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

pub use config::{parse_origin_list, ApiConfig};
pub use error::ApiError;

pub const MAX_BODY_BYTES: usize = 64 * 1024;
const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");
const SERVICE_DESCRIPTION: &str =
    "Keyword-based passenger guidance for delays, cancellations and weather disruptions";

#[derive(Clone)]
pub struct ApiState {
    pub agent: Arc<FlightAssistAgent>,
    pub metrics: Arc<AppMetrics>,
    pub config: Arc<ApiConfig>,
    pub started_at: Instant,
}

#[derive(Debug, Serialize)]
struct ServiceInfo {
    service: String,
    description: &'static str,
    version: &'static str,
    categories: Vec<&'static str>,
    endpoints: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
struct VersionResponse {
    service: String,
    version: &'static str,
    environment: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp_utc: String,
    uptime_seconds: u64,
    metrics: MetricsSnapshot,
}

pub fn build_app(config: ApiConfig) -> Router {
    let metrics = AppMetrics::shared();
    let agent = Arc::new(FlightAssistAgent::new(metrics.clone()));

    build_router(ApiState {
        agent,
        metrics,
        config: Arc::new(config),
        started_at: Instant::now(),
    })
}

pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .route("/", get(service_info))
        .route("/version", get(version))
        .route("/health", get(health))
        .route("/recommendation", post(recommend))
        .layer(build_cors_layer(&state.config.allowed_origins))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

async fn service_info(State(state): State<ApiState>) -> impl IntoResponse {
    Json(ServiceInfo {
        service: state.config.service_name.clone(),
        description: SERVICE_DESCRIPTION,
        version: env!("CARGO_PKG_VERSION"),
        categories: Category::ALL.iter().map(|c| c.as_code()).collect(),
        endpoints: vec![
            "GET /",
            "GET /version",
            "GET /health",
            "POST /recommendation",
        ],
    })
}

async fn version(State(state): State<ApiState>) -> impl IntoResponse {
    Json(VersionResponse {
        service: state.config.service_name.clone(),
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.clone(),
    })
}

async fn health(State(state): State<ApiState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        timestamp_utc: chrono::Utc::now().to_rfc3339(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        metrics: state.metrics.snapshot(),
    })
}

async fn recommend(
    State(state): State<ApiState>,
    payload: Result<Json<Query>, JsonRejection>,
) -> Result<Json<RecommendationEnvelope>, ApiError> {
    let Json(query) = payload?;
    let classified = state.agent.handle_query(&query);
    Ok(Json(RecommendationEnvelope::from(classified.response)))
}

/// Binds `config.bind` and serves until ctrl-c.
pub async fn serve(config: ApiConfig) -> Result<()> {
    let bind = config.bind.clone();
    let environment = config.environment.clone();
    let app = build_app(config);

    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;
    tracing::info!(bind = %bind, environment = %environment, "flight assist api started");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;
    tracing::info!("flight assist api stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

fn build_cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins = allowed_origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect::<Vec<_>>();

    let layer = CorsLayer::new().expose_headers([REQUEST_ID_HEADER]);

    if origins.is_empty() {
        layer
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Wildcards are not allowed alongside credentials.
        layer
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(AllowMethods::list([Method::GET, Method::POST, Method::OPTIONS]))
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true)
    }
}
