//! Symptom Advisor API Server
//!
//! Serves the symptom options, rule lookups and "check result" assessments
//! over HTTP. The rule table is loaded once at startup and shared read-only.

use advisor::SymptomAdvisor;
use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use metrics_exporter_prometheus::PrometheusBuilder;
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod error;
mod routes;
mod settings;

pub use error::{ApiError, ErrorResponse};
pub use settings::{AppConfig, ConfigError};

/// Application state shared across handlers
pub struct AppState {
    /// Immutable advisor over the loaded rule table
    pub advisor: SymptomAdvisor,
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create new application state
    pub fn new(advisor: SymptomAdvisor) -> Self {
        Self {
            advisor,
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: std::time::Instant::now(),
        }
    }
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: u64,
    pub version: String,
    pub uptime_seconds: u64,
    pub rule_count: usize,
    pub match_policy: String,
}

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/v1/health", get(health_handler))
        .route("/api/v1/symptoms", get(routes::symptoms::get_symptoms))
        .route("/api/v1/lookup", get(routes::symptoms::get_lookup))
        .route("/api/v1/score", get(routes::check::get_score))
        .route("/api/v1/check", post(routes::check::post_check))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let response = HealthResponse {
        status: "healthy".to_string(),
        timestamp,
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        rule_count: state.advisor.table().len(),
        match_policy: state.advisor.config().match_policy.as_str().to_string(),
    };

    Json(response)
}

/// Initialize logging; later calls are no-ops
pub fn init_logging(level: Level) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}

/// Install the Prometheus exporter on `addr`
pub fn init_metrics(addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let addr: SocketAddr = addr.parse()?;
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    info!("Prometheus exporter listening on {}", addr);
    Ok(())
}

/// Load the rule table and run the server until it stops
pub async fn run_server(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let advisor = SymptomAdvisor::from_path(&config.rules_path, config.advisor())?;
    let state = Arc::new(AppState::new(advisor));
    let app = create_router(state);

    info!("Starting API server on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
