//! qcline API /v1: REST endpoints
pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use qcline_report::{ReportBuilder, ReportProfile, TemplateRenderer, TemplatesFile};
use tower_http::trace::TraceLayer;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
use metrics::Metrics;

/// Shared, read-only state for every request
pub struct AppState {
    pub builder: ReportBuilder,
    pub renderer: TemplateRenderer<'static>,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(profile: ReportProfile, templates: TemplatesFile) -> Result<Self, ApiError> {
        Ok(Self {
            builder: ReportBuilder::new(profile),
            renderer: TemplateRenderer::new(templates)?,
            metrics: Metrics::new()?,
        })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        Self::new(config.load_profile()?, config.load_templates()?)
    }
}

pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/v1/evaluate", post(handlers::evaluate))
        .route("/v1/evaluate/batch", post(handlers::evaluate_batch))
        .route("/v1/risk", post(handlers::risk))
        .route("/v1/report", post(handlers::report))
        .route("/v1/report/summary", post(handlers::report_summary))
        .route("/v1/plans", get(handlers::plans))
        .route("/v1/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics))
        .layer(axum::middleware::from_fn(middleware::engine_version))
        .layer(middleware::cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: ApiConfig) -> Result<(), ApiError> {
    let state = AppState::from_config(&config)?;
    tracing::info!(
        profile = %state.builder.profile().name,
        templates = state.renderer.list_templates().len(),
        "loaded report configuration"
    );

    let app = create_app(Arc::new(state));
    let listener = tokio::net::TcpListener::bind(&config.addr).await?;

    tracing::info!("qcline API listening on {}", config.addr);
    axum::serve(listener, app).await?;
    Ok(())
}
