//! HTTP surface
//!
//! `GET /` health text, `POST /api/info` and `GET /api/download`.

pub mod error;
pub mod handlers;

use crate::extractor::Extractor;
use crate::utils::config::ServerSettings;
use anyhow::{Context, Result};
use axum::{
    body::Body,
    http::{HeaderValue, Method, Request},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, info_span, warn};
use uuid::Uuid;

/// Shared state injected into every handler. Holds no per-request data.
#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<dyn Extractor>,
}

impl AppState {
    pub fn new(extractor: Arc<dyn Extractor>) -> Self {
        Self { extractor }
    }
}

/// Build the application router
pub fn router(state: AppState, settings: &ServerSettings) -> Router {
    Router::new()
        .route("/", get(handlers::health))
        .route("/api/info", post(handlers::video_info))
        .route("/api/download", get(handlers::download))
        .with_state(state)
        .layer(build_cors_layer(settings))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                info_span!(
                    "request",
                    id = %Uuid::new_v4(),
                    method = %request.method(),
                    path = %request.uri().path(),
                )
            }),
        )
}

/// Bind and serve until Ctrl+C
pub async fn run(settings: ServerSettings, extractor: Arc<dyn Extractor>) -> Result<()> {
    let addr = settings.bind_addr();
    let app = router(AppState::new(extractor), &settings);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding to {}", addr))?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("running HTTP server")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to install Ctrl+C handler: {}", e);
    }
}

fn build_cors_layer(settings: &ServerSettings) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    let origins: Vec<HeaderValue> = settings
        .normalized_origins()
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    if origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(AllowOrigin::list(origins))
    }
}
