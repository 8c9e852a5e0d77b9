//! Health check endpoint

use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;

use crate::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status ("ok")
    pub status: String,
    /// Module name ("sommelier-api")
    pub module: String,
    /// Crate version from Cargo.toml
    pub version: String,
    /// Whether model-generated justifications are enabled
    pub llm_configured: bool,
    pub dishes: usize,
    pub wines: usize,
    /// Seconds since service started
    pub uptime_seconds: u64,
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let uptime = Utc::now().signed_duration_since(state.startup_time);
    let uptime_seconds = uptime.num_seconds().max(0) as u64;

    let catalog = state.catalog.load_if_absent().await;

    Json(HealthResponse {
        status: "ok".to_string(),
        module: "sommelier-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        llm_configured: state.llm_configured,
        dishes: catalog.dishes.len(),
        wines: catalog.wines.len(),
        uptime_seconds,
    })
}

/// Build health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
