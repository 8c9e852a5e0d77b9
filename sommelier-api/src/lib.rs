//! sommelier-api library interface
//!
//! Exposes the pairing engine and the router for integration testing.

pub mod api;
pub mod catalog;
pub mod error;
pub mod models;
pub mod services;

pub use crate::error::{ApiError, ApiResult};

use axum::{
    http::{header, HeaderValue, Method, Uri},
    response::{IntoResponse, Response},
    Router,
};
use chrono::{DateTime, Utc};
use sommelier_common::config::{CorsConfig, TomlConfig};
use std::any::Any;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::catalog::{CatalogCache, CatalogSources};
use crate::services::{build_justifier, JustificationProvider, Recommender};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogCache>,
    pub recommender: Arc<Recommender>,
    /// True when justifications come from the text-generation service
    pub llm_configured: bool,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(
        catalog: Arc<CatalogCache>,
        justifier: Arc<dyn JustificationProvider>,
        llm_configured: bool,
    ) -> Self {
        let recommender = Arc::new(Recommender::new(Arc::clone(&catalog), justifier));
        Self {
            catalog,
            recommender,
            llm_configured,
            startup_time: Utc::now(),
        }
    }

    /// Wire catalog sources and the justification provider from configuration
    pub fn from_config(config: &TomlConfig) -> Self {
        let sources = CatalogSources::new(
            config.catalog.dishes_path.clone(),
            config.catalog.wines_path.clone(),
        );
        let catalog = Arc::new(CatalogCache::new(sources));
        let justifier = build_justifier(&config.justification);
        let llm_configured = config.justification.api_key().is_some();
        Self::new(catalog, justifier, llm_configured)
    }
}

/// Build application router
pub fn build_router(state: AppState, cors: &CorsConfig) -> Router {
    Router::new()
        .merge(api::recommendation_routes())
        .merge(api::catalog_routes())
        .merge(api::health_routes())
        .fallback(route_not_found)
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors_layer(cors))
        .layer(TraceLayer::new_for_http())
}

async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    ApiError::Internal(format!("handler panicked: {}", detail)).into_response()
}

/// CORS restricted to the configured origins; unparsable origins are skipped
fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
