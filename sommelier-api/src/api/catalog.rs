//! Catalog listing and reload endpoints

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tracing::info;

use crate::models::Wine;
use crate::AppState;

/// Number of dish names returned by the listing
pub const DISH_PREVIEW_LIMIT: usize = 20;

/// GET /api/dishes response
#[derive(Debug, Serialize)]
pub struct DishListResponse {
    pub total: usize,
    /// First dish names, in catalog order
    pub dishes: Vec<String>,
    pub message: String,
}

/// One entry of the wine listing
#[derive(Debug, Serialize)]
pub struct WineSummary {
    pub id: u32,
    pub name: String,
    pub style: String,
    pub full_style: String,
}

impl From<&Wine> for WineSummary {
    fn from(wine: &Wine) -> Self {
        Self {
            id: wine.id,
            name: wine.name.clone(),
            style: wine.style.to_string(),
            full_style: wine.full_style.clone(),
        }
    }
}

/// GET /api/wines response
#[derive(Debug, Serialize)]
pub struct WineListResponse {
    pub total: usize,
    pub wines: Vec<WineSummary>,
}

/// POST /api/catalog/reload response
#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    pub status: String,
    pub dishes: usize,
    pub wines: usize,
}

/// GET /api/dishes
pub async fn list_dishes(State(state): State<AppState>) -> Json<DishListResponse> {
    let dishes = state.catalog.get_dishes().await;
    let total = dishes.len();

    Json(DishListResponse {
        total,
        dishes: dishes
            .iter()
            .take(DISH_PREVIEW_LIMIT)
            .map(|d| d.name.clone())
            .collect(),
        message: format!("{} dishes available", total),
    })
}

/// GET /api/wines
pub async fn list_wines(State(state): State<AppState>) -> Json<WineListResponse> {
    let wines = state.catalog.get_wines().await;

    Json(WineListResponse {
        total: wines.len(),
        wines: wines.iter().map(WineSummary::from).collect(),
    })
}

/// POST /api/catalog/reload
///
/// Drops the cached catalog and reads both sources again.
pub async fn reload_catalog(State(state): State<AppState>) -> Json<ReloadResponse> {
    let catalog = state.catalog.reload().await;
    info!(
        dishes = catalog.dishes.len(),
        wines = catalog.wines.len(),
        "Catalog reloaded on request"
    );

    Json(ReloadResponse {
        status: "reloaded".to_string(),
        dishes: catalog.dishes.len(),
        wines: catalog.wines.len(),
    })
}

/// Build catalog routes
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/api/dishes", get(list_dishes))
        .route("/api/wines", get(list_wines))
        .route("/api/catalog/reload", post(reload_catalog))
}
