//! Process-lifetime catalog cache
//!
//! Loads both tables on first access and keeps them until invalidated.
//! The first load is serialised: concurrent callers that arrive while a load
//! is in progress wait for it and share its result.

use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use super::enrichment::{map_dishes, map_wines, DISH_COLUMNS, WINE_COLUMNS};
use super::tabular::load_table;
use crate::models::{Dish, Wine};

/// Paths of the two catalog tables
#[derive(Debug, Clone)]
pub struct CatalogSources {
    pub dishes_path: PathBuf,
    pub wines_path: PathBuf,
}

impl CatalogSources {
    pub fn new(dishes_path: impl Into<PathBuf>, wines_path: impl Into<PathBuf>) -> Self {
        Self {
            dishes_path: dishes_path.into(),
            wines_path: wines_path.into(),
        }
    }
}

/// Loaded dish and wine collections, in source order
#[derive(Debug, Default)]
pub struct Catalog {
    pub dishes: Arc<Vec<Dish>>,
    pub wines: Arc<Vec<Wine>>,
}

/// Lazily loaded, explicitly invalidated catalog
pub struct CatalogCache {
    sources: CatalogSources,
    loaded: RwLock<Option<Arc<Catalog>>>,
}

impl CatalogCache {
    pub fn new(sources: CatalogSources) -> Self {
        Self {
            sources,
            loaded: RwLock::new(None),
        }
    }

    /// Return the cached catalog, loading it on first use
    pub async fn load_if_absent(&self) -> Arc<Catalog> {
        if let Some(catalog) = self.loaded.read().await.as_ref() {
            return Arc::clone(catalog);
        }

        let mut slot = self.loaded.write().await;
        // Another caller may have finished loading while we waited
        if let Some(catalog) = slot.as_ref() {
            return Arc::clone(catalog);
        }

        let catalog = Arc::new(self.read_sources().await);
        *slot = Some(Arc::clone(&catalog));
        catalog
    }

    pub async fn get_dishes(&self) -> Arc<Vec<Dish>> {
        Arc::clone(&self.load_if_absent().await.dishes)
    }

    pub async fn get_wines(&self) -> Arc<Vec<Wine>> {
        Arc::clone(&self.load_if_absent().await.wines)
    }

    /// Drop the cached catalog; the next access reads the sources again
    pub async fn invalidate(&self) {
        *self.loaded.write().await = None;
        info!("Catalog cache invalidated");
    }

    /// Invalidate and load immediately
    pub async fn reload(&self) -> Arc<Catalog> {
        self.invalidate().await;
        self.load_if_absent().await
    }

    async fn read_sources(&self) -> Catalog {
        let dishes = match load_table(&self.sources.dishes_path, &DISH_COLUMNS).await {
            Ok(records) => map_dishes(&records),
            Err(e) => {
                warn!("Dish catalog unavailable, continuing with no dishes: {}", e);
                Vec::new()
            }
        };

        let wines = match load_table(&self.sources.wines_path, &WINE_COLUMNS).await {
            Ok(records) => map_wines(&records),
            Err(e) => {
                warn!("Wine catalog unavailable, continuing with no wines: {}", e);
                Vec::new()
            }
        };

        info!(
            dishes = dishes.len(),
            wines = wines.len(),
            "Catalog loaded"
        );

        Catalog {
            dishes: Arc::new(dishes),
            wines: Arc::new(wines),
        }
    }
}
