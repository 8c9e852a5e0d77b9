//! Dish and wine catalog: loading, enrichment, caching

pub mod cache;
pub mod enrichment;
pub mod tabular;

pub use cache::{Catalog, CatalogCache, CatalogSources};
pub use tabular::{load_table, parse_table, CatalogError, Record};
