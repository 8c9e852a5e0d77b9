//! HTTP API handlers for sommelier-api

pub mod catalog;
pub mod health;
pub mod recommendation;

pub use catalog::catalog_routes;
pub use health::health_routes;
pub use recommendation::recommendation_routes;
