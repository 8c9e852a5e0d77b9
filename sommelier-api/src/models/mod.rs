//! Catalog entities and per-request output types

pub mod dish;
pub mod recommendation;
pub mod wine;

pub use dish::{Acidity, CategoryKind, Dish, Intensity};
pub use recommendation::{Recommendation, ScoredWine};
pub use wine::{Wine, WineStyle};
