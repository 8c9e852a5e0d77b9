//! Pairing engine: dish lookup, wine scoring, justification

pub mod compatibility_scorer;
pub mod dish_resolver;
pub mod justification;
pub mod recommender;

pub use compatibility_scorer::{best_wine, rank_wines, score_wine};
pub use dish_resolver::resolve_dish;
pub use justification::{build_justifier, JustificationProvider, TemplateJustifier};
pub use recommender::{RecommendationOutcome, Recommender};
