//! Scoring and recommendation output types

use serde::Serialize;

use super::{Dish, Wine};

/// A wine paired with its compatibility score for one dish
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredWine<'a> {
    pub wine: &'a Wine,
    pub score: u32,
}

/// The single pairing returned for a request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub dish: Dish,
    pub wine: Wine,
    pub justification: String,
    /// Compatibility score of `wine` for `dish`
    pub score: u32,
}
