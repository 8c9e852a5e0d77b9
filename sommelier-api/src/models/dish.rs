//! Dish record

use serde::Serialize;

/// Flavor intensity of a dish
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Mild,
    Medium,
    Intense,
}

impl Intensity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intensity::Mild => "mild",
            Intensity::Medium => "medium",
            Intensity::Intense => "intense",
        }
    }
}

/// Acidity level of a dish
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Acidity {
    Low,
    Medium,
    High,
}

impl Acidity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Acidity::Low => "low",
            Acidity::Medium => "medium",
            Acidity::High => "high",
        }
    }
}

/// Category kinds the scoring rules know about
///
/// The raw category string on [`Dish`] is kept as-is; this is only the
/// recognised interpretation of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryKind {
    RedMeat,
    WhiteMeat,
    Fish,
    Seafood,
    Vegetarian,
}

impl CategoryKind {
    /// Recognise English and Portuguese category names, case-insensitively
    pub fn recognize(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "red meat" | "carne vermelha" => Some(CategoryKind::RedMeat),
            "white meat" | "carne branca" => Some(CategoryKind::WhiteMeat),
            "fish" | "peixe" => Some(CategoryKind::Fish),
            "seafood" | "frutos do mar" => Some(CategoryKind::Seafood),
            "vegetarian" | "vegetariano" => Some(CategoryKind::Vegetarian),
            _ => None,
        }
    }
}

/// A dish from the catalog. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    /// `"{name} with {ingredients}"`
    pub description: String,
    /// Raw category string from the source table
    pub category: String,
    pub ingredients: Vec<String>,
    pub intensity: Intensity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acidity: Option<Acidity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seasonings: Option<String>,
}

impl Dish {
    pub fn category_kind(&self) -> Option<CategoryKind> {
        CategoryKind::recognize(&self.category)
    }
}
