//! Deterministic justification built from catalog fields only

use async_trait::async_trait;

use super::JustificationProvider;
use crate::models::{Dish, Wine};

/// Offline justification; never fails and makes no external calls
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateJustifier;

impl TemplateJustifier {
    pub fn render(dish: &Dish, wine: &Wine) -> String {
        let profile = if wine.full_style.trim().is_empty() {
            wine.style.as_str().to_string()
        } else {
            wine.full_style.to_lowercase()
        };

        format!(
            "{} pairs beautifully with {} thanks to their complementary characteristics. \
             Its {} profile ({}) balances the flavors of the dish, creating a harmonious experience.",
            wine.name, dish.name, profile, wine.description
        )
    }
}

#[async_trait]
impl JustificationProvider for TemplateJustifier {
    async fn justify(&self, dish: &Dish, wine: &Wine) -> String {
        Self::render(dish, wine)
    }
}
