//! Dish/wine compatibility scoring
//!
//! The score is the plain sum of the rule contributions below. Rules are
//! independent and never subtract, so a wine only gains points.
//!
//! | Condition                                                 | Points |
//! |-----------------------------------------------------------|--------|
//! | red meat, intense dish, red wine                          | 5      |
//! | fish or seafood, white wine                               | 5      |
//! | white meat, white or red wine                             | 4      |
//! | vegetarian, white or sparkling wine                       | 4      |
//! | intense dish, red wine                                    | 3      |
//! | mild dish, white or sparkling wine                        | 3      |
//! | high-acidity dish, white wine                             | 2      |
//! | an ingredient overlaps one of the wine's pairing tags     | 2      |

use crate::models::{Acidity, CategoryKind, Dish, Intensity, ScoredWine, Wine, WineStyle};

pub const RED_MEAT_INTENSE_RED: u32 = 5;
pub const FISH_OR_SEAFOOD_WHITE: u32 = 5;
pub const WHITE_MEAT_WHITE_OR_RED: u32 = 4;
pub const VEGETARIAN_WHITE_OR_SPARKLING: u32 = 4;
pub const INTENSE_RED: u32 = 3;
pub const MILD_WHITE_OR_SPARKLING: u32 = 3;
pub const HIGH_ACIDITY_WHITE: u32 = 2;
pub const INGREDIENT_TAG_OVERLAP: u32 = 2;

/// Compatibility score of one wine for one dish
pub fn score_wine(dish: &Dish, wine: &Wine) -> u32 {
    let category = dish.category_kind();
    let style = &wine.style;
    let is_red = *style == WineStyle::Red;
    let is_white = *style == WineStyle::White;
    let is_sparkling = *style == WineStyle::Sparkling;

    let mut score = 0;

    if category == Some(CategoryKind::RedMeat) && dish.intensity == Intensity::Intense && is_red {
        score += RED_MEAT_INTENSE_RED;
    }
    if matches!(category, Some(CategoryKind::Fish | CategoryKind::Seafood)) && is_white {
        score += FISH_OR_SEAFOOD_WHITE;
    }
    if category == Some(CategoryKind::WhiteMeat) && (is_white || is_red) {
        score += WHITE_MEAT_WHITE_OR_RED;
    }
    if category == Some(CategoryKind::Vegetarian) && (is_white || is_sparkling) {
        score += VEGETARIAN_WHITE_OR_SPARKLING;
    }
    if dish.intensity == Intensity::Intense && is_red {
        score += INTENSE_RED;
    }
    if dish.intensity == Intensity::Mild && (is_white || is_sparkling) {
        score += MILD_WHITE_OR_SPARKLING;
    }
    if dish.acidity == Some(Acidity::High) && is_white {
        score += HIGH_ACIDITY_WHITE;
    }
    if ingredients_overlap_tags(&dish.ingredients, &wine.pairing_tags) {
        score += INGREDIENT_TAG_OVERLAP;
    }

    score
}

fn ingredients_overlap_tags(ingredients: &[String], tags: &[String]) -> bool {
    let tags: Vec<String> = tags.iter().map(|t| t.to_lowercase()).collect();
    ingredients.iter().any(|ingredient| {
        let ingredient = ingredient.trim().to_lowercase();
        if ingredient.is_empty() {
            return false;
        }
        tags.iter()
            .any(|tag| ingredient.contains(tag.as_str()) || tag.contains(ingredient.as_str()))
    })
}

/// Score every wine and keep those with a positive score, best first
///
/// The sort is stable, so wines with equal scores keep catalog order.
pub fn rank_wines<'a>(dish: &Dish, wines: &'a [Wine]) -> Vec<ScoredWine<'a>> {
    let mut ranked: Vec<ScoredWine<'a>> = wines
        .iter()
        .map(|wine| ScoredWine {
            wine,
            score: score_wine(dish, wine),
        })
        .filter(|scored| scored.score > 0)
        .collect();

    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

/// Top-ranked wine, first in catalog order among equal scores
pub fn best_wine<'a>(dish: &Dish, wines: &'a [Wine]) -> Option<ScoredWine<'a>> {
    rank_wines(dish, wines).into_iter().next()
}
