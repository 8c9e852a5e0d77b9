//! Prompt text for model-generated justifications

use crate::models::{Dish, Wine};

/// Build the single prompt sent to the text-generation endpoint
pub fn build_prompt(dish: &Dish, wine: &Wine) -> String {
    let category = if dish.category.is_empty() {
        "dish"
    } else {
        dish.category.as_str()
    };
    let wine_style = if wine.full_style.is_empty() {
        wine.style.as_str()
    } else {
        wine.full_style.as_str()
    };

    let mut details = format!(
        "- Dish category: {}\n- Main ingredients: {}\n",
        category,
        dish.ingredients.join(", ")
    );
    if let Some(seasonings) = &dish.seasonings {
        details.push_str(&format!("- Seasonings: {}\n", seasonings));
    }
    if let Some(acidity) = dish.acidity {
        details.push_str(&format!("- Acidity: {}\n", acidity.as_str()));
    }
    details.push_str(&format!(
        "- Flavor intensity: {}\n- Wine characteristics: {}\n- Wine style: {}\n",
        dish.intensity.as_str(),
        wine.description,
        wine_style
    ));

    format!(
        "You are an experienced, courteous sommelier specialised in food and wine pairing.\n\n\
         Explain clearly and convincingly why the wine \"{}\" ({}) pairs well with the dish \"{}\" ({}).\n\n\
         Consider:\n{}\n\
         Give a professional, approachable justification in 2-3 sentences.",
        wine.name, wine_style, dish.name, category, details
    )
}
