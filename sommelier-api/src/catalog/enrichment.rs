//! Derived fields for catalog records
//!
//! Pure functions applied once per row while the catalog loads.

use tracing::debug;

use super::tabular::Record;
use crate::models::{Acidity, Dish, Intensity, Wine, WineStyle};

/// Dish table columns, in source order
pub const DISH_COLUMNS: [&str; 7] = [
    "id",
    "name",
    "ingredients",
    "category",
    "seasonings",
    "acidity",
    "intensity",
];

/// Wine table columns, in source order
pub const WINE_COLUMNS: [&str; 2] = ["name", "style"];

/// Region used when the source has none
pub const DEFAULT_REGION: &str = "Brazil";

/// Characteristic used when the style string has a single token
pub const DEFAULT_CHARACTERISTIC: &str = "dry";

/// Map the raw intensity level to a flavor intensity
///
/// `alta` is intense and `média` is medium; anything else is mild.
pub fn map_intensity(raw: &str) -> Intensity {
    match raw.trim().to_lowercase().as_str() {
        "alta" | "high" => Intensity::Intense,
        "média" | "media" | "medium" => Intensity::Medium,
        _ => Intensity::Mild,
    }
}

/// Map the raw acidity level; unknown or empty values are absent
pub fn map_acidity(raw: &str) -> Option<Acidity> {
    match raw.trim().to_lowercase().as_str() {
        "baixa" | "low" => Some(Acidity::Low),
        "média" | "media" | "medium" => Some(Acidity::Medium),
        "alta" | "high" => Some(Acidity::High),
        _ => None,
    }
}

/// Split a raw style string into its style token and characteristic
///
/// `"tinto seco"` gives `("tinto", "seco")`; `"espumante"` gives
/// `("espumante", "dry")`.
pub fn split_style(raw: &str) -> (String, String) {
    let lowered = raw.to_lowercase();
    let mut parts = lowered.split_whitespace();
    let style = parts.next().unwrap_or_default().to_string();
    let rest: Vec<&str> = parts.collect();

    let characteristic = if rest.is_empty() {
        DEFAULT_CHARACTERISTIC.to_string()
    } else {
        rest.join(" ")
    };

    (style, characteristic)
}

/// Default pairing hints for a wine style
pub fn pairing_tags(style: &WineStyle) -> Vec<String> {
    let tags: &[&str] = match style {
        WineStyle::Red => &["red meats", "aged cheeses", "red-sauce pastas"],
        WineStyle::White => &["fish", "seafood", "poultry", "salads"],
        WineStyle::Rose => &["poultry", "fish", "mild cheeses"],
        WineStyle::Sparkling => &["appetizers", "seafood", "light desserts"],
        WineStyle::Fortified => &["desserts", "blue cheeses"],
        WineStyle::Other(_) => &["assorted dishes"],
    };
    tags.iter().map(|t| t.to_string()).collect()
}

/// Split a comma-joined ingredient field into trimmed, non-empty tokens
pub fn split_ingredients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Build a dish from a dish-table row
///
/// Returns `None` when the row has no id or no name.
pub fn dish_from_record(record: &Record) -> Option<Dish> {
    let id = record.field("id").trim();
    let name = record.field("name").trim();
    if id.is_empty() || name.is_empty() {
        debug!(id, name, "Skipping dish row without id or name");
        return None;
    }

    let ingredients = split_ingredients(record.field("ingredients"));
    let description = format!("{} with {}", name, ingredients.join(", "));

    Some(Dish {
        id: id.to_string(),
        name: name.to_string(),
        description,
        category: record.field("category").trim().to_string(),
        ingredients,
        intensity: map_intensity(record.field("intensity")),
        acidity: map_acidity(record.field("acidity")),
        seasonings: non_empty(record.field("seasonings")),
    })
}

/// Build a wine from a wine-table row, assigning the given id
///
/// Every row that parsed is kept; an empty name stays empty.
pub fn wine_from_record(id: u32, record: &Record) -> Wine {
    let name = record.field("name").trim();
    let full_style = record.field("style").trim().to_string();
    let (style_token, characteristic) = split_style(&full_style);
    let style = WineStyle::from_token(&style_token);

    Wine {
        id,
        name: name.to_string(),
        grape_variety: name.to_string(),
        description: format!("{} wine, {}", style, characteristic),
        pairing_tags: pairing_tags(&style),
        style,
        full_style,
        region: DEFAULT_REGION.to_string(),
    }
}

/// Map dish rows in order, dropping rows that violate the dish invariant
pub fn map_dishes(records: &[Record]) -> Vec<Dish> {
    records.iter().filter_map(dish_from_record).collect()
}

/// Map wine rows in order, numbering them from 1
pub fn map_wines(records: &[Record]) -> Vec<Wine> {
    records
        .iter()
        .zip(1u32..)
        .map(|(record, id)| wine_from_record(id, record))
        .collect()
}
