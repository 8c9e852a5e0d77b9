//! Free-text dish lookup
//!
//! First match wins: dishes are tried in catalog order, so the source file
//! order decides between several matching dishes.

use crate::models::Dish;

/// Find the first dish whose name, description, ingredients or category
/// overlaps the query
///
/// A field overlaps when it contains the query or the query contains it,
/// compared case-insensitively. Blank queries and blank fields never match.
pub fn resolve_dish<'a>(dishes: &'a [Dish], query: &str) -> Option<&'a Dish> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }

    dishes.iter().find(|dish| dish_matches(dish, &query))
}

fn dish_matches(dish: &Dish, query: &str) -> bool {
    overlaps(&dish.name, query)
        || overlaps(&dish.description, query)
        || dish.ingredients.iter().any(|i| overlaps(i, query))
        || overlaps(&dish.category, query)
}

fn overlaps(field: &str, query: &str) -> bool {
    let field = field.trim().to_lowercase();
    !field.is_empty() && (field.contains(query) || query.contains(field.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Intensity;

    fn dish(id: &str, name: &str, category: &str, ingredients: &[&str]) -> Dish {
        let ingredients: Vec<String> = ingredients.iter().map(|s| s.to_string()).collect();
        Dish {
            id: id.to_string(),
            name: name.to_string(),
            description: format!("{} with {}", name, ingredients.join(", ")),
            category: category.to_string(),
            ingredients,
            intensity: Intensity::Mild,
            acidity: None,
            seasonings: None,
        }
    }

    fn catalog() -> Vec<Dish> {
        vec![
            dish("1", "Salmão Grelhado", "fish", &["salmão", "limão"]),
            dish("2", "Picanha Grelhada", "red meat", &["picanha", "sal grosso"]),
            dish("3", "Moqueca", "fish", &["peixe", "leite de coco"]),
        ]
    }

    #[test]
    fn test_name_substring_match() {
        let dishes = catalog();
        let found = resolve_dish(&dishes, "PICANHA").unwrap();
        assert_eq!(found.id, "2");
    }

    #[test]
    fn test_earlier_dish_wins() {
        let dishes = catalog();
        // "grelhad" matches dishes 1 and 2
        assert_eq!(resolve_dish(&dishes, "grelhad").unwrap().id, "1");
        // category "fish" matches dishes 1 and 3
        assert_eq!(resolve_dish(&dishes, "fish").unwrap().id, "1");
    }

    #[test]
    fn test_query_containing_field_matches() {
        let dishes = catalog();
        let found = resolve_dish(&dishes, "what goes with leite de coco tonight?").unwrap();
        assert_eq!(found.id, "3");
    }

    #[test]
    fn test_ingredient_match() {
        let dishes = catalog();
        assert_eq!(resolve_dish(&dishes, "coco").unwrap().id, "3");
    }

    #[test]
    fn test_no_match() {
        let dishes = catalog();
        assert!(resolve_dish(&dishes, "lasagna").is_none());
        assert!(resolve_dish(&dishes, "   ").is_none());
        assert!(resolve_dish(&[], "picanha").is_none());
    }

    #[test]
    fn test_blank_category_does_not_match_everything() {
        let dishes = vec![dish("1", "Tofu Bowl", "", &["tofu"])];
        assert!(resolve_dish(&dishes, "pizza").is_none());
    }
}
