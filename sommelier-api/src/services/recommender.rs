//! Recommendation assembly
//!
//! Resolves the query to a dish, picks the top-ranked wine and asks the
//! justification provider to explain the pairing.

use std::sync::Arc;
use tracing::{debug, info};

use super::compatibility_scorer::best_wine;
use super::dish_resolver::resolve_dish;
use super::justification::JustificationProvider;
use crate::catalog::CatalogCache;
use crate::models::{Dish, Recommendation};

/// Number of dish names suggested when a query matches nothing
pub const EXAMPLE_DISH_COUNT: usize = 3;

/// Result of one recommendation request
#[derive(Debug, Clone, PartialEq)]
pub enum RecommendationOutcome {
    Recommended(Recommendation),
    /// No dish matched; `examples` are the first catalog dish names
    DishNotFound { query: String, examples: Vec<String> },
    /// The dish resolved but every wine scored zero
    NoCompatibleWine { dish: Dish },
}

pub struct Recommender {
    catalog: Arc<CatalogCache>,
    justifier: Arc<dyn JustificationProvider>,
}

impl Recommender {
    pub fn new(catalog: Arc<CatalogCache>, justifier: Arc<dyn JustificationProvider>) -> Self {
        Self { catalog, justifier }
    }

    pub async fn recommend(&self, query: &str) -> RecommendationOutcome {
        let catalog = self.catalog.load_if_absent().await;

        let Some(dish) = resolve_dish(&catalog.dishes, query) else {
            debug!(query, "No dish matched");
            return RecommendationOutcome::DishNotFound {
                query: query.trim().to_string(),
                examples: catalog
                    .dishes
                    .iter()
                    .take(EXAMPLE_DISH_COUNT)
                    .map(|d| d.name.clone())
                    .collect(),
            };
        };
        debug!(query, dish = %dish.name, "Dish resolved");

        let Some(best) = best_wine(dish, &catalog.wines) else {
            info!(dish = %dish.name, "No compatible wine");
            return RecommendationOutcome::NoCompatibleWine { dish: dish.clone() };
        };

        let justification = self.justifier.justify(dish, best.wine).await;
        info!(
            dish = %dish.name,
            wine = %best.wine.name,
            score = best.score,
            "Recommendation ready"
        );

        RecommendationOutcome::Recommended(Recommendation {
            dish: dish.clone(),
            wine: best.wine.clone(),
            justification,
            score: best.score,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogSources;
    use crate::services::justification::TemplateJustifier;
    use crate::models::WineStyle;
    use tempfile::TempDir;

    fn recommender(dir: &TempDir, dishes: &str, wines: &str) -> Recommender {
        let dishes_path = dir.path().join("dishes.csv");
        let wines_path = dir.path().join("wines.csv");
        std::fs::write(&dishes_path, dishes).unwrap();
        std::fs::write(&wines_path, wines).unwrap();
        let cache = Arc::new(CatalogCache::new(CatalogSources::new(dishes_path, wines_path)));
        Recommender::new(cache, Arc::new(TemplateJustifier))
    }

    const DISHES: &str = "id,name,ingredients,category,seasonings,acidity,intensity\n\
                          1,Picanha Grelhada,\"picanha, sal grosso\",red meat,salgado,baixa,alta\n\
                          2,Sushi,\"arroz, peixe cru\",fish,,alta,baixa\n\
                          3,Brigadeiro,\"chocolate, leite\",dessert,,,baixa\n\
                          4,Pudim,\"leite, ovos\",dessert,,,baixa\n";

    #[tokio::test]
    async fn test_recommends_red_for_picanha() {
        let dir = TempDir::new().unwrap();
        let r = recommender(&dir, DISHES, "name,style\nPinot Grigio,branco seco\nMalbec,tinto seco\n");

        match r.recommend("picanha").await {
            RecommendationOutcome::Recommended(rec) => {
                assert_eq!(rec.dish.name, "Picanha Grelhada");
                assert_eq!(rec.wine.name, "Malbec");
                assert_eq!(rec.wine.style, WineStyle::Red);
                assert_eq!(rec.score, 8);
                assert!(rec.justification.contains("Malbec"));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unmatched_query_lists_examples() {
        let dir = TempDir::new().unwrap();
        let r = recommender(&dir, DISHES, "name,style\nMalbec,tinto seco\n");

        assert_eq!(
            r.recommend("  lasagna ").await,
            RecommendationOutcome::DishNotFound {
                query: "lasagna".to_string(),
                examples: vec![
                    "Picanha Grelhada".to_string(),
                    "Sushi".to_string(),
                    "Brigadeiro".to_string()
                ],
            }
        );
    }

    #[tokio::test]
    async fn test_resolved_dish_without_scoring_wine() {
        let dir = TempDir::new().unwrap();
        let r = recommender(&dir, DISHES, "name,style\nMalbec,tinto seco\n");

        match r.recommend("brigadeiro").await {
            RecommendationOutcome::NoCompatibleWine { dish } => assert_eq!(dish.id, "3"),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }
}
