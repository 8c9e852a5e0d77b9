//! Recommendation endpoint

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::models::Recommendation;
use crate::services::RecommendationOutcome;
use crate::AppState;

/// POST /api/recommendation request body
#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    /// Free-text dish description
    #[serde(alias = "mensagem")]
    pub message: String,
}

/// POST /api/recommendation response
///
/// `recommendation` is `null` when no dish matched or no wine scored.
#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub recommendation: Option<Recommendation>,
    pub message: String,
}

/// POST /api/recommendation
pub async fn recommend(
    State(state): State<AppState>,
    payload: Result<Json<RecommendationRequest>, JsonRejection>,
) -> ApiResult<Json<RecommendationResponse>> {
    let Json(request) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    let query = request.message.trim();
    if query.is_empty() {
        return Err(ApiError::BadRequest(
            "Field 'message' must be a non-empty string".to_string(),
        ));
    }

    info!(query, "Recommendation requested");
    let outcome = state.recommender.recommend(query).await;
    Ok(Json(response_for(outcome)))
}

fn response_for(outcome: RecommendationOutcome) -> RecommendationResponse {
    match outcome {
        RecommendationOutcome::Recommended(recommendation) => RecommendationResponse {
            message: recommended_message(&recommendation),
            recommendation: Some(recommendation),
        },
        RecommendationOutcome::DishNotFound { query, examples } => {
            let hint = if examples.is_empty() {
                "The dish catalog is currently empty.".to_string()
            } else {
                format!("Try a specific dish such as: {}.", examples.join(", "))
            };
            RecommendationResponse {
                recommendation: None,
                message: format!(
                    "Sorry, I couldn't find anything about \"{}\". {}",
                    query, hint
                ),
            }
        }
        RecommendationOutcome::NoCompatibleWine { dish } => RecommendationResponse {
            recommendation: None,
            message: format!("No compatible wine found for {}.", dish.name),
        },
    }
}

fn recommended_message(recommendation: &Recommendation) -> String {
    let wine = &recommendation.wine;
    let style = if wine.full_style.is_empty() {
        wine.style.to_string()
    } else {
        wine.full_style.clone()
    };

    format!(
        "**{}** ({}) for {}\n\n**Compatibility score:** {}\n\n**Why it works:**\n{}",
        wine.name, style, recommendation.dish.name, recommendation.score, recommendation.justification
    )
}

/// Build recommendation routes
pub fn recommendation_routes() -> Router<AppState> {
    Router::new().route("/api/recommendation", post(recommend))
}
