//! Gemini-style text generation client
//!
//! One `generateContent` POST per justification: no streaming, no retries,
//! no conversation state. The request carries a bounded output-length hint
//! and the whole exchange is bounded by the client timeout.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use sommelier_common::config::JustificationConfig;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use super::prompt::build_prompt;
use super::template::TemplateJustifier;
use super::JustificationProvider;
use crate::models::{Dish, Wine};

const USER_AGENT: &str = concat!("sommelier/", env!("CARGO_PKG_VERSION"));

/// Gemini client errors
#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timed out")]
    Timeout,

    #[error("API error {0}: {1}")]
    ApiError(u16, String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Response contained no text")]
    EmptyResponse,
}

impl From<reqwest::Error> for GeminiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            GeminiError::Timeout
        } else {
            GeminiError::NetworkError(e.to_string())
        }
    }
}

/// `generateContent` response, reduced to the fields we read
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ContentPart>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentPart {
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Trimmed text of the first part of the first candidate, if non-empty
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}

/// Sampling parameters sent with every request
#[derive(Debug, Clone, Copy)]
struct GenerationParams {
    temperature: f32,
    max_output_tokens: u32,
    top_p: f32,
    top_k: u32,
}

/// HTTP client for a Gemini-compatible endpoint
pub struct GeminiClient {
    http_client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
    params: GenerationParams,
}

impl GeminiClient {
    pub fn new(config: &JustificationConfig, api_key: String) -> Result<Self, GeminiError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GeminiError::NetworkError(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
            params: GenerationParams {
                temperature: config.temperature,
                max_output_tokens: config.max_output_tokens,
                top_p: config.top_p,
                top_k: config.top_k,
            },
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    /// Send one prompt and return the generated text, trimmed
    pub async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        let body = json!({
            "contents": [
                { "parts": [ { "text": prompt } ] }
            ],
            "generationConfig": {
                "temperature": self.params.temperature,
                "maxOutputTokens": self.params.max_output_tokens,
                "topP": self.params.top_p,
                "topK": self.params.top_k,
            }
        });

        debug!(model = %self.model, "Requesting justification");

        let response = self
            .http_client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(GeminiError::ApiError(status.as_u16(), error_text));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::ParseError(e.to_string()))?;

        parsed
            .first_text()
            .map(str::to_string)
            .ok_or(GeminiError::EmptyResponse)
    }
}

/// Model-generated justifications with the template as fallback
pub struct GeminiJustifier {
    client: GeminiClient,
}

impl GeminiJustifier {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl JustificationProvider for GeminiJustifier {
    async fn justify(&self, dish: &Dish, wine: &Wine) -> String {
        let prompt = build_prompt(dish, wine);
        match self.client.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!(
                    dish = %dish.name,
                    wine = %wine.name,
                    "Justification request failed, using template: {}",
                    e
                );
                TemplateJustifier::render(dish, wine)
            }
        }
    }
}
