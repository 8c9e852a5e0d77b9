//! Pairing justifications
//!
//! Callers hold an `Arc<dyn JustificationProvider>` and never learn whether
//! the text came from the network or from the template. The network-backed
//! provider falls back to the template on any failure, so `justify` always
//! returns usable text.

pub mod gemini_client;
pub mod prompt;
pub mod template;

use async_trait::async_trait;
use sommelier_common::config::JustificationConfig;
use std::sync::Arc;
use tracing::{info, warn};

use crate::models::{Dish, Wine};

pub use gemini_client::{GeminiClient, GeminiError, GeminiJustifier};
pub use template::TemplateJustifier;

/// Explains why a wine suits a dish
#[async_trait]
pub trait JustificationProvider: Send + Sync {
    async fn justify(&self, dish: &Dish, wine: &Wine) -> String;
}

/// Select a provider from configuration
///
/// A configured API key selects the Gemini provider; otherwise, or if the
/// HTTP client cannot be built, the template provider is used.
pub fn build_justifier(config: &JustificationConfig) -> Arc<dyn JustificationProvider> {
    let Some(api_key) = config.api_key() else {
        info!("No justification API key configured, using template justifications");
        return Arc::new(TemplateJustifier);
    };

    match GeminiClient::new(config, api_key.to_string()) {
        Ok(client) => {
            info!(model = %config.model, "Using Gemini justifications");
            Arc::new(GeminiJustifier::new(client))
        }
        Err(e) => {
            warn!("Gemini client unavailable, using template justifications: {}", e);
            Arc::new(TemplateJustifier)
        }
    }
}
