//! LLM Client — text completion providers used by the optional enhancement paths.
//!
//! ARCHITECTURAL RULE: the deterministic prompting core never calls into this module.
//! Only handlers do, and every handler that does keeps a template-only path available.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::config::Config;

pub mod anthropic;
pub mod openai;

pub use anthropic::AnthropicClient;
pub use openai::OpenAiClient;

const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Per-call overrides. Unset fields fall back to the provider's defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionOptions {
    pub model: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

/// A service that turns a system prompt plus a user prompt into text.
///
/// Carried in `AppState` as `Option<Arc<dyn TextCompletionService>>`.
#[async_trait]
pub trait TextCompletionService: Send + Sync {
    /// Provider name for logging and status responses.
    fn name(&self) -> &'static str;

    async fn complete(
        &self,
        system: &str,
        user: &str,
        options: &CompletionOptions,
    ) -> Result<String, LlmError>;

    /// Cheap reachability probe; `false` on any failure.
    async fn test_connection(&self) -> bool;
}

fn http_client() -> Result<reqwest::Client, LlmError> {
    Ok(reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()?)
}

/// Picks the completion provider from configured keys: OpenAI first, then Anthropic.
pub fn select_provider(
    config: &Config,
    anthropic_client: Option<&AnthropicClient>,
) -> Result<Option<Arc<dyn TextCompletionService>>, LlmError> {
    if let Some(key) = &config.openai_api_key {
        info!("Completion provider: OpenAI (model: {})", openai::DEFAULT_MODEL);
        let provider: Arc<dyn TextCompletionService> = Arc::new(OpenAiClient::new(key.clone())?);
        return Ok(Some(provider));
    }
    if let Some(client) = anthropic_client {
        info!(
            "Completion provider: Anthropic (model: {})",
            anthropic::DEFAULT_MODEL
        );
        let provider: Arc<dyn TextCompletionService> = Arc::new(client.clone());
        return Ok(Some(provider));
    }
    info!("No completion provider configured, template mode only");
    Ok(None)
}
