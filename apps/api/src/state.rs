use std::sync::Arc;

use crate::config::Config;
use crate::errors::AppError;
use crate::llm_client::{AnthropicClient, TextCompletionService};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Completion provider for the generate/enhance paths. `None` means template mode only.
    pub completion: Option<Arc<dyn TextCompletionService>>,
    /// Raw Anthropic client backing the `/api/generate` proxy. Present iff the key is set.
    pub anthropic: Option<AnthropicClient>,
}

impl AppState {
    /// Rejects any field longer than the configured limit.
    pub fn check_length(&self, field: &str, value: &str) -> Result<(), AppError> {
        let limit = self.config.max_input_chars;
        if value.chars().count() > limit {
            return Err(AppError::PayloadTooLarge(format!(
                "{field} exceeds {limit} characters"
            )));
        }
        Ok(())
    }
}
