use anyhow::{Context, Result};

const DEFAULT_PORT: &str = "3000";
const DEFAULT_MAX_INPUT_CHARS: usize = 10_000;

/// Application configuration loaded from environment variables.
/// Nothing is required: without provider keys the service runs in template mode.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub anthropic_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    /// Upper bound, in characters, for any single text field in a request.
    pub max_input_chars: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            openai_api_key: optional_env("OPENAI_API_KEY"),
            max_input_chars: match std::env::var("MAX_INPUT_CHARS") {
                Ok(v) => v
                    .parse::<usize>()
                    .context("MAX_INPUT_CHARS must be a positive integer")?,
                Err(_) => DEFAULT_MAX_INPUT_CHARS,
            },
        })
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Config {
            port: 0,
            rust_log: "debug".to_string(),
            anthropic_api_key: None,
            openai_api_key: None,
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
        }
    }
}

/// Blank values count as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
