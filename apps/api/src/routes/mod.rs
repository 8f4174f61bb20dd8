pub mod health;
pub mod proxy;

use axum::{
    routing::{get, post},
    Router,
};

use crate::prompting::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Prompting API
        .route("/api/v1/prompts/analyze", post(handlers::handle_analyze))
        .route("/api/v1/prompts/build", post(handlers::handle_build))
        .route("/api/v1/prompts/assemble", post(handlers::handle_assemble))
        .route("/api/v1/prompts/form", post(handlers::handle_form))
        .route("/api/v1/prompts/generate", post(handlers::handle_generate))
        .route("/api/v1/prompts/enhance", post(handlers::handle_enhance))
        .route("/api/v1/prompts/types", get(handlers::handle_prompt_types))
        // Saved-template variables
        .route(
            "/api/v1/templates/variables",
            post(handlers::handle_extract_variables),
        )
        .route(
            "/api/v1/templates/render",
            post(handlers::handle_render_template),
        )
        .route(
            "/api/v1/completion/status",
            get(handlers::handle_completion_status),
        )
        // Raw Anthropic pass-through for browser clients without a key
        .route("/api/generate", post(proxy::handle_proxy))
        .with_state(state)
}
