//! Axum route handlers for the Prompting API.

use std::collections::HashMap;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::CompletionOptions;
use crate::prompting::analyzer::{analyze, Analysis};
use crate::prompting::assembler::assemble;
use crate::prompting::form::{assemble_from_form, FormData, PromptType};
use crate::prompting::prompts::{
    enhance_request, form_request, ENHANCE_MAX_TOKENS, ENHANCE_SYSTEM, ENHANCE_TEMPERATURE,
    FORM_REQUEST_MAX_TOKENS, PROMPT_ENGINEER_SYSTEM,
};
use crate::prompting::variables::{extract_variables, replace_variables, PromptVariable};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub input: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub analysis: Analysis,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BuildResponse {
    pub analysis: Analysis,
    pub prompt: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PromptResponse {
    pub prompt: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationMode {
    Llm,
    Template,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub prompt: String,
    pub mode: GenerationMode,
}

#[derive(Debug, Deserialize)]
pub struct EnhanceRequest {
    pub prompt: String,
    #[serde(default)]
    pub options: CompletionOptions,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EnhanceResponse {
    pub content: String,
    pub provider: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PromptTypeInfo {
    pub prompt_type: PromptType,
    pub role: String,
    pub guidance: String,
    pub goal_placeholder: String,
    pub context_placeholder: String,
}

#[derive(Debug, Deserialize)]
pub struct TemplateContentRequest {
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VariablesResponse {
    pub variables: Vec<PromptVariable>,
}

#[derive(Debug, Deserialize)]
pub struct RenderTemplateRequest {
    pub content: String,
    /// Declared variables; extracted from `content` when omitted.
    #[serde(default)]
    pub variables: Option<Vec<PromptVariable>>,
    #[serde(default)]
    pub values: HashMap<String, String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RenderTemplateResponse {
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CompletionStatusResponse {
    pub configured: bool,
    pub provider: Option<String>,
    pub reachable: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/prompts/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    state.check_length("input", &request.input)?;
    let analysis = analyze(&request.input)?;
    Ok(Json(AnalyzeResponse { analysis }))
}

/// POST /api/v1/prompts/build
///
/// Free text in, finished prompt out: analyze then assemble.
pub async fn handle_build(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<BuildResponse>, AppError> {
    state.check_length("input", &request.input)?;
    let analysis = analyze(&request.input)?;
    let prompt = assemble(&analysis);
    Ok(Json(BuildResponse { analysis, prompt }))
}

/// POST /api/v1/prompts/assemble
///
/// Renders a caller-edited analysis. Only `task` is required.
pub async fn handle_assemble(
    State(state): State<AppState>,
    Json(analysis): Json<Analysis>,
) -> Result<Json<PromptResponse>, AppError> {
    if analysis.task.trim().is_empty() {
        return Err(AppError::Validation("task cannot be empty".to_string()));
    }
    state.check_length("task", &analysis.task)?;
    state.check_length("context", &analysis.context)?;
    state.check_length("output_format", &analysis.output_format)?;
    state.check_length("tone", &analysis.tone)?;
    for requirement in &analysis.requirements {
        state.check_length("requirement", requirement)?;
    }
    Ok(Json(PromptResponse {
        prompt: assemble(&analysis),
    }))
}

/// POST /api/v1/prompts/form
///
/// Template mode only; never touches a completion provider.
pub async fn handle_form(
    State(state): State<AppState>,
    Json(form): Json<FormData>,
) -> Result<Json<PromptResponse>, AppError> {
    let form = validated_form(&state, &form)?;
    Ok(Json(PromptResponse {
        prompt: assemble_from_form(&form),
    }))
}

/// POST /api/v1/prompts/generate
///
/// Asks the completion provider to write the prompt. Falls back to the template
/// when no provider is configured or the call fails.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(form): Json<FormData>,
) -> Result<Json<GenerateResponse>, AppError> {
    let form = validated_form(&state, &form)?;

    if let Some(provider) = &state.completion {
        let options = CompletionOptions {
            max_tokens: Some(FORM_REQUEST_MAX_TOKENS),
            ..Default::default()
        };
        match provider
            .complete(PROMPT_ENGINEER_SYSTEM, &form_request(&form), &options)
            .await
        {
            Ok(prompt) => {
                info!("Prompt generated via {}", provider.name());
                return Ok(Json(GenerateResponse {
                    prompt,
                    mode: GenerationMode::Llm,
                }));
            }
            Err(e) => {
                warn!(
                    "{} generation failed, falling back to template: {e}",
                    provider.name()
                );
            }
        }
    }

    Ok(Json(GenerateResponse {
        prompt: assemble_from_form(&form),
        mode: GenerationMode::Template,
    }))
}

/// POST /api/v1/prompts/enhance
pub async fn handle_enhance(
    State(state): State<AppState>,
    Json(request): Json<EnhanceRequest>,
) -> Result<Json<EnhanceResponse>, AppError> {
    if request.prompt.trim().is_empty() {
        return Err(AppError::Validation("prompt cannot be empty".to_string()));
    }
    state.check_length("prompt", &request.prompt)?;

    let provider = state
        .completion
        .as_ref()
        .ok_or_else(|| AppError::NotConfigured("No AI provider configured".to_string()))?;

    let options = CompletionOptions {
        model: request.options.model,
        max_tokens: request.options.max_tokens.or(Some(ENHANCE_MAX_TOKENS)),
        temperature: request.options.temperature.or(Some(ENHANCE_TEMPERATURE)),
    };

    let content = provider
        .complete(ENHANCE_SYSTEM, &enhance_request(&request.prompt), &options)
        .await?;

    Ok(Json(EnhanceResponse {
        content,
        provider: provider.name().to_string(),
    }))
}

/// GET /api/v1/prompts/types
pub async fn handle_prompt_types() -> Json<Vec<PromptTypeInfo>> {
    let types = PromptType::ALL
        .into_iter()
        .map(|kind| {
            let (goal, context) = kind.placeholders();
            PromptTypeInfo {
                prompt_type: kind,
                role: kind.role().to_string(),
                guidance: kind.guidance().to_string(),
                goal_placeholder: goal.to_string(),
                context_placeholder: context.to_string(),
            }
        })
        .collect();
    Json(types)
}

/// POST /api/v1/templates/variables
pub async fn handle_extract_variables(
    State(state): State<AppState>,
    Json(request): Json<TemplateContentRequest>,
) -> Result<Json<VariablesResponse>, AppError> {
    state.check_length("content", &request.content)?;
    Ok(Json(VariablesResponse {
        variables: extract_variables(&request.content),
    }))
}

/// POST /api/v1/templates/render
pub async fn handle_render_template(
    State(state): State<AppState>,
    Json(request): Json<RenderTemplateRequest>,
) -> Result<Json<RenderTemplateResponse>, AppError> {
    state.check_length("content", &request.content)?;
    for value in request.values.values() {
        state.check_length("value", value)?;
    }
    let variables = request
        .variables
        .unwrap_or_else(|| extract_variables(&request.content));
    Ok(Json(RenderTemplateResponse {
        content: replace_variables(&request.content, &variables, &request.values),
    }))
}

/// GET /api/v1/completion/status
pub async fn handle_completion_status(
    State(state): State<AppState>,
) -> Json<CompletionStatusResponse> {
    match &state.completion {
        Some(provider) => Json(CompletionStatusResponse {
            configured: true,
            provider: Some(provider.name().to_string()),
            reachable: provider.test_connection().await,
        }),
        None => Json(CompletionStatusResponse {
            configured: false,
            provider: None,
            reachable: false,
        }),
    }
}

fn validated_form(state: &AppState, form: &FormData) -> Result<FormData, AppError> {
    let form = form.trimmed();
    if form.main_goal.is_empty() {
        return Err(AppError::Validation("main_goal cannot be empty".to_string()));
    }
    for value in form.text_fields() {
        state.check_length("form field", value)?;
    }
    Ok(form)
}
