//! Input analyzer — infers task, context, format, tone and requirements from free text.
//!
//! Pure and deterministic: no I/O, no shared state. Every rule is a keyword lookup
//! or a single regex match, so the result is a best-effort guess, not a parse.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::prompting::vocabulary::{
    first_match, DEFAULT_WRITING_FORMAT, DOMAINS, FORMAT_TABLE, TONE_FALLBACKS, TONE_TABLE,
    WRITING_SIGNALS,
};

/// Tasks shorter than this (in characters) are replaced by the whole input
/// when no context was split off.
pub const SHORT_TASK_CHARS: usize = 50;

static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("valid sentence regex"));
static INCLUDE_CLAUSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)include[^.!?]*").expect("valid include regex"));
static OBLIGATION_CLAUSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:must|should)[^.!?]*").expect("valid obligation regex"));
static LENGTH_CLAUSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\d+\s*(?:word|character|page|paragraph)s?").expect("valid length regex")
});
static AUDIENCE_CLAUSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:for|target|audience|readers?|users?)\s+([^.!?\n]+)")
        .expect("valid audience regex")
});

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalyzeError {
    #[error("input cannot be empty")]
    EmptyInput,
}

/// Structured guess produced from a single free-text request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Analysis {
    pub task: String,
    pub context: String,
    pub has_context: bool,
    /// Detection order: include clause, must/should clause, length clause.
    pub requirements: Vec<String>,
    pub output_format: String,
    pub tone: String,
}

/// Analyzes free text into an `Analysis`.
///
/// Returns `AnalyzeError::EmptyInput` for empty or whitespace-only input; any other
/// string produces a result.
pub fn analyze(input: &str) -> Result<Analysis, AnalyzeError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AnalyzeError::EmptyInput);
    }
    let lower = trimmed.to_lowercase();

    let mut analysis = Analysis::default();
    split_task_and_context(trimmed, &mut analysis);

    analysis.output_format = classify_format(&lower).to_string();
    analysis.tone = classify_tone(&lower).to_string();
    analysis.requirements = extract_requirements(trimmed);

    add_audience_note(trimmed, &mut analysis);
    add_domain_note(&lower, &mut analysis);

    Ok(analysis)
}

fn split_task_and_context(trimmed: &str, analysis: &mut Analysis) {
    let sentences: Vec<&str> = SENTENCE_BOUNDARY
        .split(trimmed)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    analysis.task = sentences.first().copied().unwrap_or(trimmed).to_string();

    if sentences.len() > 1 {
        analysis.context = sentences[1..].join(". ");
        analysis.has_context = true;
    }

    if analysis.task.chars().count() < SHORT_TASK_CHARS && !analysis.has_context {
        analysis.task = trimmed.to_string();
    }
}

fn classify_format(lower: &str) -> &'static str {
    first_match(FORMAT_TABLE, lower).unwrap_or_else(|| {
        if WRITING_SIGNALS.iter().any(|s| lower.contains(s)) {
            DEFAULT_WRITING_FORMAT
        } else {
            ""
        }
    })
}

fn classify_tone(lower: &str) -> &'static str {
    first_match(TONE_TABLE, lower)
        .or_else(|| first_match(TONE_FALLBACKS, lower))
        .unwrap_or("")
}

fn extract_requirements(trimmed: &str) -> Vec<String> {
    let mut requirements = Vec::new();

    if let Some(m) = INCLUDE_CLAUSE.find(trimmed) {
        requirements.push(m.as_str().to_string());
    }
    if let Some(m) = OBLIGATION_CLAUSE.find(trimmed) {
        requirements.push(m.as_str().to_string());
    }
    if let Some(m) = LENGTH_CLAUSE.find(trimmed) {
        requirements.push(format!("Length: {}", m.as_str()));
    }

    requirements
}

fn add_audience_note(trimmed: &str, analysis: &mut Analysis) {
    let Some(phrase) = AUDIENCE_CLAUSE
        .captures(trimmed)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
    else {
        return;
    };

    if phrase.is_empty() || analysis.context.contains(phrase) {
        return;
    }

    let note = format!("Target audience: {phrase}");
    if analysis.context.is_empty() {
        analysis.context = note;
    } else {
        analysis.context = format!("{}\n{note}", analysis.context);
    }
    analysis.has_context = true;
}

/// Only fills an empty context: an audience note found earlier suppresses the domain note.
fn add_domain_note(lower: &str, analysis: &mut Analysis) {
    if !analysis.context.is_empty() {
        return;
    }

    let context_lower = analysis.context.to_lowercase();
    if let Some(domain) = DOMAINS
        .iter()
        .find(|d| lower.contains(*d) && !context_lower.contains(*d))
    {
        analysis.context = format!("Domain: {}", capitalize(domain));
        analysis.has_context = true;
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
