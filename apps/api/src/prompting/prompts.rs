// LLM prompt constants for the prompting module.
// Templates use `{name}` markers that are replaced before sending.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::prompting::form::FormData;

static FORM_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{(type|goal|context|requirements|tone|avoid|output_format|examples)\}")
        .expect("valid form marker regex")
});

/// System prompt for writing a prompt from the structured form.
pub const PROMPT_ENGINEER_SYSTEM: &str = "You are an expert Prompt Engineer. \
    Your goal is to take a basic user request and transform it into a highly detailed, \
    professional prompt optimized for LLMs (like Claude, GPT-4). \
    The user wants 'original thinking', so do not just fill in a template. \
    Analyze the request, identify missing constraints, and generate a comprehensive prompt \
    that would yield the best possible result from an AI.";

/// User message for form-based generation.
/// Replace: {type}, {goal}, {context}, {requirements}, {tone}, {avoid}, {output_format}, {examples}
pub const FORM_REQUEST_TEMPLATE: &str = r#"I need a detailed prompt for the following task:

TYPE: {type}
GOAL: {goal}
CONTEXT: {context}
REQUIREMENTS: {requirements}
TONE: {tone}
AVOID: {avoid}
OUTPUT FORMAT: {output_format}
EXAMPLES: {examples}

Please generate a robust, structured prompt that I can copy and paste into an AI model."#;

pub const FORM_REQUEST_MAX_TOKENS: u32 = 2000;

/// System prompt for deep-analysis enhancement of an existing prompt.
pub const ENHANCE_SYSTEM: &str = r#"You are an expert AI assistant with deep analytical capabilities. Your role is to:

1. **Deeply Analyze the User's Intent**:
   - Understand what they're really trying to achieve, not just what they explicitly asked for
   - Identify underlying goals, motivations, and desired outcomes
   - Consider the context and use case behind the request

2. **Think Comprehensively**:
   - Explore angles the user might not have considered
   - Identify potential gaps, edge cases, or important factors they may have overlooked
   - Consider best practices, industry standards, and expert recommendations
   - Think about potential challenges, risks, or obstacles

3. **Provide Enhanced, Detailed Responses**:
   - Expand on the original prompt with rich detail and depth
   - Add valuable information, insights, and considerations the user may not have thought about
   - Structure the response clearly with sections, examples, and actionable guidance
   - Include relevant context, background information, and expert perspectives
   - Suggest improvements, alternatives, or complementary approaches

4. **Be Proactive and Insightful**:
   - Don't just answer what was asked - anticipate what they need to know
   - Add considerations like: timing, resources needed, potential pitfalls, success metrics
   - Include examples, templates, or frameworks that could be helpful
   - Think about the "why" behind recommendations, not just the "what"

Your responses should be comprehensive, well-reasoned, and add significant value beyond the original prompt."#;

/// Enhancement user message. Replace `{prompt}` before sending.
pub const ENHANCE_PROMPT_TEMPLATE: &str = r#"Analyze this prompt deeply and provide a comprehensive, enhanced response that:

1. Understands the true intent and goals behind this request
2. Adds valuable information, considerations, and insights the user may not have thought about
3. Provides detailed, actionable guidance with examples
4. Includes best practices, potential challenges, and expert recommendations
5. Goes beyond the surface level to deliver real depth and value

Original Prompt:
{prompt}

Now provide your enhanced, comprehensive response:"#;

pub const ENHANCE_TEMPERATURE: f32 = 0.8;
pub const ENHANCE_MAX_TOKENS: u32 = 3000;

/// Fills the form markers in one pass, so braces inside field values are left alone.
pub fn form_request(form: &FormData) -> String {
    FORM_MARKER
        .replace_all(FORM_REQUEST_TEMPLATE, |caps: &Captures| match &caps[1] {
            "type" => form.prompt_type.as_str(),
            "goal" => form.main_goal.as_str(),
            "context" => form.context.as_str(),
            "requirements" => form.requirements.as_str(),
            "tone" => form.tone.as_str(),
            "avoid" => form.avoid.as_str(),
            "output_format" => form.output_format.as_str(),
            _ => form.examples.as_str(),
        }
        .to_string())
        .into_owned()
}

pub fn enhance_request(prompt: &str) -> String {
    ENHANCE_PROMPT_TEMPLATE.replace("{prompt}", prompt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompting::form::PromptType;

    #[test]
    fn test_form_request_fills_every_marker() {
        let form = FormData {
            prompt_type: PromptType::Learning,
            main_goal: "Teach me Rust lifetimes".to_string(),
            tone: "casual".to_string(),
            ..Default::default()
        };
        let msg = form_request(&form);
        assert!(msg.contains("TYPE: learning\n"));
        assert!(msg.contains("GOAL: Teach me Rust lifetimes\n"));
        assert!(msg.contains("TONE: casual\n"));
        assert!(!msg.contains('{'), "unreplaced marker in: {msg}");
    }

    #[test]
    fn test_form_request_keeps_markers_inside_values() {
        let form = FormData {
            main_goal: "Explain the {tone} placeholder syntax".to_string(),
            context: "Uses {goal} and $1 literally".to_string(),
            tone: "casual".to_string(),
            ..Default::default()
        };
        let msg = form_request(&form);
        assert!(msg.contains("GOAL: Explain the {tone} placeholder syntax\n"));
        assert!(msg.contains("CONTEXT: Uses {goal} and $1 literally\n"));
        assert!(msg.contains("TONE: casual\n"));
    }

    #[test]
    fn test_enhance_request_embeds_prompt() {
        let msg = enhance_request("TASK:\nPlan a garden");
        assert!(msg.contains("Original Prompt:\nTASK:\nPlan a garden\n\nNow provide"));
    }
}
