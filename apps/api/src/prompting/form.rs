//! Structured-form prompt rendering.
//!
//! Takes the 8-field form directly (no analysis step) and renders ROLE, TASK, CONTEXT,
//! REQUIREMENTS & CONSTRAINTS, REFERENCE EXAMPLES, OUTPUT FORMAT, GUIDELINES and
//! INSTRUCTIONS sections keyed off the prompt type.

use serde::{Deserialize, Serialize};

/// Closed set of form prompt types. Unknown values deserialize to `General`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum PromptType {
    #[default]
    General,
    Creative,
    Code,
    Analysis,
    Brainstorm,
    Learning,
    Editing,
}

impl From<String> for PromptType {
    fn from(value: String) -> Self {
        PromptType::parse(&value)
    }
}

impl PromptType {
    pub const ALL: [PromptType; 7] = [
        PromptType::General,
        PromptType::Creative,
        PromptType::Code,
        PromptType::Analysis,
        PromptType::Brainstorm,
        PromptType::Learning,
        PromptType::Editing,
    ];

    /// Case-insensitive lookup; anything unrecognised is `General`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "creative" => PromptType::Creative,
            "code" => PromptType::Code,
            "analysis" => PromptType::Analysis,
            "brainstorm" => PromptType::Brainstorm,
            "learning" => PromptType::Learning,
            "editing" => PromptType::Editing,
            _ => PromptType::General,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PromptType::General => "general",
            PromptType::Creative => "creative",
            PromptType::Code => "code",
            PromptType::Analysis => "analysis",
            PromptType::Brainstorm => "brainstorm",
            PromptType::Learning => "learning",
            PromptType::Editing => "editing",
        }
    }

    /// Persona sentence for the ROLE section.
    pub fn role(self) -> &'static str {
        match self {
            PromptType::General => "You are an expert AI assistant capable of handling a wide range of tasks with precision and clarity.",
            PromptType::Creative => "You are a visionary creative writer and storyteller, known for crafting engaging narratives and original content.",
            PromptType::Code => "You are a Senior Software Engineer with deep expertise in clean code, architecture, and performance optimization.",
            PromptType::Analysis => "You are a Lead Data Analyst and Strategist, skilled in breaking down complex information into actionable insights.",
            PromptType::Brainstorm => "You are an Innovation Consultant and Ideation Expert, specialized in generating diverse and novel solutions.",
            PromptType::Learning => "You are an Expert Educator and Tutor, able to explain complex concepts in simple, digestible terms.",
            PromptType::Editing => "You are a Senior Editor and Proofreader with an eagle eye for detail, grammar, and style flow.",
        }
    }

    /// Opening line of the TASK section.
    pub fn instruction(self) -> &'static str {
        match self {
            PromptType::General => "Your task is to provide a comprehensive answer to the following request.",
            PromptType::Creative => "Your task is to write creative content that meets the following criteria.",
            PromptType::Code => "Your task is to write, refactor, or explain code as requested, following industry best practices.",
            PromptType::Analysis => "Your task is to analyze the provided topic or data and deliver a structured assessment.",
            PromptType::Brainstorm => "Your task is to generate a wide variety of ideas and options for the specific challenge.",
            PromptType::Learning => "Your task is to teach and explain the subject matter effectively to the learner.",
            PromptType::Editing => "Your task is to review, edit, and improve the provided text.",
        }
    }

    /// Body of the GUIDELINES section.
    pub fn guidance(self) -> &'static str {
        match self {
            PromptType::General => "- Ensure accuracy and relevance.\n- Organize information logically.\n- Address all parts of the user's query.",
            PromptType::Creative => "- Use vivid imagery and sensory details.\n- Focus on 'show, don't tell'.\n- Ensure a consistent voice and perspective.",
            PromptType::Code => "- Write clean, modular, and well-documented code.\n- Handle edge cases and errors gracefully.\n- Explain the logic behind your solution.\n- Suggest optimizations where possible.",
            PromptType::Analysis => "- Support claims with reasoning or evidence.\n- Consider multiple perspectives or counter-arguments.\n- Distinguish between fact and opinion.",
            PromptType::Brainstorm => "- Prioritize quantity and diversity of ideas first.\n- Encourage out-of-the-box thinking.\n- Briefly explain the 'why' behind each idea.",
            PromptType::Learning => "- Use analogies and examples to clarify abstract concepts.\n- Check for understanding (rhetorically).\n- Structure the explanation from simple to complex.",
            PromptType::Editing => "- Maintain the author's original voice where possible.\n- Explain significant changes.\n- Focus on clarity, flow, and grammar.",
        }
    }

    /// Example (goal, context) pair shown as form placeholders.
    pub fn placeholders(self) -> (&'static str, &'static str) {
        match self {
            PromptType::General => (
                "e.g., Explain the concept of machine learning",
                "e.g., I'm a beginner with basic programming knowledge",
            ),
            PromptType::Creative => (
                "e.g., Write a short story about a time traveler",
                "e.g., Target audience: young adults, Genre: sci-fi adventure",
            ),
            PromptType::Code => (
                "e.g., Create a function to validate email addresses",
                "e.g., Using JavaScript, needs to handle edge cases",
            ),
            PromptType::Analysis => (
                "e.g., Analyze the pros and cons of remote work",
                "e.g., Focus on productivity and work-life balance",
            ),
            PromptType::Brainstorm => (
                "e.g., Generate ideas for a mobile app",
                "e.g., Target market: college students, Budget: limited",
            ),
            PromptType::Learning => (
                "e.g., Teach me about blockchain technology",
                "e.g., I understand basic programming but not cryptocurrency",
            ),
            PromptType::Editing => (
                "e.g., Improve this paragraph for clarity and impact",
                "e.g., Academic essay, needs to be more concise",
            ),
        }
    }
}

/// Form-select tone keys and their descriptions. Unknown keys render verbatim.
const FORM_TONES: &[(&str, &str)] = &[
    ("professional", "Professional, objective, and business-appropriate"),
    ("casual", "Casual, friendly, and conversational"),
    ("technical", "Technical, precise, and using industry-standard terminology"),
    ("creative", "Creative, expressive, and engaging"),
    ("formal", "Formal, academic, and structured"),
    ("concise", "Concise, direct, and to-the-point"),
];

pub fn tone_description(key: &str) -> &str {
    FORM_TONES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, description)| *description)
        .unwrap_or(key)
}

pub const FINAL_INSTRUCTIONS: &str = "1. Take a deep breath and analyze the request step-by-step.\n\
    2. Identify any missing information or ambiguities (make reasonable assumptions if necessary, but state them).\n\
    3. Draft the response according to the specified format and constraints.\n\
    4. Review your response to ensure it directly answers the core goal.";

/// One submission of the structured form. Every field is always present;
/// empty strings mean "not provided".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormData {
    pub prompt_type: PromptType,
    pub main_goal: String,
    pub context: String,
    pub requirements: String,
    pub output_format: String,
    pub tone: String,
    pub examples: String,
    pub avoid: String,
}

impl FormData {
    /// Trims every free-text field, mirroring how the form reads its inputs.
    pub fn trimmed(&self) -> Self {
        Self {
            prompt_type: self.prompt_type,
            main_goal: self.main_goal.trim().to_string(),
            context: self.context.trim().to_string(),
            requirements: self.requirements.trim().to_string(),
            output_format: self.output_format.trim().to_string(),
            tone: self.tone.trim().to_string(),
            examples: self.examples.trim().to_string(),
            avoid: self.avoid.trim().to_string(),
        }
    }

    pub(crate) fn text_fields(&self) -> [&str; 7] {
        [
            self.main_goal.as_str(),
            self.context.as_str(),
            self.requirements.as_str(),
            self.output_format.as_str(),
            self.tone.as_str(),
            self.examples.as_str(),
            self.avoid.as_str(),
        ]
    }
}

/// Renders the form in template mode. Total; callers validate `main_goal`.
pub fn assemble_from_form(form: &FormData) -> String {
    let kind = form.prompt_type;
    let mut prompt = String::new();

    prompt.push_str(&format!("### ROLE\n{}\n\n", kind.role()));

    prompt.push_str(&format!("### TASK\n{}\n", kind.instruction()));
    prompt.push_str(&format!("Specific Goal: {}\n\n", form.main_goal));

    if !form.context.is_empty() {
        prompt.push_str(&format!("### CONTEXT\n{}\n\n", form.context));
    }

    if !form.requirements.is_empty() || !form.avoid.is_empty() || !form.tone.is_empty() {
        prompt.push_str("### REQUIREMENTS & CONSTRAINTS\n");
        if !form.requirements.is_empty() {
            prompt.push_str(&format!("- Must adhere to: {}\n", form.requirements));
        }
        if !form.tone.is_empty() {
            prompt.push_str(&format!("- Tone/Style: {}\n", tone_description(&form.tone)));
        }
        if !form.avoid.is_empty() {
            prompt.push_str(&format!("- Strictly Avoid: {}\n", form.avoid));
        }
        prompt.push('\n');
    }

    if !form.examples.is_empty() {
        prompt.push_str(&format!(
            "### REFERENCE EXAMPLES\nUse these examples as a guide for the expected output style/format:\n{}\n\n",
            form.examples
        ));
    }

    if !form.output_format.is_empty() {
        prompt.push_str(&format!("### OUTPUT FORMAT\n{}\n\n", form.output_format));
    }

    prompt.push_str(&format!("### GUIDELINES\n{}\n\n", kind.guidance()));

    prompt.push_str("### INSTRUCTIONS\n");
    prompt.push_str(FINAL_INSTRUCTIONS);

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Returns the body of a `### NAME` section, without the trailing blank line.
    fn section<'a>(prompt: &'a str, name: &str) -> Option<&'a str> {
        let header = format!("### {name}\n");
        let start = prompt.find(&header)? + header.len();
        let rest = &prompt[start..];
        let end = rest.find("\n\n### ").unwrap_or(rest.len());
        Some(&rest[..end])
    }

    fn code_form() -> FormData {
        FormData {
            prompt_type: PromptType::Code,
            main_goal: "Write a binary search function".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_code_form_role_and_guidelines_verbatim() {
        let out = assemble_from_form(&code_form());
        assert_eq!(
            section(&out, "ROLE"),
            Some("You are a Senior Software Engineer with deep expertise in clean code, architecture, and performance optimization.")
        );
        assert_eq!(section(&out, "GUIDELINES"), Some(PromptType::Code.guidance()));
    }

    #[test]
    fn test_minimal_form_omits_optional_sections() {
        let out = assemble_from_form(&code_form());
        assert!(out.contains("Specific Goal: Write a binary search function\n\n"));
        for absent in ["CONTEXT", "REQUIREMENTS & CONSTRAINTS", "REFERENCE EXAMPLES", "OUTPUT FORMAT"] {
            assert!(section(&out, absent).is_none(), "{absent} should be omitted");
        }
        assert!(out.ends_with("4. Review your response to ensure it directly answers the core goal."));
    }

    #[test]
    fn test_full_form_section_order() {
        let form = FormData {
            prompt_type: PromptType::Editing,
            main_goal: "Tighten my cover letter".to_string(),
            context: "Applying for a design role".to_string(),
            requirements: "Keep under one page".to_string(),
            output_format: "Revised text then a change list".to_string(),
            tone: "professional".to_string(),
            examples: "Before: ... After: ...".to_string(),
            avoid: "Cliches".to_string(),
        };
        let out = assemble_from_form(&form);

        let order = [
            "### ROLE",
            "### TASK",
            "### CONTEXT",
            "### REQUIREMENTS & CONSTRAINTS",
            "### REFERENCE EXAMPLES",
            "### OUTPUT FORMAT",
            "### GUIDELINES",
            "### INSTRUCTIONS",
        ];
        let positions: Vec<usize> = order.iter().map(|h| out.find(h).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        assert_eq!(
            section(&out, "REQUIREMENTS & CONSTRAINTS"),
            Some("- Must adhere to: Keep under one page\n- Tone/Style: Professional, objective, and business-appropriate\n- Strictly Avoid: Cliches")
        );
    }

    #[test]
    fn test_unknown_tone_key_rendered_verbatim() {
        assert_eq!(tone_description("whimsical"), "whimsical");
        assert_eq!(tone_description("concise"), "Concise, direct, and to-the-point");
    }

    #[test]
    fn test_unknown_prompt_type_defaults_to_general() {
        let form: FormData =
            serde_json::from_str(r#"{"prompt_type": "poetry", "main_goal": "x"}"#).unwrap();
        assert_eq!(form.prompt_type, PromptType::General);
        let out = assemble_from_form(&form);
        assert_eq!(section(&out, "ROLE"), Some(PromptType::General.role()));
    }

    #[test]
    fn test_prompt_type_serde_lowercase() {
        let t: PromptType = serde_json::from_str(r#""Brainstorm""#).unwrap();
        assert_eq!(t, PromptType::Brainstorm);
        assert_eq!(serde_json::to_string(&PromptType::Learning).unwrap(), r#""learning""#);
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let form: FormData = serde_json::from_str(r#"{"main_goal": "Plan a trip"}"#).unwrap();
        assert_eq!(form.prompt_type, PromptType::General);
        assert!(form.context.is_empty() && form.avoid.is_empty());
    }

    #[test]
    fn test_trimmed_strips_whitespace() {
        let form = FormData {
            main_goal: "  goal \n".to_string(),
            tone: " casual ".to_string(),
            ..Default::default()
        };
        let t = form.trimmed();
        assert_eq!(t.main_goal, "goal");
        assert_eq!(t.tone, "casual");
    }

    #[test]
    fn test_every_type_round_trips_through_parse() {
        for kind in PromptType::ALL {
            assert_eq!(PromptType::parse(kind.as_str()), kind);
            assert!(!kind.role().is_empty() && !kind.guidance().is_empty());
        }
    }
}
