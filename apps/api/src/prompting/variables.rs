//! `{{name}}` template variables in saved prompt content.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{NoExpand, Regex};
use serde::{Deserialize, Serialize};

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*(\w+)\s*\}\}").expect("valid placeholder regex"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptVariable {
    pub name: String,
    pub placeholder: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(default)]
    pub required: bool,
}

/// Lists distinct placeholders in first-occurrence order.
pub fn extract_variables(content: &str) -> Vec<PromptVariable> {
    let mut variables: Vec<PromptVariable> = Vec::new();

    for caps in PLACEHOLDER.captures_iter(content) {
        let name = &caps[1];
        if variables.iter().any(|v| v.name == name) {
            continue;
        }
        variables.push(PromptVariable {
            name: name.to_string(),
            placeholder: format!("Enter {name}"),
            default_value: None,
            required: false,
        });
    }

    variables
}

/// Substitutes each declared variable with its value, falling back to the default,
/// then to an empty string. Placeholders with no declared variable are left as-is.
pub fn replace_variables(
    content: &str,
    variables: &[PromptVariable],
    values: &HashMap<String, String>,
) -> String {
    let mut result = content.to_string();

    for variable in variables {
        let value = values
            .get(&variable.name)
            .filter(|v| !v.is_empty())
            .or(variable.default_value.as_ref())
            .map(String::as_str)
            .unwrap_or("");

        let pattern = format!(r"\{{\{{\s*{}\s*\}}\}}", regex::escape(&variable.name));
        let Ok(re) = Regex::new(&pattern) else {
            continue;
        };
        result = re.replace_all(&result, NoExpand(value)).into_owned();
    }

    result
}
