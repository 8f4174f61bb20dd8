//! Fixed keyword vocabularies for free-text classification.
//!
//! Every table is an ordered slice of `(label, keywords)` pairs. Lookups walk the
//! slice front to back and the first entry with a matching keyword wins, so the
//! order below is part of the observable behaviour. Matching is plain substring
//! containment against the lower-cased input: "fun" also fires inside "function".

/// Output-format labels and the keywords that select them.
pub const FORMAT_TABLE: &[(&str, &[&str])] = &[
    ("bullet points", &["bullet", "bullets", "list", "points"]),
    (
        "step-by-step guide",
        &["step by step", "step-by-step", "steps", "guide", "tutorial"],
    ),
    ("essay", &["essay", "article", "piece"]),
    (
        "code with comments",
        &[
            "code",
            "function",
            "script",
            "program",
            "javascript",
            "python",
            "html",
            "css",
        ],
    ),
    ("table", &["table", "chart", "spreadsheet"]),
    ("outline", &["outline", "structure", "framework"]),
];

/// Keywords that signal a writing task with no explicit format.
pub const WRITING_SIGNALS: &[&str] = &["write", "create", "blog", "article"];

/// Format applied when only a writing signal matched.
pub const DEFAULT_WRITING_FORMAT: &str = "Well-structured and organized";

pub const TONE_PROFESSIONAL: &str = "Professional and business-appropriate";
pub const TONE_CASUAL: &str = "Casual, friendly, and conversational";
pub const TONE_TECHNICAL: &str = "Technical and precise with proper terminology";
pub const TONE_CREATIVE: &str = "Creative, engaging, and imaginative";
pub const TONE_FORMAL: &str = "Formal and academic";
pub const TONE_CONCISE: &str = "Concise and to-the-point";

/// Tone descriptions and the keywords that select them.
pub const TONE_TABLE: &[(&str, &[&str])] = &[
    (
        TONE_PROFESSIONAL,
        &["professional", "business", "formal", "corporate"],
    ),
    (
        TONE_CASUAL,
        &["casual", "friendly", "conversational", "relaxed", "informal"],
    ),
    (TONE_TECHNICAL, &["technical", "precise", "detailed", "accurate"]),
    (
        TONE_CREATIVE,
        &["creative", "engaging", "imaginative", "fun", "interesting"],
    ),
    (TONE_FORMAL, &["academic", "scholarly", "formal", "research"]),
    (TONE_CONCISE, &["concise", "brief", "short", "quick", "summary"]),
];

/// Coarse signals consulted only when no tone keyword matched.
pub const TONE_FALLBACKS: &[(&str, &[&str])] = &[
    (TONE_CASUAL, &["blog", "social", "casual"]),
    (TONE_TECHNICAL, &["code", "technical", "function"]),
    (TONE_PROFESSIONAL, &["business", "professional", "email"]),
];

/// Topic domains, in detection order.
pub const DOMAINS: &[&str] = &[
    "marketing",
    "technical",
    "business",
    "educational",
    "creative",
    "scientific",
];

/// Returns the first label whose keyword set has a member contained in `haystack`.
///
/// `haystack` is expected to be lower-cased already.
pub fn first_match(table: &[(&'static str, &[&str])], haystack: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| haystack.contains(k)))
        .map(|(label, _)| *label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_match_respects_table_order() {
        // "list" (bullet points) and "steps" (step-by-step guide) both present
        assert_eq!(
            first_match(FORMAT_TABLE, "write a list of steps"),
            Some("bullet points")
        );
    }

    #[test]
    fn test_first_match_is_substring_based() {
        assert_eq!(
            first_match(TONE_TABLE, "write a function"),
            Some(TONE_CREATIVE),
            "'fun' inside 'function' must still match"
        );
    }

    #[test]
    fn test_first_match_none_when_no_keyword() {
        assert_eq!(first_match(FORMAT_TABLE, "explain gravity"), None);
    }

    #[test]
    fn test_formal_resolves_to_professional_before_academic() {
        assert_eq!(first_match(TONE_TABLE, "a formal letter"), Some(TONE_PROFESSIONAL));
    }

    #[test]
    fn test_tables_have_no_empty_keyword_sets() {
        for (label, keywords) in FORMAT_TABLE.iter().chain(TONE_TABLE).chain(TONE_FALLBACKS) {
            assert!(!keywords.is_empty(), "{label} has no keywords");
            assert!(keywords.iter().all(|k| *k == k.to_lowercase()));
        }
    }
}
