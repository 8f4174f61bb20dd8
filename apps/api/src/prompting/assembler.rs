//! Prompt assembler — renders an `Analysis` into a labeled, section-delimited prompt.
//!
//! Section order is fixed: TASK, CONTEXT, REQUIREMENTS, OUTPUT FORMAT, TONE, closing line.
//! Every section except TASK is omitted when its source field is empty.

use crate::prompting::analyzer::Analysis;

pub const CONTEXT_PLACEHOLDER: &str = "Please consider the full context of this request.";

pub const CLOSING_INSTRUCTION: &str = "Please provide a comprehensive and well-structured \
    response that addresses all aspects of this request.";

/// Renders the analysis. Total and deterministic.
pub fn assemble(analysis: &Analysis) -> String {
    let mut prompt = format!("TASK:\n{}\n\n", analysis.task);

    if !analysis.context.is_empty() || analysis.has_context {
        let context = if analysis.context.is_empty() {
            CONTEXT_PLACEHOLDER
        } else {
            analysis.context.as_str()
        };
        prompt.push_str(&format!("CONTEXT:\n{context}\n\n"));
    }

    if !analysis.requirements.is_empty() {
        prompt.push_str(&format!(
            "REQUIREMENTS:\n{}\n\n",
            analysis.requirements.join("\n")
        ));
    }

    if !analysis.output_format.is_empty() {
        prompt.push_str(&format!("OUTPUT FORMAT: {}\n\n", analysis.output_format));
    }

    if !analysis.tone.is_empty() {
        prompt.push_str(&format!("TONE: {}\n\n", analysis.tone));
    }

    prompt.push_str(CLOSING_INSTRUCTION);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompting::analyzer::analyze;

    fn task_only(task: &str) -> Analysis {
        Analysis {
            task: task.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_task_only_renders_no_empty_headers() {
        let out = assemble(&task_only("Summarize the report"));
        assert_eq!(
            out,
            "TASK:\nSummarize the report\n\nPlease provide a comprehensive and well-structured \
             response that addresses all aspects of this request."
        );
    }

    #[test]
    fn test_has_context_without_text_uses_placeholder() {
        let analysis = Analysis {
            has_context: true,
            ..task_only("Do it")
        };
        let out = assemble(&analysis);
        assert!(out.contains("CONTEXT:\nPlease consider the full context of this request.\n\n"));
    }

    #[test]
    fn test_all_sections_in_fixed_order() {
        let analysis = Analysis {
            task: "Write a summary".to_string(),
            context: "For the board".to_string(),
            has_context: true,
            requirements: vec!["include numbers".to_string(), "Length: 200 words".to_string()],
            output_format: "bullet points".to_string(),
            tone: "Concise and to-the-point".to_string(),
        };
        let out = assemble(&analysis);
        assert_eq!(
            out,
            "TASK:\nWrite a summary\n\n\
             CONTEXT:\nFor the board\n\n\
             REQUIREMENTS:\ninclude numbers\nLength: 200 words\n\n\
             OUTPUT FORMAT: bullet points\n\n\
             TONE: Concise and to-the-point\n\n\
             Please provide a comprehensive and well-structured response that addresses all \
             aspects of this request."
        );
    }

    #[test]
    fn test_assemble_is_deterministic() {
        let analysis = analyze("Create a table of planets. Should list moons.").unwrap();
        assert_eq!(assemble(&analysis), assemble(&analysis.clone()));
    }

    #[test]
    fn test_end_to_end_blog_post() {
        let analysis =
            analyze("Write a blog post about productivity tips for remote workers.").unwrap();
        let out = assemble(&analysis);
        assert!(out.starts_with(
            "TASK:\nWrite a blog post about productivity tips for remote workers.\n\n"
        ));
        assert!(out.contains("OUTPUT FORMAT: Well-structured and organized\n\n"));
        assert!(out.contains("TONE: Casual, friendly, and conversational\n\n"));
        assert!(!out.contains("REQUIREMENTS:"));
    }
}
