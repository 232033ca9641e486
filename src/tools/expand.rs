//! Expand tool - elaborate on a short text.

use super::ToolOptions;

pub fn prompt(text: &str, options: &ToolOptions) -> String {
    let add_examples = options.add_examples.unwrap_or(true);
    let add_context = options.add_context.unwrap_or(true);
    let target_length = options.target_length.as_deref().unwrap_or("double");

    // Disabled lines are omitted entirely, not emptied in place.
    let examples_line = if add_examples {
        "- Add examples or illustrations.\n"
    } else {
        ""
    };
    let context_line = if add_context {
        "- Provide additional background or explanations.\n"
    } else {
        ""
    };

    format!(
        "Please expand and elaborate on the following text:\n\
         \n\
         ## Expansion Guidelines:\n\
         - Target length: {target_length} the original\n\
         {examples_line}\
         {context_line}\
         - Maintain tone and relevance.\n\
         - Keep the structure cohesive.\n\
         \n\
         ## Original Text:\n\
         {text}\n\
         \n\
         ## Expanded Version:\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_include_both_lines() {
        let output = prompt("some text", &ToolOptions::default());
        assert!(output.contains("- Target length: double the original"));
        assert!(output.contains("- Add examples or illustrations."));
        assert!(output.contains("- Provide additional background or explanations."));
    }

    #[test]
    fn test_disabled_flags_omit_lines() {
        let options = ToolOptions {
            add_examples: Some(false),
            add_context: Some(false),
            target_length: Some("triple".to_string()),
            ..Default::default()
        };
        let output = prompt("some text", &options);
        assert!(output.contains("- Target length: triple the original"));
        assert!(!output.contains("Add examples"));
        assert!(!output.contains("additional background"));
    }
}
