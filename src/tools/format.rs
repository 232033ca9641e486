//! Format tool - convert text into a target document format.

use super::ToolOptions;

fn format_guide(format_type: &str) -> &str {
    match format_type {
        "markdown" => "Convert to well-structured markdown with headers, lists, and emphasis.",
        "html" => "Convert to clean semantic HTML with proper tags and structure.",
        "plain" => "Convert to plain text with clear paragraphs.",
        "outline" => "Convert to a hierarchical outline with main points and subpoints.",
        // Unknown format names pass through verbatim as the goal line.
        other => other,
    }
}

pub fn prompt(text: &str, options: &ToolOptions) -> String {
    let format_type = options.format_type.as_deref().unwrap_or("markdown");

    format!(
        "Please format the following text:\n\
         \n\
         ## Formatting Instructions:\n\
         - Target format: **{format_type}**\n\
         - Goal: {goal}\n\
         - Preserve content and meaning.\n\
         - Improve readability and consistency.\n\
         \n\
         ## Text to Format:\n\
         {text}\n\
         \n\
         ## Formatted Output:\n",
        goal = format_guide(format_type),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_markdown() {
        let output = prompt("some text", &ToolOptions::default());
        assert!(output.contains("**markdown**"));
        assert!(output.contains("well-structured markdown"));
    }

    #[test]
    fn test_html_guide() {
        let options = ToolOptions {
            format_type: Some("html".to_string()),
            ..Default::default()
        };
        let output = prompt("some text", &options);
        assert!(output.contains("clean semantic HTML"));
    }

    #[test]
    fn test_unknown_format_falls_back_to_raw_value() {
        let options = ToolOptions {
            format_type: Some("asciidoc".to_string()),
            ..Default::default()
        };
        let output = prompt("some text", &options);
        assert!(output.contains("**asciidoc**"));
        assert!(output.contains("- Goal: asciidoc"));
        assert!(!output.contains("undefined"));
    }
}
