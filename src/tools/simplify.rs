//! Simplify tool - rewrite text for a target audience.

use super::ToolOptions;

fn audience_phrase(target_audience: &str) -> &str {
    match target_audience {
        "general public" => "average adult reader (8th-10th grade level)",
        "children" => "children aged 8-12",
        "teenagers" => "teenagers aged 13-17",
        "beginners" => "beginners with no prior knowledge",
        "non-technical" => "non-technical readers",
        other => other,
    }
}

pub fn prompt(text: &str, options: &ToolOptions) -> String {
    let target_audience = options.target_audience.as_deref().unwrap_or("general public");

    format!(
        "Please simplify the following text:\n\
         \n\
         ## Simplification Requirements:\n\
         - Target audience: {audience}\n\
         - Use simple, everyday language.\n\
         - Replace jargon with clear explanations.\n\
         - Short sentences, clear structure.\n\
         - Maintain factual accuracy.\n\
         \n\
         ## Original Text:\n\
         {text}\n\
         \n\
         ## Simplified Version:\n",
        audience = audience_phrase(target_audience),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_general_public() {
        let output = prompt("some text", &ToolOptions::default());
        assert!(output.contains("average adult reader (8th-10th grade level)"));
    }

    #[test]
    fn test_known_audience_is_mapped() {
        let options = ToolOptions {
            target_audience: Some("children".to_string()),
            ..Default::default()
        };
        let output = prompt("some text", &options);
        assert!(output.contains("children aged 8-12"));
    }

    #[test]
    fn test_unknown_audience_passes_through_verbatim() {
        let options = ToolOptions {
            target_audience: Some("medieval historians".to_string()),
            ..Default::default()
        };
        let output = prompt("some text", &options);
        assert!(output.contains("- Target audience: medieval historians"));
    }
}
