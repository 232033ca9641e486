//! Summarize tool - condense text with length/style/focus controls.

use super::ToolOptions;

fn length_guide(length: &str) -> &str {
    match length {
        "short" => "2-3 sentences",
        "medium" => "4-6 sentences or 100-150 words",
        "long" => "2-3 paragraphs or 200-300 words",
        other => other,
    }
}

fn style_guide(style: &str) -> &str {
    match style {
        "concise" => {
            "Keep the summary concise and to-the-point, focusing only on essential information."
        }
        "detailed" => {
            "Provide a comprehensive summary that captures nuances and important details."
        }
        "bullet-points" => {
            "Format the summary as clear bullet points, each highlighting a key idea."
        }
        other => other,
    }
}

pub fn prompt(text: &str, options: &ToolOptions) -> String {
    let length = options.length.as_deref().unwrap_or("medium");
    let style = options.style.as_deref().unwrap_or("concise");

    let focus_line = match options.focus.as_deref() {
        Some(focus) => format!("- Focus specifically on: {focus}\n"),
        None => String::new(),
    };

    format!(
        "Please summarize the following text:\n\
         \n\
         ## Instructions:\n\
         - Length: {length}\n\
         - Style: {style}\n\
         - Preserve the main ideas, key facts, and important conclusions\n\
         - Maintain factual accuracy without adding interpretations\n\
         {focus_line}\
         - Use clear, accessible language\n\
         \n\
         ## Text to Summarize:\n\
         {text}\n\
         \n\
         ## Summary:\n",
        length = length_guide(length),
        style = style_guide(style),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_medium_concise() {
        let output = prompt("some text", &ToolOptions::default());
        assert!(output.contains("4-6 sentences or 100-150 words"));
        assert!(output.contains("concise and to-the-point"));
        assert!(!output.contains("Focus specifically on"));
    }

    #[test]
    fn test_focus_line_included_when_set() {
        let options = ToolOptions {
            focus: Some("the economic impact".to_string()),
            ..Default::default()
        };
        let output = prompt("some text", &options);
        assert!(output.contains("- Focus specifically on: the economic impact"));
    }

    #[test]
    fn test_unknown_length_falls_back_to_raw_value() {
        let options = ToolOptions {
            length: Some("one-word".to_string()),
            ..Default::default()
        };
        let output = prompt("some text", &options);
        assert!(output.contains("- Length: one-word"));
    }
}
