//! Tone tool - rewrite text in a named tone.

use super::ToolOptions;

/// Named tones with a description and example phrasing guidance.
const TONES: &[(&str, &str, &str)] = &[
    (
        "friendly",
        "warm, approachable, and personable",
        "use welcoming language and positive phrasing",
    ),
    (
        "professional",
        "polished, formal, and business-appropriate",
        "avoid contractions, keep formal tone",
    ),
    (
        "casual",
        "relaxed, conversational, and informal",
        "use everyday language and contractions",
    ),
    (
        "enthusiastic",
        "energetic, motivating, and confident",
        "positive reinforcement and active verbs",
    ),
    (
        "empathetic",
        "understanding and compassionate",
        "acknowledge feelings and show empathy",
    ),
    (
        "confident",
        "assertive and decisive",
        "use strong declarative sentences",
    ),
    (
        "humorous",
        "witty and light-hearted",
        "subtle humor and clever phrasing",
    ),
    (
        "persuasive",
        "convincing and influential",
        "use logic, evidence, and strong calls to action",
    ),
    (
        "diplomatic",
        "tactful and balanced",
        "acknowledge perspectives, stay neutral",
    ),
    (
        "concise",
        "brief and efficient",
        "short sentences, focus on essentials",
    ),
];

fn audience_guide(audience: &str) -> &str {
    match audience {
        "general" => "suitable for a broad audience",
        "professional" => "appropriate for workplace or business contexts",
        "casual" => "suited for friends or informal settings",
        "technical" => "for specialists or subject-matter experts",
        other => other,
    }
}

fn intensity_guide(intensity: &str) -> &str {
    match intensity {
        "subtle" => "Make minimal changes, slight tone shift",
        "moderate" => "Apply a balanced tone adjustment",
        "strong" => "Transform the tone significantly",
        other => other,
    }
}

pub fn prompt(text: &str, options: &ToolOptions) -> String {
    let tone = options
        .tone
        .as_deref()
        .unwrap_or("friendly")
        .to_lowercase();
    let audience = options.audience.as_deref().unwrap_or("general");
    let intensity = options.intensity.as_deref().unwrap_or("moderate");
    let preserve_length = options.preserve_length.unwrap_or(true);

    // Unrecognized tone names never fail; the raw name becomes both the
    // description and the example guidance.
    let fallback = format!("match a {tone} tone");
    let (description, examples) = TONES
        .iter()
        .find(|(name, _, _)| *name == tone)
        .map(|(_, description, examples)| (*description, *examples))
        .unwrap_or((tone.as_str(), fallback.as_str()));

    let length_line = if preserve_length {
        "- Keep similar length"
    } else {
        "- Length may vary"
    };

    format!(
        "Please rewrite the following message in a {tone} tone:\n\
         \n\
         ## Tone Requirements:\n\
         - Description: {description}\n\
         - Examples: {examples}\n\
         - Intensity: {intensity}\n\
         - Audience: {audience}\n\
         {length_line}\n\
         \n\
         ## Guidelines:\n\
         - Preserve facts, names, and structure.\n\
         - Maintain clarity and flow.\n\
         - Avoid cliches or exaggeration.\n\
         \n\
         ## Original Message:\n\
         {text}\n\
         \n\
         ## Rewritten Message (in {tone} tone):\n",
        intensity = intensity_guide(intensity),
        audience = audience_guide(audience),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tone_is_friendly() {
        let output = prompt("hello", &ToolOptions::default());
        assert!(output.contains("in a friendly tone"));
        assert!(output.contains("warm, approachable, and personable"));
        assert!(output.contains("- Keep similar length"));
    }

    #[test]
    fn test_tone_name_is_case_insensitive() {
        let options = ToolOptions {
            tone: Some("Professional".to_string()),
            ..Default::default()
        };
        let output = prompt("hello", &options);
        assert!(output.contains("polished, formal, and business-appropriate"));
    }

    #[test]
    fn test_unknown_tone_never_fails() {
        let options = ToolOptions {
            tone: Some("unknowngibberish".to_string()),
            ..Default::default()
        };
        let output = prompt("hello", &options);
        assert!(output.contains("match a unknowngibberish tone"));
        assert!(output.contains("- Description: unknowngibberish"));
    }

    #[test]
    fn test_preserve_length_false() {
        let options = ToolOptions {
            preserve_length: Some(false),
            ..Default::default()
        };
        let output = prompt("hello", &options);
        assert!(output.contains("- Length may vary"));
        assert!(!output.contains("- Keep similar length"));
    }

    #[test]
    fn test_audience_and_intensity_guides() {
        let options = ToolOptions {
            audience: Some("technical".to_string()),
            intensity: Some("strong".to_string()),
            ..Default::default()
        };
        let output = prompt("hello", &options);
        assert!(output.contains("for specialists or subject-matter experts"));
        assert!(output.contains("Transform the tone significantly"));
    }
}
