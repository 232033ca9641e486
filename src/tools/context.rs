//! Context tool - wrap a query with the system persona preamble.

/// Prepend the persona preamble and scaffold the query/response sections.
pub fn inject_context(text: &str, persona: &str) -> String {
    format!(
        "{persona}\n\
         \n\
         ## User Query:\n\
         {text}\n\
         \n\
         ## Your Response:"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persona_comes_first() {
        let output = inject_context("What is Rust?", "You are a compiler.");
        assert!(output.starts_with("You are a compiler."));
        assert!(output.contains("## User Query:\nWhat is Rust?"));
        assert!(output.ends_with("## Your Response:"));
    }
}
