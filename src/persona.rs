//! System persona shared across requests.
//!
//! The persona is the instruction preamble the `context` tool prepends to a
//! user query. There is one per process, replaceable wholesale at runtime.

use std::sync::{Arc, PoisonError, RwLock};

/// Default persona text, used until an administrator replaces it.
pub const DEFAULT_PERSONA: &str = "\
You are a highly knowledgeable and helpful AI assistant with expertise across multiple domains.

Communication Style:
- Provide clear, accurate, and well-structured responses.
- Use natural, conversational language while maintaining professionalism.
- Break down complex topics into digestible explanations.
- Include relevant examples when helpful.
- Format responses with proper markdown for readability.

Guidelines:
- Be direct and concise, but thorough when needed.
- Admit uncertainty when you don't know something.
- Ask clarifying questions if the query is ambiguous.
- Prioritize accuracy over speed.
- Use bullet points, numbered lists, or tables when appropriate.";

/// Handle to the process-wide persona string.
///
/// Cloning the handle shares the underlying value. The lock only keeps the
/// string itself consistent: a `set` racing an in-flight request means that
/// request sees either the old or the new persona, which is acceptable since
/// persona changes are rare administrative operations.
#[derive(Clone)]
pub struct Persona {
    inner: Arc<RwLock<String>>,
}

impl Persona {
    /// Create a persona holding the given initial text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(text.into())),
        }
    }

    /// Snapshot the current persona text.
    pub fn get(&self) -> String {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the persona text for all subsequent readers.
    pub fn set(&self, text: impl Into<String>) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = text.into();
    }
}

impl Default for Persona {
    fn default() -> Self {
        Self::new(DEFAULT_PERSONA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_persona() {
        let persona = Persona::default();
        assert!(persona.get().contains("helpful AI assistant"));
    }

    #[test]
    fn test_set_replaces_for_all_clones() {
        let persona = Persona::default();
        let shared = persona.clone();

        persona.set("You are a pirate.");

        assert_eq!(shared.get(), "You are a pirate.");
        assert!(!shared.get().contains("helpful AI assistant"));
    }
}
