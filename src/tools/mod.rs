//! Prompt tools - message rewriting templates
//!
//! Each tool is a pure function that turns the raw user text into a
//! specialized instruction prompt. Templates are total: they never fail,
//! whatever the options contain, and always emit the input text verbatim.

mod context;
mod expand;
mod format;
mod simplify;
mod summarize;
mod tone;

use serde::Deserialize;

use crate::persona::Persona;

pub use context::inject_context;

/// Flat, tool-specific options bag as received over the wire.
///
/// Unrecognized keys are dropped by serde; recognized keys with enum-like
/// string values fall back to the raw value when unrecognized, so prompt
/// construction never rejects input.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ToolOptions {
    // summarize
    pub length: Option<String>,
    pub style: Option<String>,
    pub focus: Option<String>,

    // tone
    pub tone: Option<String>,
    pub preserve_length: Option<bool>,
    pub audience: Option<String>,
    pub intensity: Option<String>,

    // format
    pub format_type: Option<String>,

    // expand
    pub add_examples: Option<bool>,
    pub add_context: Option<bool>,
    pub target_length: Option<String>,

    // simplify
    pub target_audience: Option<String>,
}

/// The closed set of prompt tools.
///
/// `None` is the explicit passthrough variant: dispatch with an unknown,
/// empty, or absent tool name leaves the message untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Context,
    Summarize,
    Tone,
    Format,
    Expand,
    Simplify,
    None,
}

impl Tool {
    /// Resolve an optional tool name to a variant. Unknown names map to
    /// [`Tool::None`] rather than an error.
    pub fn parse(name: Option<&str>) -> Self {
        match name {
            Some("context") => Tool::Context,
            Some("summarize") => Tool::Summarize,
            Some("tone") => Tool::Tone,
            Some("format") => Tool::Format,
            Some("expand") => Tool::Expand,
            Some("simplify") => Tool::Simplify,
            _ => Tool::None,
        }
    }

    /// Apply this tool to the user text, producing the instruction prompt.
    ///
    /// Pure except for the persona read in the `context` arm.
    pub fn apply(self, text: &str, options: &ToolOptions, persona: &Persona) -> String {
        match self {
            Tool::Context => context::inject_context(text, &persona.get()),
            Tool::Summarize => summarize::prompt(text, options),
            Tool::Tone => tone::prompt(text, options),
            Tool::Format => format::prompt(text, options),
            Tool::Expand => expand::prompt(text, options),
            Tool::Simplify => simplify::prompt(text, options),
            Tool::None => text.to_string(),
        }
    }
}
