//! Template records and marker substitution

use super::rendered::RenderedPrompt;
use crate::error::{PromptError, PromptResult};
use crate::llm::LlmMessage;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Serialize;

/// Marker replaced by the retrieved context
pub const CONTEXT_MARKER: &str = "{context}";
/// Marker replaced by the user query
pub const QUERY_MARKER: &str = "{query}";

static MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(context|query)\}").expect("marker pattern is valid"));

/// An immutable prompt: fixed preamble plus a body with `{context}` and `{query}` markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemplateRecord {
    /// System instructions, rendered unmodified
    pub preamble: &'static str,
    /// User message template
    pub body: &'static str,
    /// One-line summary of what the prompt asks for
    pub description: &'static str,
}

impl TemplateRecord {
    /// Create a new record
    pub const fn new(preamble: &'static str, body: &'static str) -> Self {
        Self {
            preamble,
            body,
            description: "",
        }
    }

    /// Set description
    pub const fn with_description(self, description: &'static str) -> Self {
        Self {
            description,
            ..self
        }
    }

    /// Render the body with the given context and query
    pub fn render_body(&self, context: &str, query: &str) -> String {
        substitute(self.body, context, query)
    }

    /// Render both messages
    pub fn messages(&self, context: &str, query: &str) -> RenderedPrompt {
        RenderedPrompt::new(
            LlmMessage::preamble(self.preamble),
            LlmMessage::body(self.render_body(context, query)),
        )
    }

    /// Check the marker invariant: each marker exactly once in the body, none in the preamble
    pub fn validate(&self, name: &str) -> PromptResult<()> {
        if MARKER_RE.is_match(self.preamble) {
            return Err(PromptError::malformed(
                name,
                "preamble must not contain substitution markers",
            ));
        }

        for marker in [CONTEXT_MARKER, QUERY_MARKER] {
            let count = self.body.matches(marker).count();
            if count != 1 {
                return Err(PromptError::malformed(
                    name,
                    format!("body must contain {marker} exactly once, found {count}"),
                ));
            }
        }

        Ok(())
    }
}

/// Replace `{context}` and `{query}` in a single pass over `template`.
///
/// Inserted values are never rescanned, so values that themselves look like
/// markers come through verbatim.
pub fn substitute(template: &str, context: &str, query: &str) -> String {
    MARKER_RE
        .replace_all(template, |caps: &Captures<'_>| match &caps[1] {
            "context" => context,
            _ => query,
        })
        .into_owned()
}
