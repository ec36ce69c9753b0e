//! Question-answering prompt templates
//!
//! A fixed registry of prompts, each a system preamble plus a user body with
//! `{context}` and `{query}` markers, rendered into the two messages sent to
//! an LLM.
//!
//! # Example
//!
//! ```rust
//! use qa_prompts_core::prompts::TemplateRegistry;
//!
//! let registry = TemplateRegistry::new();
//! let prompt = registry
//!     .render("basic", "The sky is blue.", "What color is the sky?")
//!     .unwrap();
//! assert_eq!(
//!     prompt.preamble().content,
//!     "Just answer queries based on the provided context."
//! );
//! ```

pub mod builtin;
pub mod registry;
pub mod rendered;
pub mod renderer;
pub mod template;
pub mod template_id;

pub use builtin::BuiltinPrompts;
pub use registry::TemplateRegistry;
pub use rendered::RenderedPrompt;
pub use renderer::PromptRenderer;
pub use template::{CONTEXT_MARKER, QUERY_MARKER, TemplateRecord, substitute};
pub use template_id::TemplateId;

use crate::error::PromptResult;

/// Render a template by name against the process-wide registry
pub fn render(template: &str, context: &str, query: &str) -> PromptResult<RenderedPrompt> {
    TemplateRegistry::global().render(template, context, query)
}
