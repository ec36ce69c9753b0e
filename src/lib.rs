//! QA Prompts
//!
//! High-level entry point for rendering question-answering prompts. The core
//! crate is a pure lookup; settings files, `.env`, environment overrides and
//! subscriber setup live here.
//!
//! # Example
//!
//! ```rust
//! use qa_prompts::{MessageRole, render};
//!
//! let messages = render("few_shot", "Paris is in France.", "Where is Paris?")
//!     .unwrap()
//!     .into_messages();
//! assert_eq!(messages.len(), 2);
//! assert_eq!(messages[0].role, MessageRole::Preamble);
//! assert!(messages[1].content.ends_with("Question: Where is Paris?"));
//! ```

pub mod config;
pub mod logging;

use std::path::Path;
use std::sync::Arc;
use tracing::info;

// Re-export commonly used types from core
pub use qa_prompts_core::{
    LlmMessage, LoggingConfig, MessageRole, PromptError, PromptRenderer, PromptResult,
    PromptSettings, RenderedPrompt, TemplateId, TemplateRecord, TemplateRegistry, UnifiedError,
    render,
};

/// Load settings from `settings_path`, install logging, and build a renderer.
///
/// A missing settings file falls back to defaults. Environment overrides
/// (`QA_PROMPTS_*`, optionally from `.env`) are applied on top.
pub fn init(settings_path: &Path) -> PromptResult<PromptRenderer> {
    let settings = config::load(settings_path)?;
    logging::init(&settings.logging)?;

    let registry = Arc::new(TemplateRegistry::new());
    registry.validate()?;
    info!(
        default_template = %settings.default_template,
        templates = registry.len(),
        "prompt renderer ready"
    );

    Ok(PromptRenderer::new(registry, settings))
}
