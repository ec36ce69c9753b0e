//! Question-answering prompt registry
//!
//! Selects one of a fixed set of prompt templates by name and renders it into
//! the system/user message pair consumed by an LLM client.

pub mod config;
pub mod error;
pub mod llm;
pub mod prompts;

// Re-export commonly used types
pub use config::{LoggingConfig, PromptSettings};
pub use error::{PromptError, PromptResult, UnifiedError};
pub use llm::{LlmMessage, MessageRole};
pub use prompts::{
    PromptRenderer, RenderedPrompt, TemplateId, TemplateRecord, TemplateRegistry, render,
};
