//! Error types for the prompt registry
//!
//! All errors implement the `UnifiedError` trait, which exposes:
//! - error_code: A stable identifier for programmatic handling
//! - message: Human-readable error message
//! - context: Optional additional context about where the error occurred

mod constructors;
mod types;
mod unified_error;

pub use types::{PromptError, PromptResult, ResultExt, UnifiedError};
