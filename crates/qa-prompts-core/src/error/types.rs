//! Core error types and traits

use thiserror::Error;

/// Result type alias for prompt operations
pub type PromptResult<T> = Result<T, PromptError>;

/// Unified error trait implemented by every prompt error.
///
/// - error_code(): Unique code for programmatic error identification
/// - message(): Human-readable error message
/// - context(): Optional additional context
pub trait UnifiedError: std::error::Error + Send + Sync {
    /// Get the error code for programmatic handling
    fn error_code(&self) -> &str;

    /// Get the human-readable error message
    fn message(&self) -> &str;

    /// Get optional context about the error
    fn context(&self) -> Option<&str> {
        None
    }

    /// Check if this error is retryable
    fn is_retryable(&self) -> bool {
        false
    }
}

/// Extension trait turning foreign errors into `PromptError::Config`
pub trait ResultExt<T> {
    /// Add context lazily (only evaluated on error)
    fn with_context<C: std::fmt::Display, F: FnOnce() -> C>(self, f: F) -> PromptResult<T>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn with_context<C: std::fmt::Display, F: FnOnce() -> C>(self, f: F) -> PromptResult<T> {
        self.map_err(|e| PromptError::config_with_context(e.to_string(), f().to_string()))
    }
}

/// Main error type for prompt lookup, rendering and settings
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PromptError {
    /// The requested template identifier is not part of the registry
    #[error("Unknown prompt type: {}. Available types: [{}]", .requested, .available.join(", "))]
    UnknownTemplate {
        requested: String,
        available: Vec<String>,
    },

    /// A registry record breaks the marker invariant
    #[error("Malformed template '{template}': {reason}")]
    MalformedTemplate { template: String, reason: String },

    /// Settings loading errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },
}
