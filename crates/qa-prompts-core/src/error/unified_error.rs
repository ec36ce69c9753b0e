//! UnifiedError trait implementation for PromptError

use super::types::{PromptError, UnifiedError};

impl UnifiedError for PromptError {
    fn error_code(&self) -> &str {
        match self {
            Self::UnknownTemplate { .. } => "PROMPT_UNKNOWN_TEMPLATE",
            Self::MalformedTemplate { .. } => "PROMPT_MALFORMED_TEMPLATE",
            Self::Config { .. } => "PROMPT_CONFIG",
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::UnknownTemplate { .. } => "Unknown prompt type",
            Self::MalformedTemplate { reason, .. } => reason,
            Self::Config { message, .. } => message,
        }
    }

    fn context(&self) -> Option<&str> {
        match self {
            Self::UnknownTemplate { requested, .. } => Some(requested),
            Self::MalformedTemplate { template, .. } => Some(template),
            Self::Config { context, .. } => context.as_deref(),
        }
    }
}
