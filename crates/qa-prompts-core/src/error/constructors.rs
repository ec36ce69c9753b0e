//! Constructor methods for PromptError

use super::types::PromptError;

impl PromptError {
    /// Create an unknown template error listing the identifiers that would have worked
    pub fn unknown_template<I, S>(requested: impl Into<String>, available: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::UnknownTemplate {
            requested: requested.into(),
            available: available.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a malformed template error
    pub fn malformed(template: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedTemplate {
            template: template.into(),
            reason: reason.into(),
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: None,
        }
    }

    /// Create a configuration error with context
    pub fn config_with_context(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: Some(context.into()),
        }
    }
}
