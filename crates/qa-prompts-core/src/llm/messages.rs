//! LLM message types and structures

use serde::{Deserialize, Serialize};

/// Role of a rendered message
///
/// The preamble carries system-level instructions, the body carries the
/// user-level content. On the wire they use the usual chat role names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageRole {
    /// System-level instruction message
    #[serde(rename = "system")]
    Preamble,
    /// User-level content message
    #[serde(rename = "user")]
    Body,
}

impl MessageRole {
    /// Chat role name used by LLM APIs
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::Preamble => "system",
            MessageRole::Body => "user",
        }
    }
}

impl std::fmt::Display for MessageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A message in the LLM conversation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LlmMessage {
    /// Role of the message sender
    pub role: MessageRole,
    /// Content of the message
    pub content: String,
}

impl LlmMessage {
    /// Create a new preamble (system) message
    pub fn preamble<S: Into<String>>(content: S) -> Self {
        Self {
            role: MessageRole::Preamble,
            content: content.into(),
        }
    }

    /// Create a new body (user) message
    pub fn body<S: Into<String>>(content: S) -> Self {
        Self {
            role: MessageRole::Body,
            content: content.into(),
        }
    }
}
