//! Rendered two-message prompt

use crate::llm::LlmMessage;
use serde::{Serialize, Serializer};

/// Output of a render call: the preamble message followed by the body message
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RenderedPrompt {
    preamble: LlmMessage,
    body: LlmMessage,
}

impl RenderedPrompt {
    pub(crate) fn new(preamble: LlmMessage, body: LlmMessage) -> Self {
        Self { preamble, body }
    }

    /// System-level instruction message
    pub fn preamble(&self) -> &LlmMessage {
        &self.preamble
    }

    /// User-level content message
    pub fn body(&self) -> &LlmMessage {
        &self.body
    }

    /// Both messages in send order
    pub fn messages(&self) -> [&LlmMessage; 2] {
        [&self.preamble, &self.body]
    }

    pub fn into_messages(self) -> Vec<LlmMessage> {
        self.into_iter().collect()
    }
}

impl IntoIterator for RenderedPrompt {
    type Item = LlmMessage;
    type IntoIter = std::array::IntoIter<LlmMessage, 2>;

    fn into_iter(self) -> Self::IntoIter {
        [self.preamble, self.body].into_iter()
    }
}

impl Serialize for RenderedPrompt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.messages())
    }
}
