//! Message types handed to the downstream LLM client

pub mod messages;

pub use messages::{LlmMessage, MessageRole};
