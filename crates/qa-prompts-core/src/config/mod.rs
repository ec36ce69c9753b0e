//! Settings types for the prompt renderer
//!
//! Settings only pick defaults (template, logging); template texts are fixed.
//! Loading them from files or the environment happens outside this crate.

mod logging_config;
mod settings;

pub use logging_config::LoggingConfig;
pub use settings::{PromptSettings, SettingsOverrides};
