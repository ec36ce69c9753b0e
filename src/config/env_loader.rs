//! Environment variable-based settings overrides

use qa_prompts_core::TemplateId;
use qa_prompts_core::config::SettingsOverrides;
use qa_prompts_core::error::{PromptResult, ResultExt};
use std::env;

pub const ENV_DEFAULT_TEMPLATE: &str = "QA_PROMPTS_DEFAULT_TEMPLATE";
pub const ENV_LOG_LEVEL: &str = "QA_PROMPTS_LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "QA_PROMPTS_LOG_FORMAT";

/// Load overrides from the process environment
pub fn load_from_env() -> PromptResult<SettingsOverrides> {
    load_from_vars(|key| env::var(key).ok())
}

/// Load overrides through a variable lookup function
pub fn load_from_vars<F>(lookup: F) -> PromptResult<SettingsOverrides>
where
    F: Fn(&str) -> Option<String>,
{
    let default_template = lookup(ENV_DEFAULT_TEMPLATE)
        .map(|name| {
            name.parse::<TemplateId>()
                .with_context(|| format!("Reading {}", ENV_DEFAULT_TEMPLATE))
        })
        .transpose()?;

    Ok(SettingsOverrides {
        default_template,
        log_level: lookup(ENV_LOG_LEVEL),
        log_format: lookup(ENV_LOG_FORMAT),
    })
}
