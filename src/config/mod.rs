//! Settings loading for the renderer
//!
//! Files and the process environment are only read here; the core registry
//! never looks at either.

mod env_loader;
mod file_loader;

pub use env_loader::{ENV_DEFAULT_TEMPLATE, ENV_LOG_FORMAT, ENV_LOG_LEVEL, load_from_env, load_from_vars};
pub use file_loader::load_from_file;
pub use qa_prompts_core::config::{LoggingConfig, PromptSettings, SettingsOverrides};

use qa_prompts_core::PromptResult;
use std::path::Path;
use tracing::debug;

/// Load settings from a file, then apply `.env` and environment overrides
pub fn load(path: &Path) -> PromptResult<PromptSettings> {
    if let Ok(env_file) = dotenvy::dotenv() {
        debug!(path = %env_file.display(), "loaded .env file");
    }

    load_with_overrides(path, load_from_env()?)
}

/// Load settings from a file and layer `overrides` on top
pub fn load_with_overrides(path: &Path, overrides: SettingsOverrides) -> PromptResult<PromptSettings> {
    let mut settings = load_from_file(path)?;
    settings.apply(overrides);
    Ok(settings)
}
