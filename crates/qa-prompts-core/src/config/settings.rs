//! Renderer settings and overrides

use super::logging_config::LoggingConfig;
use crate::prompts::TemplateId;
use serde::{Deserialize, Serialize};

/// Settings for the prompt renderer
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptSettings {
    /// Template used when the caller does not name one
    pub default_template: TemplateId,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Partial settings layered on top of a loaded `PromptSettings`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SettingsOverrides {
    pub default_template: Option<TemplateId>,
    pub log_level: Option<String>,
    pub log_format: Option<String>,
}

impl SettingsOverrides {
    pub fn is_empty(&self) -> bool {
        self.default_template.is_none() && self.log_level.is_none() && self.log_format.is_none()
    }
}

impl PromptSettings {
    /// Apply overrides; unset fields keep their current value
    pub fn apply(&mut self, overrides: SettingsOverrides) {
        if let Some(template) = overrides.default_template {
            self.default_template = template;
        }

        self.logging.merge(LoggingConfig {
            level: overrides.log_level.unwrap_or_default(),
            format: overrides.log_format.unwrap_or_default(),
        });
    }
}
