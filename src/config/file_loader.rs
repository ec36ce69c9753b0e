//! File-based settings loading

use qa_prompts_core::PromptSettings;
use qa_prompts_core::error::{PromptResult, ResultExt};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Settings file formats, picked by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsFormat {
    Toml,
    Yaml,
    Json,
}

impl SettingsFormat {
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => Self::Toml,
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Toml => "TOML",
            Self::Yaml => "YAML",
            Self::Json => "JSON",
        }
    }

    fn parse(&self, content: &str) -> Result<PromptSettings, String> {
        match self {
            Self::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

/// Load settings from a file
///
/// Supports JSON, TOML, and YAML formats based on file extension.
/// Returns default settings if the file doesn't exist.
pub fn load_from_file(path: &Path) -> PromptResult<PromptSettings> {
    if !path.exists() {
        debug!(path = %path.display(), "settings file not found, using defaults");
        return Ok(PromptSettings::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Reading configuration from '{}'", path.display()))?;

    let format = SettingsFormat::from_path(path);
    format.parse(&content).with_context(|| {
        format!(
            "Deserializing {} configuration from '{}'",
            format.name(),
            path.display()
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use qa_prompts_core::{LoggingConfig, TemplateId, UnifiedError};
    use tempfile::TempDir;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(SettingsFormat::from_path(Path::new("a.toml")), SettingsFormat::Toml);
        assert_eq!(SettingsFormat::from_path(Path::new("a.yml")), SettingsFormat::Yaml);
        assert_eq!(SettingsFormat::from_path(Path::new("a.yaml")), SettingsFormat::Yaml);
        assert_eq!(SettingsFormat::from_path(Path::new("a.json")), SettingsFormat::Json);
        assert_eq!(SettingsFormat::from_path(Path::new("settings")), SettingsFormat::Json);
    }

    #[test]
    fn test_missing_file_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let settings = load_from_file(&temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(settings, PromptSettings::default());
    }

    #[test]
    fn test_load_from_toml_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.toml");
        fs::write(
            &path,
            r#"
default_template = "few_shot"

[logging]
level = "debug"
format = "json"
"#,
        )
        .unwrap();

        let settings = load_from_file(&path).unwrap();
        assert_eq!(settings.default_template, TemplateId::FewShot);
        assert_eq!(
            settings.logging,
            LoggingConfig {
                level: "debug".to_string(),
                format: "json".to_string(),
            }
        );
    }

    #[test]
    fn test_load_from_yaml_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.yml");
        fs::write(&path, "default_template: role_based\n").unwrap();

        let settings = load_from_file(&path).unwrap();
        assert_eq!(settings.default_template, TemplateId::RoleBased);
    }

    #[test]
    fn test_load_from_json_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        fs::write(&path, r#"{ "logging": { "level": "warn" } }"#).unwrap();

        let settings = load_from_file(&path).unwrap();
        assert_eq!(settings.default_template, TemplateId::Basic);
        assert_eq!(settings.logging.level, "warn");
        assert_eq!(settings.logging.format, "pretty");
    }

    #[test]
    fn test_unknown_template_in_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.toml");
        fs::write(&path, "default_template = \"nonexistent\"").unwrap();

        let err = load_from_file(&path).unwrap_err();
        assert_eq!(err.error_code(), "PROMPT_CONFIG");
        assert!(err.message().contains("nonexistent"));
        let context = err.context().unwrap();
        assert!(context.starts_with("Deserializing TOML configuration"));
        assert!(context.contains("settings.toml"));
    }

    #[test]
    fn test_unreadable_path_reports_read_context() {
        let temp_dir = TempDir::new().unwrap();
        // A directory exists but cannot be read as a file
        let err = load_from_file(temp_dir.path()).unwrap_err();
        assert_eq!(err.error_code(), "PROMPT_CONFIG");
        assert!(err.context().unwrap().starts_with("Reading configuration from"));
    }
}
