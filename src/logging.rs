//! Tracing subscriber setup

use qa_prompts_core::LoggingConfig;
use qa_prompts_core::error::{PromptError, PromptResult, ResultExt};
use std::env;
use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber for `config`.
///
/// A set `RUST_LOG` replaces the configured level; an invalid `RUST_LOG` is
/// an error rather than a silent fallback. Returns `Ok(false)` when a global
/// subscriber is already installed.
pub fn init(config: &LoggingConfig) -> PromptResult<bool> {
    let filter = build_filter(env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(), &config.level)?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = match config.format.as_str() {
        "json" => builder.json().try_init(),
        "compact" => builder.compact().try_init(),
        "pretty" | "" => builder.pretty().try_init(),
        other => {
            return Err(PromptError::config(format!(
                "Unknown log format '{}', expected json, pretty or compact",
                other
            )));
        }
    };

    Ok(installed.is_ok())
}

/// Filter from `RUST_LOG` directives when present, else from the configured level
fn build_filter(rust_log: Option<&str>, level: &str) -> PromptResult<EnvFilter> {
    match rust_log {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("Parsing {}='{}'", EnvFilter::DEFAULT_ENV, directives)),
        None => EnvFilter::try_new(level).with_context(|| format!("Parsing log level '{}'", level)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qa_prompts_core::UnifiedError;

    #[test]
    fn test_filter_prefers_rust_log() {
        // The configured level is invalid, so success means it was never parsed
        assert!(build_filter(Some("warn"), "qa_prompts=verbose").is_ok());
    }

    #[test]
    fn test_filter_uses_level_when_rust_log_unset() {
        assert!(build_filter(None, "debug").is_ok());

        let err = build_filter(None, "qa_prompts=verbose").unwrap_err();
        assert_eq!(err.context(), Some("Parsing log level 'qa_prompts=verbose'"));
    }

    #[test]
    fn test_invalid_rust_log_is_reported() {
        let err = build_filter(Some("qa_prompts=verbose"), "info").unwrap_err();
        assert_eq!(err.error_code(), "PROMPT_CONFIG");
        assert_eq!(err.context(), Some("Parsing RUST_LOG='qa_prompts=verbose'"));
    }

    #[test]
    fn test_unknown_format_rejected() {
        let config = LoggingConfig {
            level: "info".to_string(),
            format: "xml".to_string(),
        };
        // Only meaningful when RUST_LOG does not break filter construction first
        if env::var(EnvFilter::DEFAULT_ENV).is_err() {
            let err = init(&config).unwrap_err();
            assert_eq!(err.error_code(), "PROMPT_CONFIG");
            assert!(err.message().contains("xml"));
        }
    }

    #[test]
    fn test_second_init_is_noop() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            format: "compact".to_string(),
        };
        if init(&config).is_ok() {
            assert!(!init(&config).unwrap());
        }
    }
}
