//! Prompt renderer service
//!
//! Bundles a shared registry with the loaded settings so callers that render
//! many prompts do not have to thread both around.

use super::registry::TemplateRegistry;
use super::rendered::RenderedPrompt;
use super::template_id::TemplateId;
use crate::config::PromptSettings;
use crate::error::PromptResult;
use std::sync::Arc;

/// Renders prompts against an injected registry
#[derive(Debug, Clone)]
pub struct PromptRenderer {
    registry: Arc<TemplateRegistry>,
    settings: PromptSettings,
}

impl PromptRenderer {
    /// Create a renderer over an existing registry
    pub fn new(registry: Arc<TemplateRegistry>, settings: PromptSettings) -> Self {
        Self { registry, settings }
    }

    /// Create a renderer with a fresh registry and default settings
    pub fn with_defaults() -> Self {
        Self::new(Arc::new(TemplateRegistry::new()), PromptSettings::default())
    }

    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    pub fn settings(&self) -> &PromptSettings {
        &self.settings
    }

    /// Template used by `render_default`
    pub fn default_template(&self) -> TemplateId {
        self.settings.default_template
    }

    /// Render a template selected by name
    pub fn render(&self, name: &str, context: &str, query: &str) -> PromptResult<RenderedPrompt> {
        self.registry.render(name, context, query)
    }

    /// Render the configured default template
    pub fn render_default(&self, context: &str, query: &str) -> RenderedPrompt {
        self.registry
            .render_id(self.settings.default_template, context, query)
    }
}

impl Default for PromptRenderer {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompts::builtin::BuiltinPrompts;

    #[test]
    fn test_render_default_uses_basic() {
        let renderer = PromptRenderer::default();
        assert_eq!(renderer.default_template(), TemplateId::Basic);

        let rendered = renderer.render_default("ctx", "q");
        assert_eq!(rendered.preamble().content, BuiltinPrompts::BASIC_PREAMBLE);
    }

    #[test]
    fn test_render_default_follows_settings() {
        let settings = PromptSettings {
            default_template: TemplateId::Structured,
            ..Default::default()
        };
        let renderer = PromptRenderer::new(Arc::new(TemplateRegistry::new()), settings);

        let rendered = renderer.render_default("ctx", "q");
        assert!(rendered.body().content.contains("FINAL ANSWER:"));
    }

    #[test]
    fn test_shared_registry() {
        let registry = Arc::new(TemplateRegistry::new());
        let a = PromptRenderer::new(registry.clone(), PromptSettings::default());
        let b = PromptRenderer::new(registry.clone(), PromptSettings::default());

        assert!(std::ptr::eq(a.registry(), b.registry()));
        assert_eq!(
            a.render("role", "c", "q").unwrap(),
            b.render("role_based", "c", "q").unwrap()
        );
    }

    #[test]
    fn test_render_unknown() {
        let renderer = PromptRenderer::default();
        assert!(renderer.render("unknown", "c", "q").is_err());
    }
}
