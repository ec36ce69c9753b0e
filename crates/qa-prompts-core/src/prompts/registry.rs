//! Prompt template registry
//!
//! Maps every `TemplateId` to its builtin `TemplateRecord`. The registry is
//! fully populated on construction and never mutated afterwards, so a single
//! instance can be shared by reference across threads.

use super::builtin::BuiltinPrompts;
use super::rendered::RenderedPrompt;
use super::template::TemplateRecord;
use super::template_id::TemplateId;
use crate::error::{PromptError, PromptResult};
use once_cell::sync::Lazy;
use tracing::{debug, warn};

static GLOBAL: Lazy<TemplateRegistry> = Lazy::new(TemplateRegistry::new);

/// Immutable registry of the builtin prompt templates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRegistry {
    /// Records indexed by `TemplateId` discriminant
    records: [TemplateRecord; TemplateId::ALL.len()],
}

impl TemplateRegistry {
    /// Create a registry with every builtin template
    pub fn new() -> Self {
        Self {
            records: TemplateId::ALL.map(builtin_record),
        }
    }

    /// Process-wide registry, built on first use
    pub fn global() -> &'static TemplateRegistry {
        &GLOBAL
    }

    /// Get the record for an identifier
    pub fn get(&self, id: TemplateId) -> &TemplateRecord {
        &self.records[id as usize]
    }

    /// Resolve a template name (canonical or alias) to its record
    pub fn lookup(&self, name: &str) -> PromptResult<(TemplateId, &TemplateRecord)> {
        match TemplateId::from_name(name) {
            Some(id) => Ok((id, self.get(id))),
            None => {
                warn!(template = name, "unknown prompt template requested");
                Err(PromptError::unknown_template(name, TemplateId::names()))
            }
        }
    }

    /// Render a template selected by name
    pub fn render(&self, name: &str, context: &str, query: &str) -> PromptResult<RenderedPrompt> {
        let (id, _) = self.lookup(name)?;
        Ok(self.render_id(id, context, query))
    }

    /// Render a template selected by identifier
    pub fn render_id(&self, id: TemplateId, context: &str, query: &str) -> RenderedPrompt {
        debug!(
            template = %id,
            context_len = context.len(),
            query_len = query.len(),
            "rendering prompt"
        );
        self.get(id).messages(context, query)
    }

    /// Identifiers in registry order
    pub fn ids(&self) -> impl Iterator<Item = TemplateId> + '_ {
        TemplateId::ALL.into_iter()
    }

    /// Identifier/record pairs in registry order
    pub fn iter(&self) -> impl Iterator<Item = (TemplateId, &TemplateRecord)> + '_ {
        TemplateId::ALL.into_iter().zip(self.records.iter())
    }

    /// Get template count
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false: every identifier has a record
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Check the marker invariant on every record
    pub fn validate(&self) -> PromptResult<()> {
        self.iter()
            .try_for_each(|(id, record)| record.validate(id.as_str()))
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn builtin_record(id: TemplateId) -> TemplateRecord {
    match id {
        TemplateId::Basic => {
            TemplateRecord::new(BuiltinPrompts::BASIC_PREAMBLE, BuiltinPrompts::BASIC_BODY)
                .with_description(BuiltinPrompts::BASIC_DESCRIPTION)
        }
        TemplateId::ChainOfThought => TemplateRecord::new(
            BuiltinPrompts::CHAIN_OF_THOUGHT_PREAMBLE,
            BuiltinPrompts::CHAIN_OF_THOUGHT_BODY,
        )
        .with_description(BuiltinPrompts::CHAIN_OF_THOUGHT_DESCRIPTION),
        TemplateId::FewShot => TemplateRecord::new(
            BuiltinPrompts::FEW_SHOT_PREAMBLE,
            BuiltinPrompts::FEW_SHOT_BODY,
        )
        .with_description(BuiltinPrompts::FEW_SHOT_DESCRIPTION),
        TemplateId::Structured => TemplateRecord::new(
            BuiltinPrompts::STRUCTURED_PREAMBLE,
            BuiltinPrompts::STRUCTURED_BODY,
        )
        .with_description(BuiltinPrompts::STRUCTURED_DESCRIPTION),
        TemplateId::Constrained => TemplateRecord::new(
            BuiltinPrompts::CONSTRAINED_PREAMBLE,
            BuiltinPrompts::CONSTRAINED_BODY,
        )
        .with_description(BuiltinPrompts::CONSTRAINED_DESCRIPTION),
        TemplateId::RoleBased => TemplateRecord::new(
            BuiltinPrompts::ROLE_BASED_PREAMBLE,
            BuiltinPrompts::ROLE_BASED_BODY,
        )
        .with_description(BuiltinPrompts::ROLE_BASED_DESCRIPTION),
        TemplateId::SelfVerify => TemplateRecord::new(
            BuiltinPrompts::SELF_VERIFY_PREAMBLE,
            BuiltinPrompts::SELF_VERIFY_BODY,
        )
        .with_description(BuiltinPrompts::SELF_VERIFY_DESCRIPTION),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::MessageRole;
    use crate::prompts::template::{CONTEXT_MARKER, QUERY_MARKER};

    #[test]
    fn test_registry_builtins_are_well_formed() {
        let registry = TemplateRegistry::new();
        assert_eq!(registry.len(), 7);
        assert!(!registry.is_empty());
        assert!(registry.validate().is_ok());
    }

    #[test]
    fn test_registry_order_matches_ids() {
        let registry = TemplateRegistry::new();
        let ids: Vec<_> = registry.ids().collect();
        assert_eq!(ids, TemplateId::ALL.to_vec());

        for (id, record) in registry.iter() {
            assert_eq!(registry.get(id), record);
        }
    }

    #[test]
    fn test_every_template_renders_two_messages_without_markers() {
        let registry = TemplateRegistry::new();
        for id in TemplateId::ALL {
            let rendered = registry.render(id.as_str(), "CTX", "QRY").unwrap();
            let messages = rendered.into_messages();
            assert_eq!(messages.len(), 2);
            assert_eq!(messages[0].role, MessageRole::Preamble);
            assert_eq!(messages[1].role, MessageRole::Body);
            assert!(!messages[1].content.contains(CONTEXT_MARKER), "{id}");
            assert!(!messages[1].content.contains(QUERY_MARKER), "{id}");
            assert!(messages[1].content.contains("CTX"));
            assert!(messages[1].content.contains("QRY"));
        }
    }

    #[test]
    fn test_preamble_is_unmodified() {
        let registry = TemplateRegistry::new();
        for (id, record) in registry.iter() {
            let rendered = registry.render_id(id, "{context}", "{query}");
            assert_eq!(rendered.preamble().content, record.preamble);
        }
    }

    #[test]
    fn test_body_matches_manual_replacement() {
        let registry = TemplateRegistry::new();
        for (id, record) in registry.iter() {
            let expected = record
                .body
                .replacen(CONTEXT_MARKER, "alpha", 1)
                .replacen(QUERY_MARKER, "beta", 1);
            assert_eq!(registry.render_id(id, "alpha", "beta").body().content, expected);
        }
    }

    #[test]
    fn test_basic_keeps_query_before_context() {
        let record = TemplateRegistry::new().get(TemplateId::Basic).body;
        let query_at = record.find(QUERY_MARKER).unwrap();
        let context_at = record.find(CONTEXT_MARKER).unwrap();
        assert!(query_at < context_at);
    }

    #[test]
    fn test_lookup_alias() {
        let registry = TemplateRegistry::new();
        let (id, record) = registry.lookup("chain_of_thought").unwrap();
        assert_eq!(id, TemplateId::ChainOfThought);
        assert_eq!(record, registry.get(TemplateId::ChainOfThought));
    }

    #[test]
    fn test_render_unknown_template() {
        let registry = TemplateRegistry::new();
        let err = registry.render("nonexistent", "a", "b").unwrap_err();
        assert!(matches!(
            err,
            PromptError::UnknownTemplate { ref requested, .. } if requested == "nonexistent"
        ));
        assert!(err.to_string().contains("nonexistent"));
        assert!(err.to_string().contains("self_verify"));
    }

    #[test]
    fn test_global_is_shared() {
        let a = TemplateRegistry::global();
        let b = TemplateRegistry::global();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a, &TemplateRegistry::new());
    }
}
