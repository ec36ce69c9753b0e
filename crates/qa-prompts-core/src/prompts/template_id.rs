//! Closed set of template identifiers

use crate::error::PromptError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Identifier selecting one of the builtin question-answering prompts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum TemplateId {
    /// Single free-form instruction sentence
    #[default]
    Basic,
    /// Step-by-step reasoning
    ChainOfThought,
    /// Two worked examples before the question
    FewShot,
    /// Answer in labelled sections
    Structured,
    /// Length and interpretation constraints
    Constrained,
    /// Expert research assistant persona
    RoleBased,
    /// Answer followed by a verification checklist
    SelfVerify,
}

impl TemplateId {
    /// Every identifier, in registry order
    pub const ALL: [TemplateId; 7] = [
        TemplateId::Basic,
        TemplateId::ChainOfThought,
        TemplateId::FewShot,
        TemplateId::Structured,
        TemplateId::Constrained,
        TemplateId::RoleBased,
        TemplateId::SelfVerify,
    ];

    /// Canonical name accepted by `render`
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Basic => "basic",
            TemplateId::ChainOfThought => "cot",
            TemplateId::FewShot => "few_shot",
            TemplateId::Structured => "structured",
            TemplateId::Constrained => "constrained",
            TemplateId::RoleBased => "role",
            TemplateId::SelfVerify => "self_verify",
        }
    }

    /// Look an identifier up by canonical name or long-form alias
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "basic" => Some(TemplateId::Basic),
            "cot" | "chain_of_thought" => Some(TemplateId::ChainOfThought),
            "few_shot" => Some(TemplateId::FewShot),
            "structured" => Some(TemplateId::Structured),
            "constrained" => Some(TemplateId::Constrained),
            "role" | "role_based" => Some(TemplateId::RoleBased),
            "self_verify" => Some(TemplateId::SelfVerify),
            _ => None,
        }
    }

    /// Canonical names of every identifier, in registry order
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(TemplateId::as_str).collect()
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| PromptError::unknown_template(s, Self::names()))
    }
}

impl Serialize for TemplateId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TemplateId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
