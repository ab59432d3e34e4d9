//! Trait description entity - A templated description plus its tier data
//!
//! This is the record handed over by the data-fetching side: a trait or
//! ability name, its raw description template, and the ordered tiers whose
//! values fill the template. Both the template and the tiers may be missing
//! in the source data.

use serde::{Deserialize, Serialize};

use super::TierEffect;

/// A trait or ability with its description template and tier effects
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitDescription {
    /// Internal identifier, e.g. `Set10_Bruiser`
    #[serde(default)]
    pub api_name: Option<String>,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Raw description template
    #[serde(default)]
    pub desc: Option<String>,
    /// Tiers from lowest to highest unit count, in data order
    #[serde(default)]
    pub effects: Option<Vec<TierEffect>>,
}

impl TraitDescription {
    pub fn new(name: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            desc: Some(desc.into()),
            ..Self::default()
        }
    }

    pub fn with_effect(mut self, effect: TierEffect) -> Self {
        self.effects.get_or_insert_with(Vec::new).push(effect);
        self
    }

    /// The description template, if present
    pub fn template(&self) -> Option<&str> {
        self.desc.as_deref()
    }

    /// The tier effects, if present
    pub fn tiers(&self) -> Option<&[TierEffect]> {
        self.effects.as_deref()
    }

    /// Label used when listing traits: the display name, else the api name
    pub fn display_name(&self) -> &str {
        if !self.name.is_empty() {
            return &self.name;
        }
        self.api_name.as_deref().unwrap_or_default()
    }
}
