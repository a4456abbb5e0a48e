//! Profile file schema and validation
//!
//! This module defines the TOML schema for a stopword profile.

use crate::error::ProfileError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Root profile configuration, one per base language
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub metadata: ProfileMetadata,
    #[serde(default)]
    pub common: CommonWords,
    pub variants: Vec<VariantConfig>,
}

/// Profile metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileMetadata {
    /// Grouping key shared by all variants, e.g. "german"
    pub base_language: String,
    /// Human readable name
    #[serde(default)]
    pub name: String,
}

/// Words shared by every variant of the profile
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommonWords {
    #[serde(default)]
    pub words: Vec<String>,
}

/// One spelling or encoding variant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantConfig {
    /// Unique variant id, e.g. "deutsch8"
    pub id: String,
    /// Variant kind within the base language, e.g. "extended"
    pub kind: String,
    /// Dictionary name handed to the spell checker; defaults to `id`
    #[serde(default)]
    pub dictionary: Option<String>,
    /// Marks the plain member of the group, which sorts last on ties
    #[serde(default)]
    pub fallback: bool,
    #[serde(default)]
    pub words: Vec<String>,
}

impl VariantConfig {
    /// Dictionary name, falling back to the variant id
    pub fn dictionary_name(&self) -> &str {
        self.dictionary.as_deref().unwrap_or(&self.id)
    }
}

impl ProfileConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), ProfileError> {
        let base = self.metadata.base_language.trim();
        if base.is_empty() {
            return Err(self.invalid("base_language must not be empty"));
        }

        if self.variants.is_empty() {
            return Err(self.invalid("no variants defined"));
        }

        let mut ids = HashSet::new();
        let mut kinds = HashSet::new();
        for variant in &self.variants {
            if variant.id.trim().is_empty() {
                return Err(self.invalid("variant id must not be empty"));
            }
            if variant.kind.trim().is_empty() {
                return Err(self.invalid(&format!("variant '{}' has no kind", variant.id)));
            }
            if !ids.insert(variant.id.as_str()) {
                return Err(self.invalid(&format!("variant id '{}' repeated", variant.id)));
            }
            if !kinds.insert(variant.kind.as_str()) {
                return Err(self.invalid(&format!("variant kind '{}' repeated", variant.kind)));
            }
        }

        if self.variants.iter().filter(|v| v.fallback).count() > 1 {
            return Err(self.invalid("more than one fallback variant"));
        }

        Ok(())
    }

    /// Word-list for a variant: common words followed by the variant's own
    pub fn word_list(&self, variant: &VariantConfig) -> Vec<String> {
        self.common
            .words
            .iter()
            .chain(variant.words.iter())
            .map(|w| w.trim().to_string())
            .filter(|w| !w.is_empty())
            .collect()
    }

    fn invalid(&self, reason: &str) -> ProfileError {
        ProfileError::Invalid {
            profile: self.metadata.base_language.clone(),
            reason: reason.to_string(),
        }
    }
}
