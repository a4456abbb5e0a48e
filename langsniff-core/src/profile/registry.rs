//! Language variant registry
//!
//! The registry is the static table the selector walks. Its order matters:
//! variants of one base language are contiguous, and the group's fallback
//! (plain word-list) member comes last so it loses confidence ties against
//! the more specific members.

use crate::error::ProfileError;
use crate::profile::config::ProfileConfig;
use crate::profile::dictionary::{AllDictionaries, DictionaryLookup};
use crate::profile::loader;
use crate::profile::matcher::StopwordMatcher;
use std::collections::HashMap;

/// One stopword profile tied to a base language and a spelling/encoding kind
#[derive(Debug, Clone)]
pub struct LanguageVariant {
    /// Unique id, e.g. "deutsch8"
    pub variant_id: String,
    /// Grouping key, e.g. "german"
    pub base_language: String,
    /// Kind within the base language, e.g. "extended"
    pub kind: String,
    /// Dictionary name the spell checker would load for this variant
    pub dictionary: String,
    /// Plain member of the base-language group
    pub fallback: bool,
    /// Compiled word-list
    pub matcher: StopwordMatcher,
    /// Resolved when the registry is built
    pub dictionary_available: bool,
}

impl LanguageVariant {
    /// Create a variant whose dictionary name is its id
    pub fn new<I, S>(variant_id: &str, base_language: &str, kind: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            variant_id: variant_id.to_string(),
            base_language: base_language.to_string(),
            kind: kind.to_string(),
            dictionary: variant_id.to_string(),
            fallback: false,
            matcher: StopwordMatcher::new(words),
            dictionary_available: false,
        }
    }

    /// Mark this variant as the fallback of its group
    pub fn fallback(mut self) -> Self {
        self.fallback = true;
        self
    }

    /// Use a dictionary name different from the variant id
    pub fn with_dictionary(mut self, dictionary: &str) -> Self {
        self.dictionary = dictionary.to_string();
        self
    }
}

/// Ordered, indexed collection of language variants
#[derive(Debug, Clone, Default)]
pub struct Registry {
    variants: Vec<LanguageVariant>,
    by_id: HashMap<String, usize>,
    by_key: HashMap<(String, String), usize>,
}

impl Registry {
    /// Start building a registry
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Registry of all built-in profiles with every dictionary available
    pub fn builtin() -> Result<Self, ProfileError> {
        Self::builtin_with(&AllDictionaries)
    }

    /// Registry of all built-in profiles checked against `dictionaries`
    pub fn builtin_with(dictionaries: &dyn DictionaryLookup) -> Result<Self, ProfileError> {
        let mut builder = Self::builder();
        for profile in loader::builtin_profiles() {
            builder = builder.profile(profile)?;
        }
        builder.build(dictionaries)
    }

    /// Variants in selection order
    pub fn variants(&self) -> &[LanguageVariant] {
        &self.variants
    }

    /// Number of variants
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// True when no variant is registered
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Look up a variant by id
    pub fn get(&self, variant_id: &str) -> Option<&LanguageVariant> {
        self.by_id.get(variant_id).map(|&i| &self.variants[i])
    }

    /// Look up a variant by base language and kind
    pub fn lookup(&self, base_language: &str, kind: &str) -> Option<&LanguageVariant> {
        self.by_key
            .get(&(base_language.to_string(), kind.to_string()))
            .map(|&i| &self.variants[i])
    }

    /// Distinct base languages in registry order
    pub fn base_languages(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for variant in &self.variants {
            if seen.last() != Some(&variant.base_language.as_str()) {
                seen.push(&variant.base_language);
            }
        }
        seen
    }
}

/// Builder that enforces registry ordering and resolves dictionaries
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    variants: Vec<LanguageVariant>,
}

impl RegistryBuilder {
    /// Add every variant of a profile
    pub fn profile(mut self, config: &ProfileConfig) -> Result<Self, ProfileError> {
        config.validate()?;

        let base = config.metadata.base_language.trim();
        for variant in &config.variants {
            let mut entry = LanguageVariant::new(
                variant.id.trim(),
                base,
                variant.kind.trim(),
                config.word_list(variant),
            )
            .with_dictionary(variant.dictionary_name());
            entry.fallback = variant.fallback;

            if entry.matcher.is_empty() {
                log::warn!("variant '{}' has no usable stopwords", entry.variant_id);
            }
            self.variants.push(entry);
        }
        Ok(self)
    }

    /// Add a single, already constructed variant
    pub fn variant(mut self, variant: LanguageVariant) -> Self {
        self.variants.push(variant);
        self
    }

    /// Order, index and resolve the variants
    pub fn build(self, dictionaries: &dyn DictionaryLookup) -> Result<Registry, ProfileError> {
        // Group by base language in first-appearance order, fallback last.
        let mut groups: Vec<(String, Vec<LanguageVariant>)> = Vec::new();
        for variant in self.variants {
            match groups
                .iter_mut()
                .find(|(base, _)| *base == variant.base_language)
            {
                Some((_, members)) => members.push(variant),
                None => groups.push((variant.base_language.clone(), vec![variant])),
            }
        }

        let mut registry = Registry::default();
        for (base_language, mut members) in groups {
            if members.iter().filter(|v| v.fallback).count() > 1 {
                return Err(ProfileError::MultipleFallbacks { base_language });
            }

            // Stable: keeps insertion order among the specific members.
            members.sort_by_key(|v| v.fallback);

            for mut variant in members {
                if registry.by_id.contains_key(&variant.variant_id) {
                    return Err(ProfileError::DuplicateVariant {
                        variant_id: variant.variant_id,
                    });
                }

                variant.dictionary_available = dictionaries.dictionary_available(&variant.dictionary);

                let key = (variant.base_language.clone(), variant.kind.clone());
                if registry.by_key.contains_key(&key) {
                    return Err(ProfileError::DuplicateKind {
                        base_language: key.0,
                        kind: key.1,
                    });
                }

                let index = registry.variants.len();
                registry.by_id.insert(variant.variant_id.clone(), index);
                registry.by_key.insert(key, index);
                registry.variants.push(variant);
            }
        }

        log::debug!(
            "built registry with {} variants across {} base languages",
            registry.len(),
            registry.base_languages().len()
        );
        Ok(registry)
    }
}
