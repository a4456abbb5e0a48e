//! Stopword profiles
//!
//! A profile describes one base language and its spelling/encoding variants.
//! Profiles are parsed from TOML, compiled into matchers once, and collected
//! into a [`Registry`] that the selector walks on every classification run.

pub mod config;
pub mod dictionary;
pub mod loader;
pub mod matcher;
pub mod registry;

pub use config::{CommonWords, ProfileConfig, ProfileMetadata, VariantConfig};
pub use dictionary::{AllDictionaries, DictionaryLookup, NoDictionaries};
pub use loader::{builtin_profiles, load_profile_file, load_profile_str};
pub use matcher::StopwordMatcher;
pub use registry::{LanguageVariant, Registry, RegistryBuilder};
