//! Stopword-based natural language classification
//!
//! This crate decides which natural language a text window is written in by
//! counting stopword hits per language variant, turning the counts into a
//! confidence score, and accepting the leading base language only when it
//! beats the best competing base language by a configurable margin.
//!
//! # Architecture
//!
//! - **Profiles**: TOML stopword lists compiled into one matcher per variant
//!   and collected into an ordered [`Registry`]
//! - **Scoring**: `K * hits / sqrt(words)`, clamped to zero below a minimum
//!   number of hits
//! - **Selection**: rank, collapse same-base variants, compare against the
//!   runner-up base language
//! - **Session**: per-document memory of the last confident winner
//!
//! # Example
//!
//! ```rust
//! use langsniff_core::{ClassifierConfig, Registry, Session};
//! use std::sync::Arc;
//!
//! let registry = Arc::new(Registry::builtin().unwrap());
//! let mut session = Session::new(registry, ClassifierConfig::default());
//!
//! let text = "the cat sat on the mat and looked at the dog";
//! let update = session.classify(text, 11);
//!
//! assert!(update.verdict.is_confident());
//! assert_eq!(update.verdict.winning_base_language, "english");
//! ```

#![warn(missing_docs)]

pub mod classify;
pub mod config;
pub mod error;
#[allow(missing_docs)]
pub mod profile;
pub mod scoring;
#[allow(missing_docs)]
pub mod selector;
pub mod session;
#[allow(missing_docs)]
pub mod verdict;

// Re-export key types
pub use classify::{classify, ranked_scores};
pub use config::{
    ClassifierConfig, ClassifierConfigBuilder, DEFAULT_CONFIDENCE_MARGIN, DEFAULT_MIN_MATCHES,
    DEFAULT_SCALE_CONSTANT,
};
pub use error::{ConfigError, Error, ProfileError, Result};
pub use profile::{
    AllDictionaries, DictionaryLookup, LanguageVariant, NoDictionaries, ProfileConfig, Registry,
    RegistryBuilder, StopwordMatcher,
};
pub use scoring::confidence;
pub use selector::MatchResult;
pub use session::{Session, SessionState, SessionUpdate, Transition};
pub use verdict::{ClassificationVerdict, VerdictStatus};
