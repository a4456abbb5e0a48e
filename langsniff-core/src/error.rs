//! Layered error types
//!
//! Classification itself is total and never returns an error. Errors only
//! arise while loading profiles or validating configuration, before any
//! window is classified.

use thiserror::Error;

/// Errors raised while loading or assembling stopword profiles
#[derive(Error, Debug)]
pub enum ProfileError {
    /// Profile file could not be read
    #[error("failed to read profile {path}: {source}")]
    Io {
        /// Path of the profile file
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Profile text is not valid TOML for the profile schema
    #[error("failed to parse profile: {0}")]
    Parse(#[from] toml::de::Error),

    /// Profile parsed but violates a structural rule
    #[error("invalid profile '{profile}': {reason}")]
    Invalid {
        /// Base language of the offending profile (may be empty)
        profile: String,
        /// What is wrong with it
        reason: String,
    },

    /// The same variant id was registered twice
    #[error("duplicate variant id '{variant_id}'")]
    DuplicateVariant {
        /// The id that collided
        variant_id: String,
    },

    /// Two variants of one base language share a kind
    #[error("duplicate kind '{kind}' for base language '{base_language}'")]
    DuplicateKind {
        /// Base language of the group
        base_language: String,
        /// The kind that collided
        kind: String,
    },

    /// More than one variant of a base language is marked as fallback
    #[error("base language '{base_language}' has more than one fallback variant")]
    MultipleFallbacks {
        /// Base language of the group
        base_language: String,
    },
}

/// Errors raised by classifier configuration validation
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    /// Confidence margin must be a finite positive number
    #[error("required confidence margin must be finite and positive, got {0}")]
    InvalidMargin(f64),

    /// Scale constant must be a finite positive number
    #[error("confidence scale constant must be finite and positive, got {0}")]
    InvalidScale(f64),
}

/// Top-level error for the crate
#[derive(Error, Debug)]
pub enum Error {
    /// Profile loading error
    #[error(transparent)]
    Profile(#[from] ProfileError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for profile operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_error_display() {
        let err = ProfileError::Invalid {
            profile: "german".to_string(),
            reason: "no variants defined".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid profile 'german': no variants defined"
        );

        let dup = ProfileError::DuplicateVariant {
            variant_id: "deutsch8".to_string(),
        };
        assert_eq!(dup.to_string(), "duplicate variant id 'deutsch8'");

        let kind = ProfileError::DuplicateKind {
            base_language: "english".to_string(),
            kind: "american".to_string(),
        };
        assert_eq!(
            kind.to_string(),
            "duplicate kind 'american' for base language 'english'"
        );

        let fallbacks = ProfileError::MultipleFallbacks {
            base_language: "german".to_string(),
        };
        assert_eq!(
            fallbacks.to_string(),
            "base language 'german' has more than one fallback variant"
        );
    }

    #[test]
    fn test_config_error_converts_into_crate_error() {
        let err: Error = ConfigError::InvalidMargin(-1.0).into();
        assert!(matches!(err, Error::Config(ConfigError::InvalidMargin(_))));
        assert!(err.to_string().contains("-1"));
    }
}
