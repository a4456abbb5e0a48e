//! Configuration module

use crate::error::CliError;
use anyhow::Result;
use langsniff_core::ClassifierConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Scoring and selection tunables
    #[serde(default)]
    pub classifier: ClassifierConfig,

    /// Installed spell-checking dictionaries
    #[serde(default)]
    pub dictionaries: DictionariesConfig,

    /// Where stopword profiles come from
    #[serde(default)]
    pub profiles: ProfilesConfig,
}

/// Dictionary availability
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct DictionariesConfig {
    /// Names of installed dictionaries. Unset means every dictionary is
    /// considered installed.
    #[serde(default)]
    pub available: Option<Vec<String>>,
}

/// Profile sources
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProfilesConfig {
    /// Load the built-in profiles
    #[serde(default = "default_builtin")]
    pub builtin: bool,

    /// Extra profile files, relative to the config file
    #[serde(default)]
    pub paths: Vec<PathBuf>,
}

fn default_builtin() -> bool {
    true
}

impl Default for ProfilesConfig {
    fn default() -> Self {
        Self {
            builtin: true,
            paths: Vec::new(),
        }
    }
}

impl CliConfig {
    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|_| CliError::FileNotFound(path.display().to_string()))?;

        let mut config: CliConfig = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;

        config
            .classifier
            .validate()
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;

        if let Some(dir) = path.parent() {
            for profile in &mut config.profiles.paths {
                if profile.is_relative() {
                    *profile = dir.join(&*profile);
                }
            }
        }

        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.classifier, ClassifierConfig::default());
        assert!(config.dictionaries.available.is_none());
        assert!(config.profiles.builtin);
        assert!(config.profiles.paths.is_empty());
    }

    #[test]
    fn test_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("langsniff.toml");
        fs::write(
            &path,
            r#"
[classifier]
min_matches = 3

[dictionaries]
available = ["american", "deutsch8"]

[profiles]
paths = ["extra/latin.toml"]
"#,
        )
        .unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.classifier.min_matches, 3);
        assert_eq!(config.classifier.required_confidence_margin, 2.0);
        assert_eq!(
            config.dictionaries.available,
            Some(vec!["american".to_string(), "deutsch8".to_string()])
        );
        assert!(config.profiles.builtin);
        assert_eq!(config.profiles.paths, vec![dir.path().join("extra/latin.toml")]);
    }

    #[test]
    fn test_invalid_margin_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[classifier]\nrequired_confidence_margin = -1.0\n").unwrap();

        let err = CliConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_missing_file() {
        let err = CliConfig::load(Path::new("/nonexistent/langsniff.toml")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::FileNotFound(_))
        ));
    }
}
