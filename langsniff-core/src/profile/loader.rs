//! Profile loader
//!
//! Manages embedded and external stopword profiles.

use crate::error::ProfileError;
use crate::profile::config::ProfileConfig;
use std::path::Path;
use std::sync::OnceLock;

/// Embedded profile sources, in registry order
const EMBEDDED: &[(&str, &str)] = &[
    ("english", include_str!("../../profiles/english.toml")),
    ("german", include_str!("../../profiles/german.toml")),
    ("french", include_str!("../../profiles/french.toml")),
    ("spanish", include_str!("../../profiles/spanish.toml")),
    ("dutch", include_str!("../../profiles/dutch.toml")),
];

static BUILTIN: OnceLock<Vec<ProfileConfig>> = OnceLock::new();

/// Parsed built-in profiles
///
/// Parsed once on first access. A profile that fails to parse is logged and
/// left out rather than aborting the whole table.
pub fn builtin_profiles() -> &'static [ProfileConfig] {
    BUILTIN.get_or_init(|| {
        EMBEDDED
            .iter()
            .filter_map(|(name, source)| match load_profile_str(source) {
                Ok(config) => Some(config),
                Err(e) => {
                    log::warn!("failed to load built-in {name} profile: {e}");
                    None
                }
            })
            .collect()
    })
}

/// Parse and validate a profile from TOML text
pub fn load_profile_str(toml_str: &str) -> Result<ProfileConfig, ProfileError> {
    let config: ProfileConfig = toml::from_str(toml_str)?;
    config.validate()?;
    Ok(config)
}

/// Read, parse and validate a profile file
pub fn load_profile_file(path: impl AsRef<Path>) -> Result<ProfileConfig, ProfileError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ProfileError::Io {
        path: path.display().to_string(),
        source,
    })?;

    log::debug!("loading profile from {}", path.display());
    load_profile_str(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_all_embedded_profiles_parse() {
        let profiles = builtin_profiles();
        assert_eq!(profiles.len(), EMBEDDED.len());

        let bases: Vec<_> = profiles
            .iter()
            .map(|p| p.metadata.base_language.as_str())
            .collect();
        assert_eq!(bases, vec!["english", "german", "french", "spanish", "dutch"]);
    }

    #[test]
    fn test_load_profile_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[metadata]
base_language = "italian"

[[variants]]
id = "italiano"
kind = "standard"
words = ["il", "della", "che"]
"#
        )
        .unwrap();

        let config = load_profile_file(file.path()).unwrap();
        assert_eq!(config.metadata.base_language, "italian");
        assert_eq!(config.variants[0].words.len(), 3);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_profile_file("/nonexistent/profile.toml").unwrap_err();

        assert!(matches!(err, ProfileError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/profile.toml"));
    }

    #[test]
    fn test_parse_error() {
        let err = load_profile_str("[metadata\nbase_language = ").unwrap_err();
        assert!(matches!(err, ProfileError::Parse(_)));
    }

    #[test]
    fn test_structural_error() {
        let err = load_profile_str(
            r#"
variants = []

[metadata]
base_language = "empty"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ProfileError::Invalid { .. }));
    }
}
