//! Profile and dictionary sources for the CLI

use crate::config::CliConfig;
use crate::error::CliError;
use anyhow::Result;
use clap::Args;
use langsniff_core::profile::{builtin_profiles, load_profile_file};
use langsniff_core::{AllDictionaries, Registry};
use std::collections::HashSet;
use std::path::PathBuf;

/// Everything needed to build the registry
#[derive(Debug, Clone)]
pub struct ProfileSource {
    /// Include the embedded profiles
    pub builtin: bool,
    /// External profile files, loaded after the built-ins
    pub files: Vec<PathBuf>,
    /// Installed dictionaries; `None` treats every dictionary as installed
    pub dictionaries: Option<Vec<String>>,
}

/// Command-line options selecting profiles, dictionaries and a config file
#[derive(Debug, Clone, Default, Args)]
pub struct SourceArgs {
    /// Configuration file with [classifier], [dictionaries] and [profiles]
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Extra stopword profile file (repeatable)
    #[arg(short, long = "profile", value_name = "FILE")]
    pub profiles: Vec<PathBuf>,

    /// Load the built-in profiles (default)
    #[arg(long, overrides_with = "no_builtin")]
    pub builtin: bool,

    /// Skip the built-in profiles
    #[arg(long, overrides_with = "builtin")]
    pub no_builtin: bool,

    /// Installed dictionaries, comma separated; all are assumed installed if omitted
    #[arg(short, long, value_name = "NAMES", value_delimiter = ',')]
    pub dictionaries: Option<Vec<String>>,
}

impl SourceArgs {
    /// Load the config file, if any, and apply the command-line overrides
    pub fn resolve(&self) -> Result<(CliConfig, ProfileSource)> {
        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        let mut source = ProfileSource::from_config(&config);
        if self.builtin {
            source.builtin = true;
        } else if self.no_builtin {
            source.builtin = false;
        }
        source.files.extend(self.profiles.iter().cloned());
        if let Some(names) = &self.dictionaries {
            source.dictionaries = Some(names.clone());
        }

        Ok((config, source))
    }
}

impl ProfileSource {
    /// Start from the `[profiles]` and `[dictionaries]` tables of a config
    pub fn from_config(config: &CliConfig) -> Self {
        Self {
            builtin: config.profiles.builtin,
            files: config.profiles.paths.clone(),
            dictionaries: config.dictionaries.available.clone(),
        }
    }

    /// Short description of where profiles come from
    pub fn display_name(&self) -> String {
        let mut parts = Vec::new();
        if self.builtin {
            parts.push("built-in".to_string());
        }
        parts.extend(self.files.iter().map(|p| p.display().to_string()));

        if parts.is_empty() {
            "none".to_string()
        } else {
            parts.join(", ")
        }
    }

    /// Load the profiles and resolve dictionary availability
    pub fn build_registry(&self) -> Result<Registry> {
        let mut builder = Registry::builder();

        if self.builtin {
            for profile in builtin_profiles() {
                builder = builder
                    .profile(profile)
                    .map_err(|e| CliError::ProfileError(e.to_string()))?;
            }
        }

        for path in &self.files {
            let profile = load_profile_file(path)
                .map_err(|e| CliError::ProfileError(format!("{}: {e}", path.display())))?;
            builder = builder
                .profile(&profile)
                .map_err(|e| CliError::ProfileError(format!("{}: {e}", path.display())))?;
        }

        let registry = match &self.dictionaries {
            Some(names) => {
                let installed: HashSet<String> = names.iter().cloned().collect();
                builder.build(&installed)
            }
            None => builder.build(&AllDictionaries),
        }
        .map_err(|e| CliError::ProfileError(e.to_string()))?;

        if registry.is_empty() {
            return Err(CliError::ProfileError("no stopword profiles loaded".to_string()).into());
        }

        log::info!(
            "loaded {} variants from {}",
            registry.len(),
            self.display_name()
        );
        Ok(registry)
    }
}
