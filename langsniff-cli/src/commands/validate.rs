//! Validate command implementation

use anyhow::Result;
use clap::Args;
use langsniff_core::profile::load_profile_file;
use langsniff_core::{NoDictionaries, Registry};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the stopword profile to validate
    #[arg(short = 'c', long = "profile", value_name = "FILE", required = true)]
    pub profile: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating stopword profile: {}", self.profile.display());

        // Building a registry also catches ids repeated across variants
        let result = load_profile_file(&self.profile).and_then(|profile| {
            let registry = Registry::builder().profile(&profile)?.build(&NoDictionaries)?;
            Ok((profile, registry))
        });

        match result {
            Ok((profile, registry)) => {
                println!("✓ Profile is valid!");
                println!("  Base language: {}", profile.metadata.base_language);
                if !profile.metadata.name.is_empty() {
                    println!("  Name: {}", profile.metadata.name);
                }
                for variant in registry.variants() {
                    let empty = if variant.matcher.is_empty() {
                        " (no usable stopwords)"
                    } else {
                        ""
                    };
                    println!(
                        "  Variant: {} [{}] {} words{}",
                        variant.variant_id,
                        variant.kind,
                        variant.matcher.word_count(),
                        empty
                    );
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Profile is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
