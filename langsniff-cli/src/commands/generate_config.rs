//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Base language of the new profile
    #[arg(short = 'b', long, value_name = "BASE", required = true)]
    pub base_language: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating stopword profile template...");
        println!("  Base language: {}", self.base_language);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Profile template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Replace the example words with the most frequent words of the language");
        println!("2. Validate your profile:");
        println!("   langsniff validate --profile {}", self.output.display());
        println!("3. Use it for detection:");
        println!(
            "   langsniff detect -i input.txt --profile {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template profile content
    fn generate_template(&self) -> String {
        let base = &self.base_language;
        format!(
            r#"# Stopword profile for {base}

[metadata]
base_language = "{base}"
name = "Custom Language"

# Words shared by every variant. Use short, frequent function words:
# articles, conjunctions, prepositions, pronouns. Matching is
# case-sensitive and whole-word.
[common]
words = ["and", "the", "of"]

# One entry per spelling or encoding variant. The variant marked
# fallback = true sorts last within the language, so a more specific
# variant wins ties.
[[variants]]
id = "{base}"
kind = "standard"
# Dictionary handed to the spell checker; defaults to the id
# dictionary = "{base}"
fallback = true
words = []

# [[variants]]
# id = "{base}-ascii"
# kind = "ascii"
# words = []
"#
        )
    }
}
