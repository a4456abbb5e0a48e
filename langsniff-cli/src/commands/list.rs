//! List command implementation

use crate::profile_source::SourceArgs;
use anyhow::Result;
use clap::Args;
use langsniff_core::Registry;
use std::io::{self, Write};

/// Arguments for `list languages`
#[derive(Debug, Args)]
pub struct LanguagesArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

impl LanguagesArgs {
    /// Print every variant of the registry in selection order
    pub fn execute(&self) -> Result<()> {
        let (_, source) = self.source.resolve()?;
        let registry = source.build_registry()?;

        println!("Profiles: {}", source.display_name());
        println!();
        write_languages(&mut io::stdout(), &registry)?;
        Ok(())
    }
}

/// Tabulate the registry: base, variant, kind, dictionary, word count
pub fn write_languages<W: Write>(writer: &mut W, registry: &Registry) -> Result<()> {
    writeln!(
        writer,
        "{:<12} {:<12} {:<10} {:<14} {:>6}",
        "BASE", "VARIANT", "KIND", "DICTIONARY", "WORDS"
    )?;

    for variant in registry.variants() {
        let dictionary = if variant.dictionary_available {
            variant.dictionary.clone()
        } else {
            format!("{} (missing)", variant.dictionary)
        };
        let fallback = if variant.fallback { "  fallback" } else { "" };

        writeln!(
            writer,
            "{:<12} {:<12} {:<10} {:<14} {:>6}{}",
            variant.base_language,
            variant.variant_id,
            variant.kind,
            dictionary,
            variant.matcher.word_count(),
            fallback
        )?;
    }
    Ok(())
}

/// Print the output formats accepted by `detect --format`
pub fn print_formats() {
    println!("Available output formats:");
    println!("  text     - One verdict per window (default)");
    println!("  json     - JSON array of file reports");
    println!("  markdown - Markdown table per file");
}
