//! CLI command implementations

use clap::Subcommand;

pub mod detect;
pub mod generate_config;
pub mod list;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Classify the language of text files
    Detect(detect::DetectArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Validate a stopword profile file
    Validate(validate::ValidateArgs),

    /// Write a stopword profile template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List the language variants of the registry
    Languages(list::LanguagesArgs),

    /// List available output formats
    Formats,
}
