//! langsniff command-line entry point

use anyhow::Result;
use clap::Parser;
use langsniff_cli::commands::{Commands, ListCommands};

/// Guess the natural language of text files from stopword statistics
#[derive(Debug, Parser)]
#[command(name = "langsniff", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress progress output and logging
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    log::debug!("Arguments: {:?}", cli);

    match &cli.command {
        Commands::Detect(args) => args.execute(cli.quiet),
        Commands::List { subcommand } => match subcommand {
            ListCommands::Languages(args) => args.execute(),
            ListCommands::Formats => {
                langsniff_cli::commands::list::print_formats();
                Ok(())
            }
        },
        Commands::Validate(args) => args.execute(),
        Commands::GenerateConfig(args) => args.execute(),
    }
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_detect_with_global_flags() {
        let cli = Cli::try_parse_from(["langsniff", "detect", "-i", "a.txt", "-vv", "-q"]).unwrap();

        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Detect(_)));
    }
}
