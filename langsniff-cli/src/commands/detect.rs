//! Detect command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::profile_source::SourceArgs;
use crate::progress::ProgressReporter;
use crate::report::FileReport;
use crate::window::WindowPolicy;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use langsniff_core::{ClassifierConfig, Session};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the detect command
#[derive(Debug, Args)]
pub struct DetectArgs {
    /// Input files or glob patterns
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// How each file is cut into classification windows
    #[arg(short, long, value_enum, default_value = "whole")]
    pub window: WindowMode,

    /// Character index the radius window is centred on
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub point: usize,

    /// Characters on each side of the point for the radius window
    #[arg(long, value_name = "N", default_value_t = 2000)]
    pub radius: usize,

    /// Minimum stopword hits before a variant scores at all
    #[arg(long, value_name = "N")]
    pub min_matches: Option<usize>,

    /// Winner/runner-up ratio required for a confident verdict
    #[arg(long, value_name = "RATIO")]
    pub margin: Option<f64>,

    /// List the stopwords of the winning variant found in each window
    #[arg(long)]
    pub show_matches: bool,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per window
    Text,
    /// JSON array of file reports
    Json,
    /// Markdown tables
    Markdown,
}

/// Window selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WindowMode {
    /// Whole file
    Whole,
    /// Each blank-line separated paragraph, classified in order
    Paragraph,
    /// Characters around --point
    Radius,
}

impl DetectArgs {
    /// Execute the detect command
    pub fn execute(&self, quiet: bool) -> Result<()> {
        let (cli_config, source) = self.source.resolve()?;
        let config = self.classifier_config(&cli_config)?;
        let registry = Arc::new(source.build_registry()?);

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} files to classify", files.len());

        let policy = self.window_policy();
        let mut progress = ProgressReporter::new(quiet);
        progress.init_files(files.len() as u64);

        let reports = files
            .par_iter()
            .map(|path| -> Result<FileReport> {
                let name = path.display().to_string();
                let text = FileReader::read_text(path)?;
                let windows = policy.windows(&text);

                let mut session = Session::new(Arc::clone(&registry), config);
                let report = FileReport::build(&name, &windows, &mut session, self.show_matches);

                log::debug!(
                    "{name}: {} windows, final verdict {}",
                    report.windows.len(),
                    report
                        .final_verdict()
                        .map_or_else(|| "default".to_string(), ToString::to_string)
                );
                progress.file_completed(&name);
                Ok(report)
            })
            .collect::<Result<Vec<_>>>()?;
        progress.finish();

        let mut formatter = self.create_formatter()?;
        for report in &reports {
            formatter.format_file(report)?;
        }
        formatter.finish()?;

        Ok(())
    }

    /// Config file values overridden by command-line flags
    pub fn classifier_config(&self, cli_config: &CliConfig) -> Result<ClassifierConfig> {
        let base = cli_config.classifier;
        let config = ClassifierConfig::builder()
            .min_matches(self.min_matches.unwrap_or(base.min_matches))
            .required_confidence_margin(self.margin.unwrap_or(base.required_confidence_margin))
            .confidence_scale_constant(base.confidence_scale_constant)
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(config)
    }

    /// Window policy selected by --window
    pub fn window_policy(&self) -> WindowPolicy {
        match self.window {
            WindowMode::Whole => WindowPolicy::Whole,
            WindowMode::Paragraph => WindowPolicy::Paragraphs,
            WindowMode::Radius => WindowPolicy::Radius {
                point: self.point,
                radius: self.radius,
            },
        }
    }

    fn create_formatter(&self) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        let formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        };
        Ok(formatter)
    }
}
