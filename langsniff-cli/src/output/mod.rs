//! Output formatting module

use crate::report::FileReport;
use anyhow::Result;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the verdicts of one file
    fn format_file(&mut self, report: &FileReport) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Suffix flagging a confident winner the spell checker cannot follow
pub(crate) fn dictionary_note(verdict: &langsniff_core::ClassificationVerdict) -> &'static str {
    if verdict.is_confident() && !verdict.dictionary_available {
        " (no dictionary)"
    } else {
        ""
    }
}
