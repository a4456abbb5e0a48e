//! Markdown output formatter

use super::{dictionary_note, OutputFormatter};
use crate::report::FileReport;
use anyhow::Result;
use langsniff_core::VerdictStatus;
use std::io::Write;

/// Markdown formatter - one table per file
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    file_count: usize,
    window_count: usize,
    confident_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            file_count: 0,
            window_count: 0,
            confident_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_file(&mut self, report: &FileReport) -> Result<()> {
        self.file_count += 1;

        writeln!(self.writer, "## {}", report.path)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| # | Offset | Words | Verdict | Status | Transition |")?;
        writeln!(self.writer, "|---|--------|-------|---------|--------|------------|")?;

        for window in &report.windows {
            self.window_count += 1;
            if window.verdict.status == VerdictStatus::Confident {
                self.confident_count += 1;
            }

            let status = match window.verdict.status {
                VerdictStatus::Confident => "confident",
                VerdictStatus::Tentative => "tentative",
                VerdictStatus::NoWinner => "none",
            };
            writeln!(
                self.writer,
                "| {} | {} | {} | {}{} | {} | {} |",
                window.index,
                window.offset,
                window.word_count,
                window.verdict,
                dictionary_note(&window.verdict),
                status,
                window.transition
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Files: {}, windows: {}, confident: {}*",
            self.file_count, self.window_count, self.confident_count
        )?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::WindowReport;
    use langsniff_core::{ClassificationVerdict, Transition};

    #[test]
    fn test_table_and_totals() {
        let report = FileReport {
            path: "notes.txt".to_string(),
            windows: vec![WindowReport {
                index: 1,
                offset: 0,
                length: 40,
                word_count: 9,
                verdict: ClassificationVerdict {
                    status: VerdictStatus::Confident,
                    winning_base_language: "english".to_string(),
                    winning_variant_id: "american".to_string(),
                    dictionary_available: true,
                },
                transition: Transition::Switched,
                matches: Vec::new(),
            }],
        };

        let mut out = Vec::new();
        {
            let mut formatter = MarkdownFormatter::new(&mut out);
            formatter.format_file(&report).unwrap();
            formatter.finish().unwrap();
        }
        let output = String::from_utf8(out).unwrap();

        assert!(output.starts_with("## notes.txt\n"));
        assert!(output.contains("| 1 | 0 | 9 | english (american) | confident | switched |"));
        assert!(output.contains("*Files: 1, windows: 1, confident: 1*"));
    }
}
