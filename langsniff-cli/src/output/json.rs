//! JSON output formatter

use super::OutputFormatter;
use crate::report::FileReport;
use anyhow::Result;
use std::io::Write;

/// JSON formatter - outputs file reports as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    reports: Vec<FileReport>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            reports: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_file(&mut self, report: &FileReport) -> Result<()> {
        self.reports.push(report.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.reports)?;
        writeln!(self.writer)?;
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
    fn test_output_parses_back() {
        let report = FileReport {
            path: "empty.txt".to_string(),
            windows: vec![WindowReport {
                index: 1,
                offset: 0,
                length: 0,
                word_count: 0,
                verdict: ClassificationVerdict::no_winner(),
                transition: Transition::Unchanged,
                matches: Vec::new(),
            }],
        };

        let mut out = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut out);
            formatter.format_file(&report).unwrap();
            formatter.format_file(&report).unwrap();
            formatter.finish().unwrap();
        }

        let parsed: Vec<FileReport> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, vec![report.clone(), report]);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\"status\": \"no_winner\""));
    }

    #[test]
    fn test_no_files_is_empty_array() {
        let mut out = Vec::new();
        JsonFormatter::new(&mut out).finish().unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[]\n");
    }
}
