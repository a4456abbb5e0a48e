//! Plain text output formatter

use super::{dictionary_note, OutputFormatter};
use crate::report::{FileReport, WindowReport};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - one line per window
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_matches(&mut self, window: &WindowReport) -> Result<()> {
        if !window.matches.is_empty() {
            let words: Vec<&str> = window.matches.iter().map(|m| m.word.as_str()).collect();
            writeln!(self.writer, "    matches: {}", words.join(", "))?;
        }
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_file(&mut self, report: &FileReport) -> Result<()> {
        if let [window] = report.windows.as_slice() {
            writeln!(
                self.writer,
                "{}: {}{}",
                report.path,
                window.verdict,
                dictionary_note(&window.verdict)
            )?;
            return self.write_matches(window);
        }

        writeln!(self.writer, "{}:", report.path)?;
        for window in &report.windows {
            let marker = if window.changed() {
                format!("  <- {}", window.transition)
            } else {
                String::new()
            };
            writeln!(
                self.writer,
                "  #{} @{} ({} words): {}{}{}",
                window.index,
                window.offset,
                window.word_count,
                window.verdict,
                dictionary_note(&window.verdict),
                marker
            )?;
            self.write_matches(window)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::MatchedWord;
    use langsniff_core::{ClassificationVerdict, Transition, VerdictStatus};

    fn window(index: usize, status: VerdictStatus, transition: Transition) -> WindowReport {
        WindowReport {
            index,
            offset: 0,
            length: 10,
            word_count: 12,
            verdict: ClassificationVerdict {
                status,
                winning_base_language: "german".to_string(),
                winning_variant_id: "deutsch8".to_string(),
                dictionary_available: false,
            },
            transition,
            matches: Vec::new(),
        }
    }

    fn render(report: &FileReport) -> String {
        let mut out = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut out);
            formatter.format_file(report).unwrap();
            formatter.finish().unwrap();
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_single_window_is_one_line() {
        let mut w = window(1, VerdictStatus::Confident, Transition::Switched);
        w.matches = vec![
            MatchedWord {
                word: "für".to_string(),
                offset: 0,
            },
            MatchedWord {
                word: "die".to_string(),
                offset: 4,
            },
        ];
        let report = FileReport {
            path: "a.txt".to_string(),
            windows: vec![w],
        };

        assert_eq!(
            render(&report),
            "a.txt: german (deutsch8) (no dictionary)\n    matches: für, die\n"
        );
    }

    #[test]
    fn test_windows_mark_transitions() {
        let report = FileReport {
            path: "a.txt".to_string(),
            windows: vec![
                window(1, VerdictStatus::Confident, Transition::Switched),
                window(2, VerdictStatus::Tentative, Transition::Unchanged),
            ],
        };

        let output = render(&report);
        assert!(output.starts_with("a.txt:\n"));
        assert!(output.contains("#1 @0 (12 words): german (deutsch8) (no dictionary)  <- switched"));
        assert!(output.contains("#2 @0 (12 words): [german]\n"));
    }
}
