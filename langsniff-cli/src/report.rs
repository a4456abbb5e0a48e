//! Detection results handed to the output formatters

use langsniff_core::{ClassificationVerdict, Registry, Session, Transition, VerdictStatus};
use serde::{Deserialize, Serialize};

use crate::window::Window;

/// A stopword hit of the winning variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedWord {
    pub word: String,
    /// Byte offset in the document
    pub offset: usize,
}

/// Verdict for one window of a file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowReport {
    pub index: usize,
    pub offset: usize,
    pub length: usize,
    pub word_count: usize,
    pub verdict: ClassificationVerdict,
    pub transition: Transition,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub matches: Vec<MatchedWord>,
}

impl WindowReport {
    /// True when the session switched language or fell back at this window
    pub fn changed(&self) -> bool {
        self.transition != Transition::Unchanged
    }
}

/// All windows of one input file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileReport {
    pub path: String,
    pub windows: Vec<WindowReport>,
}

impl FileReport {
    /// Classify every window of a file with one session
    pub fn build(
        path: &str,
        windows: &[Window<'_>],
        session: &mut Session,
        show_matches: bool,
    ) -> Self {
        let windows = windows
            .iter()
            .enumerate()
            .map(|(index, window)| {
                let update = session.classify(window.text, window.word_count);
                let matches = if show_matches {
                    winning_matches(session.registry(), &update.verdict, window)
                } else {
                    Vec::new()
                };

                WindowReport {
                    index: index + 1,
                    offset: window.offset,
                    length: window.text.len(),
                    word_count: window.word_count,
                    verdict: update.verdict,
                    transition: update.transition,
                    matches,
                }
            })
            .collect();

        Self {
            path: path.to_string(),
            windows,
        }
    }

    /// Verdict of the last window, which is where the session ends up
    pub fn final_verdict(&self) -> Option<&ClassificationVerdict> {
        self.windows.last().map(|w| &w.verdict)
    }

    /// Count windows per verdict status: (confident, tentative, no winner)
    pub fn status_counts(&self) -> (usize, usize, usize) {
        self.windows
            .iter()
            .fold((0, 0, 0), |(c, t, n), w| match w.verdict.status {
                VerdictStatus::Confident => (c + 1, t, n),
                VerdictStatus::Tentative => (c, t + 1, n),
                VerdictStatus::NoWinner => (c, t, n + 1),
            })
    }
}

fn winning_matches(
    registry: &Registry,
    verdict: &ClassificationVerdict,
    window: &Window<'_>,
) -> Vec<MatchedWord> {
    let Some(variant) = registry.get(&verdict.winning_variant_id) else {
        return Vec::new();
    };

    variant
        .matcher
        .find_iter(window.text)
        .map(|range| MatchedWord {
            word: window.text[range.clone()].to_string(),
            offset: window.offset + range.start,
        })
        .collect()
}
