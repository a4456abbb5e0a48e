//! Compiled stopword matcher
//!
//! Each variant's word-list is compiled into a single alternation so that one
//! physical occurrence is counted once, even when several listed words overlap
//! (e.g. "in" and "in der"). Matching is case-sensitive and anchored on word
//! boundaries.

use regex::Regex;
use std::collections::HashSet;
use std::ops::Range;

/// Counts stopword occurrences for one variant
#[derive(Debug, Clone)]
pub struct StopwordMatcher {
    /// `None` when the word-list was empty or failed to compile
    pattern: Option<Regex>,
    word_count: usize,
}

impl StopwordMatcher {
    /// Compile a matcher from literal stopwords
    ///
    /// Empty entries are ignored. A list that ends up empty, or that the regex
    /// engine refuses, produces a matcher that never matches.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut unique: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_string())
            .filter(|w| !w.is_empty())
            .filter(|w| seen.insert(w.clone()))
            .collect();

        if unique.is_empty() {
            return Self::never();
        }

        // Leftmost-first alternation: longer words must be tried first.
        unique.sort_by(|a, b| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        });

        let alternation = unique
            .iter()
            .map(|w| anchored(w))
            .collect::<Vec<_>>()
            .join("|");

        match Regex::new(&format!("(?:{alternation})")) {
            Ok(pattern) => Self {
                pattern: Some(pattern),
                word_count: unique.len(),
            },
            Err(e) => {
                log::warn!("stopword list of {} words failed to compile: {e}", unique.len());
                Self::never()
            }
        }
    }

    /// A matcher that never matches
    pub fn never() -> Self {
        Self {
            pattern: None,
            word_count: 0,
        }
    }

    /// Number of distinct words compiled into the matcher
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// True when the matcher cannot match anything
    pub fn is_empty(&self) -> bool {
        self.pattern.is_none()
    }

    /// Count non-overlapping stopword occurrences in `window`
    pub fn count(&self, window: &str) -> usize {
        match &self.pattern {
            Some(pattern) => pattern.find_iter(window).count(),
            None => 0,
        }
    }

    /// Byte ranges of the occurrences counted by [`count`](Self::count)
    pub fn find_iter<'a>(&'a self, window: &'a str) -> impl Iterator<Item = Range<usize>> + 'a {
        self.pattern
            .iter()
            .flat_map(move |pattern| pattern.find_iter(window).map(|m| m.range()))
    }
}

/// Escape a word and add `\b` on each side that starts or ends with a word char
fn anchored(word: &str) -> String {
    let is_word_char = |c: char| c.is_alphanumeric() || c == '_';
    let lead = word.chars().next().is_some_and(is_word_char);
    let tail = word.chars().last().is_some_and(is_word_char);

    format!(
        "{}{}{}",
        if lead { r"\b" } else { "" },
        regex::escape(word),
        if tail { r"\b" } else { "" }
    )
}
