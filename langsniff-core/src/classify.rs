//! Stateless classification entry point

use crate::config::ClassifierConfig;
use crate::profile::Registry;
use crate::selector::{rank, score_all, select, MatchResult};
use crate::verdict::ClassificationVerdict;

/// Classify a text window against every registered variant
///
/// `total_word_count` is the host's word count for the same window. The call
/// is total: an empty window, an empty registry or empty word-lists all give
/// a `NoWinner` verdict.
pub fn classify(
    window: &str,
    total_word_count: usize,
    registry: &Registry,
    config: &ClassifierConfig,
) -> ClassificationVerdict {
    select(&ranked_scores(window, total_word_count, registry, config), config)
}

/// Scores for every variant, highest confidence first
pub fn ranked_scores(
    window: &str,
    total_word_count: usize,
    registry: &Registry,
    config: &ClassifierConfig,
) -> Vec<MatchResult> {
    rank(score_all(window, total_word_count, registry, config))
}
