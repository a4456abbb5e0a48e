//! Confidence scoring
//!
//! The score is a density, `K * hits / sqrt(words)`, used only for ranking.
//! With the default `K = sqrt(2) / 10` a window where every word is a hit
//! approaches 1 as it grows.

use crate::config::ClassifierConfig;

/// Confidence for `raw_count` stopword hits in a window of `total_word_count` words
///
/// Returns `0.0` when the count is below `min_matches` (a single stray hit must
/// never win) or when the window has no words.
#[inline]
pub fn confidence(raw_count: usize, total_word_count: usize, config: &ClassifierConfig) -> f64 {
    if raw_count < config.min_matches || total_word_count == 0 {
        return 0.0;
    }

    config.confidence_scale_constant * (raw_count as f64 / (total_word_count as f64).sqrt())
}
