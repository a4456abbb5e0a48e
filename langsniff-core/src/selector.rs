//! Winner selection
//!
//! Variants are scored, ranked by confidence, and the leader is compared with
//! the best variant of a *different* base language. Comparing against the
//! leader's own sibling variants would let languages with many variants
//! crowd out the real competitor.

use crate::config::ClassifierConfig;
use crate::profile::Registry;
use crate::scoring::confidence;
use crate::verdict::{ClassificationVerdict, VerdictStatus};

/// Score of one variant for one window
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub variant_id: String,
    pub base_language: String,
    /// Stopword occurrences found
    pub raw_count: usize,
    /// Ranking score, `0.0` meaning no evidence
    pub confidence: f64,
    /// Copied from the variant so the verdict can report it
    pub dictionary_available: bool,
}

/// Score every registered variant, in registry order
pub fn score_all(
    window: &str,
    total_word_count: usize,
    registry: &Registry,
    config: &ClassifierConfig,
) -> Vec<MatchResult> {
    registry
        .variants()
        .iter()
        .map(|variant| {
            // Nothing can score without words; skip the scan.
            let raw_count = if total_word_count == 0 {
                0
            } else {
                variant.matcher.count(window)
            };

            MatchResult {
                variant_id: variant.variant_id.clone(),
                base_language: variant.base_language.clone(),
                raw_count,
                confidence: confidence(raw_count, total_word_count, config),
                dictionary_available: variant.dictionary_available,
            }
        })
        .collect()
}

/// Sort by confidence, highest first
///
/// The sort is stable, so equal scores keep registry order and the specific
/// variant of a base language stays ahead of its fallback.
pub fn rank(mut results: Vec<MatchResult>) -> Vec<MatchResult> {
    results.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    results
}

/// First entry after the leader's run of same-base entries
pub fn runner_up(ranked: &[MatchResult]) -> Option<&MatchResult> {
    let leader = ranked.first()?;
    ranked
        .iter()
        .skip(1)
        .find(|r| r.base_language != leader.base_language)
}

/// Decide the verdict from a ranked list
pub fn select(ranked: &[MatchResult], config: &ClassifierConfig) -> ClassificationVerdict {
    let Some(winner) = ranked.first() else {
        return ClassificationVerdict::no_winner();
    };

    if winner.confidence == 0.0 {
        return ClassificationVerdict::no_winner();
    }

    let second = runner_up(ranked).map_or(0.0, |r| r.confidence);

    let status = if second == 0.0 || winner.confidence / second > config.required_confidence_margin
    {
        VerdictStatus::Confident
    } else {
        VerdictStatus::Tentative
    };

    log::debug!(
        "{:?}: {} ({}) {:.4} vs runner-up {:.4}",
        status,
        winner.base_language,
        winner.variant_id,
        winner.confidence,
        second
    );

    ClassificationVerdict {
        status,
        winning_base_language: winner.base_language.clone(),
        winning_variant_id: winner.variant_id.clone(),
        dictionary_available: winner.dictionary_available,
    }
}
