//! Classification session
//!
//! A session belongs to one document. It remembers the last confident winner
//! so the host can tell a real language switch from a repeat of the same
//! verdict, and only switch dictionaries when something changed.

use crate::classify::classify;
use crate::config::ClassifierConfig;
use crate::profile::Registry;
use crate::verdict::{ClassificationVerdict, VerdictStatus};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Per-document decision memory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Last confident base language; `None` is the "default" language
    pub current_winner_base_language: Option<String>,
    /// Dictionary availability of the stored winner
    pub current_winner_has_dictionary: bool,
    /// Whether the last verdict was confident
    pub has_confidence: bool,
}

impl SessionState {
    /// True when no confident winner is stored
    pub fn is_default(&self) -> bool {
        self.current_winner_base_language.is_none()
    }

    /// Stored base language, or "default"
    pub fn language(&self) -> &str {
        self.current_winner_base_language
            .as_deref()
            .unwrap_or("default")
    }
}

/// How the session state changed during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    /// State is the same as before; nothing to notify
    Unchanged,
    /// A new confident winner, or the same winner with different availability
    Switched,
    /// Fell back from a confident winner to the default
    Reset,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Transition::Unchanged => "unchanged",
            Transition::Switched => "switched",
            Transition::Reset => "reset",
        })
    }
}

/// Verdict plus the state transition it caused
#[derive(Debug, Clone, PartialEq)]
pub struct SessionUpdate {
    /// Verdict for the window
    pub verdict: ClassificationVerdict,
    /// Effect on the session state
    pub transition: Transition,
}

impl SessionUpdate {
    /// True when the host should act on the update (switch dictionary, etc.)
    pub fn changed(&self) -> bool {
        self.transition != Transition::Unchanged
    }
}

/// Classification stream for one document
#[derive(Clone)]
pub struct Session {
    registry: Arc<Registry>,
    config: ClassifierConfig,
    state: SessionState,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("variants", &self.registry.len())
            .field("config", &self.config)
            .field("state", &self.state)
            .finish()
    }
}

impl Session {
    /// Start a session in the default state
    pub fn new(registry: Arc<Registry>, config: ClassifierConfig) -> Self {
        Self {
            registry,
            config,
            state: SessionState::default(),
        }
    }

    /// Current state
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Registry used by this session
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Configuration used by this session
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Return to the default state
    pub fn reset(&mut self) {
        self.state = SessionState::default();
    }

    /// Classify a window and update the session state
    pub fn classify(&mut self, window: &str, total_word_count: usize) -> SessionUpdate {
        let verdict = classify(window, total_word_count, &self.registry, &self.config);
        let transition = self.apply(&verdict);

        SessionUpdate {
            verdict,
            transition,
        }
    }

    /// Fold a verdict into the state
    fn apply(&mut self, verdict: &ClassificationVerdict) -> Transition {
        let next = match verdict.status {
            VerdictStatus::Confident => SessionState {
                current_winner_base_language: Some(verdict.winning_base_language.clone()),
                current_winner_has_dictionary: verdict.dictionary_available,
                has_confidence: true,
            },
            VerdictStatus::Tentative | VerdictStatus::NoWinner => SessionState::default(),
        };

        let transition = if next == self.state {
            Transition::Unchanged
        } else if next.is_default() {
            Transition::Reset
        } else {
            Transition::Switched
        };

        if transition != Transition::Unchanged {
            log::debug!(
                "session {:?}: {} -> {}",
                transition,
                self.state.language(),
                next.language()
            );
        }
        if verdict.is_confident() && !verdict.dictionary_available {
            log::info!(
                "no dictionary available for {} ({})",
                verdict.winning_base_language,
                verdict.winning_variant_id
            );
        }

        self.state = next;
        transition
    }
}
