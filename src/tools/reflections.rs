//! Reflection answers
//!
//! Three free-text prompts answered locally. Stored only in the local
//! store, never sent anywhere.

use serde::{Deserialize, Serialize};

use crate::store::{self, KeyValue, keys};

/// Answers to the three reflection prompts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reflections {
    /// "What would help you feel better at school?"
    pub q1: String,
    /// "What could you ask a friend instead of assuming?"
    pub q2: String,
    /// "Which two adjustments would help everyone?"
    pub q3: String,
}

impl Reflections {
    /// Loads persisted answers, falling back to empty ones.
    #[must_use]
    pub fn load(store: &dyn KeyValue) -> Self {
        store::load_or(store, keys::REFLECTIONS, Self::default)
    }

    /// Persists this value.
    pub fn save(&self, store: &dyn KeyValue) {
        store::save(store, keys::REFLECTIONS, self);
    }

    /// Returns a copy with the given answer replaced (1-based prompt
    /// number; out-of-range numbers leave the value unchanged).
    #[must_use]
    pub fn with_answer(&self, prompt: u8, text: &str) -> Self {
        let mut next = self.clone();
        match prompt {
            1 => next.q1 = text.to_string(),
            2 => next.q2 = text.to_string(),
            3 => next.q3 = text.to_string(),
            _ => {}
        }
        next
    }

    /// All answers cleared.
    #[must_use]
    pub fn cleared() -> Self {
        Self::default()
    }

    /// Returns `true` when no prompt has been answered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.q1.is_empty() && self.q2.is_empty() && self.q3.is_empty()
    }
}
