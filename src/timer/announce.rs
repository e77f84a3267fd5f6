//! Announcement events
//!
//! Transient values handed to the presentation side when a phase boundary
//! or milestone is crossed. They are not stored: each one is consumed once
//! (displayed, spoken, or logged) and dropped.

/// A one-time announcement emitted by the timer engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Announce {
    /// A configured milestone was reached (e.g. "5 minutes left.").
    Milestone {
        /// Announcement text.
        message: String,
        /// Remaining seconds at the moment the milestone fired.
        remaining_seconds: u32,
    },

    /// A cyclic table advanced into a new phase.
    PhaseStarted {
        /// Display name of the phase just entered.
        name: String,
        /// Zero-based index of the phase just entered.
        index: usize,
    },

    /// A terminal table ran out; the engine has stopped itself.
    Completed {
        /// Completion text (e.g. "Time's up!").
        message: String,
    },
}

impl Announce {
    /// The text to display or speak for this announcement.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Milestone { message, .. } | Self::Completed { message } => message,
            Self::PhaseStarted { name, .. } => name,
        }
    }

    /// Returns `true` for the terminal completion announcement.
    #[must_use]
    pub const fn is_completion(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}
