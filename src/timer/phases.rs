//! Phase tables
//!
//! A phase table is the static, read-only part of a timer: an ordered
//! sequence of named phases with fixed durations, plus the milestones that
//! trigger one-time announcements. The engine never mutates a table after
//! construction (the single exception is [`PhaseTable::set_duration`],
//! used by the engine to apply a preset while idle).

/// A named segment of a timer with a fixed duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phase {
    /// Display name of the phase (e.g. `"Breathe in"`).
    pub name: String,
    /// Phase length in whole seconds. Always greater than zero.
    pub duration_seconds: u32,
}

impl Phase {
    /// Creates a new phase.
    #[must_use]
    pub fn new(name: impl Into<String>, duration_seconds: u32) -> Self {
        Self {
            name: name.into(),
            duration_seconds,
        }
    }
}

/// A specific remaining-time value that triggers a one-time announcement.
///
/// Milestones are fixed offsets from the end of a phase, matched by exact
/// equality against the post-decrement remaining time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Milestone {
    /// Remaining seconds at which the announcement fires.
    pub remaining_seconds: u32,
    /// Announcement text.
    pub message: String,
}

impl Milestone {
    /// Creates a new milestone.
    #[must_use]
    pub fn new(remaining_seconds: u32, message: impl Into<String>) -> Self {
        Self {
            remaining_seconds,
            message: message.into(),
        }
    }
}

/// Ordered sequence of phases driving a [`TimerEngine`](super::TimerEngine).
///
/// A cyclic table restarts at the first phase after the last; a terminal
/// table completes when its last phase runs out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseTable {
    phases: Vec<Phase>,
    cyclic: bool,
    milestones: Vec<Milestone>,
    complete_message: String,
}

/// Default preset lengths offered for the transition countdown, in minutes.
pub const COUNTDOWN_PRESETS_MINUTES: [u32; 4] = [1, 3, 5, 10];

impl PhaseTable {
    /// Creates a table from parts. `phases` must be non-empty with strictly
    /// positive durations; the config validator enforces this for
    /// user-supplied tables.
    #[must_use]
    pub fn new(
        phases: Vec<Phase>,
        cyclic: bool,
        milestones: Vec<Milestone>,
        complete_message: impl Into<String>,
    ) -> Self {
        Self {
            phases,
            cyclic,
            milestones,
            complete_message: complete_message.into(),
        }
    }

    /// The single-phase transition countdown with the stock milestone
    /// announcements at five minutes and one minute remaining.
    #[must_use]
    pub fn countdown(duration_seconds: u32) -> Self {
        Self::new(
            vec![Phase::new("countdown", duration_seconds)],
            false,
            vec![
                Milestone::new(300, "5 minutes left."),
                Milestone::new(60, "1 minute left."),
            ],
            "Time's up!",
        )
    }

    /// The calming breathing exercise: in 4 s, hold 4 s, out 6 s, repeating
    /// until stopped.
    #[must_use]
    pub fn breathing() -> Self {
        Self::new(
            vec![
                Phase::new("Breathe in", 4),
                Phase::new("Hold", 4),
                Phase::new("Breathe out", 6),
            ],
            true,
            vec![],
            "Well done.",
        )
    }

    /// Number of phases in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.phases.len()
    }

    /// Returns `true` if the table has no phases.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    /// Whether the table restarts after its last phase.
    #[must_use]
    pub const fn is_cyclic(&self) -> bool {
        self.cyclic
    }

    /// The phase at `index`, if in range.
    #[must_use]
    pub fn phase(&self, index: usize) -> Option<&Phase> {
        self.phases.get(index)
    }

    /// All phases in order.
    #[must_use]
    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    /// Configured milestones.
    #[must_use]
    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }

    /// Announcement text for terminal completion.
    #[must_use]
    pub fn complete_message(&self) -> &str {
        &self.complete_message
    }

    /// The index following `index`, wrapping to 0 for cyclic tables.
    /// Returns `None` when a terminal table runs past its last phase.
    #[must_use]
    pub fn next_index(&self, index: usize) -> Option<usize> {
        let next = index + 1;
        if next < self.phases.len() {
            Some(next)
        } else if self.cyclic {
            Some(0)
        } else {
            None
        }
    }

    /// Total length of one pass through all phases, in seconds.
    #[must_use]
    pub fn cycle_seconds(&self) -> u32 {
        self.phases.iter().map(|p| p.duration_seconds).sum()
    }

    /// Replaces the duration of the phase at `index`. Ignored for an
    /// out-of-range index or a zero duration.
    pub fn set_duration(&mut self, index: usize, duration_seconds: u32) {
        if duration_seconds == 0 {
            return;
        }
        if let Some(phase) = self.phases.get_mut(index) {
            phase.duration_seconds = duration_seconds;
        }
    }
}
