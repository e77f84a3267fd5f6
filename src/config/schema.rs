//! Configuration schema types
//!
//! Types deserialized from a YAML exercise file. Durations are written the
//! humanized way (`4s`, `5m`); conversion to whole seconds happens when a
//! phase table is built, after validation has vetted the strings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::timer::{Milestone, Phase, PhaseTable};

// ============================================================================
// Top-Level Configuration
// ============================================================================

/// Root of an exercise file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ExerciseFile {
    /// Named exercises available to `run --exercise` and `breathe`.
    #[serde(default)]
    pub exercises: Vec<ExerciseConfig>,

    /// Countdown preset lengths in minutes shown by the presentation layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presets_minutes: Option<Vec<u32>>,

    /// Speech capability defaults.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speech: Option<SpeechConfig>,

    /// Store location defaults.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store: Option<StoreConfig>,
}

impl ExerciseFile {
    /// Looks up an exercise by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&ExerciseConfig> {
        self.exercises.iter().find(|e| e.name == name)
    }
}

// ============================================================================
// Exercises
// ============================================================================

/// One named exercise: a phase table plus its announcements.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ExerciseConfig {
    /// Unique exercise name.
    pub name: String,

    /// Restart at the first phase after the last.
    #[serde(default)]
    pub cyclic: bool,

    /// Ordered phases.
    pub phases: Vec<PhaseConfig>,

    /// Milestone announcements, matched exactly against remaining time.
    #[serde(default)]
    pub milestones: Vec<MilestoneConfig>,

    /// Completion announcement for terminal exercises.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complete_message: Option<String>,
}

/// A phase as written in the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PhaseConfig {
    /// Display name of the phase.
    pub name: String,

    /// Humanized duration (`4s`, `90s`, `5m`).
    pub duration: String,
}

/// A milestone as written in the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MilestoneConfig {
    /// Humanized remaining time at which the announcement fires.
    pub remaining: String,

    /// Announcement text.
    pub message: String,
}

impl ExerciseConfig {
    /// Builds the runtime phase table for this exercise.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a duration that does not
    /// parse, is zero, or does not land on a whole second. Validation
    /// reports the same problems up front with field paths.
    pub fn to_table(&self) -> Result<PhaseTable, ConfigError> {
        let mut phases = Vec::with_capacity(self.phases.len());
        for phase in &self.phases {
            phases.push(Phase::new(
                phase.name.clone(),
                parse_duration_seconds(&phase.duration, "duration")?,
            ));
        }
        let mut milestones = Vec::with_capacity(self.milestones.len());
        for milestone in &self.milestones {
            milestones.push(Milestone::new(
                parse_duration_seconds(&milestone.remaining, "remaining")?,
                milestone.message.clone(),
            ));
        }
        let complete = self
            .complete_message
            .clone()
            .unwrap_or_else(|| "Time's up!".to_string());
        Ok(PhaseTable::new(phases, self.cyclic, milestones, complete))
    }
}

/// Parses a humanized duration into whole seconds.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` for an unparseable string, a zero
/// duration, sub-second precision, or anything past 24 hours.
pub fn parse_duration_seconds(value: &str, field: &str) -> Result<u32, ConfigError> {
    const MAX_SECONDS: u64 = 24 * 60 * 60;

    let invalid = |expected: &str| ConfigError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        expected: expected.to_string(),
    };

    let duration =
        humantime::parse_duration(value.trim()).map_err(|_| invalid("a duration like '4s' or '5m'"))?;
    if duration.subsec_nanos() != 0 {
        return Err(invalid("a whole number of seconds"));
    }
    let seconds = duration.as_secs();
    if seconds == 0 {
        return Err(invalid("a duration greater than zero"));
    }
    if seconds > MAX_SECONDS {
        return Err(invalid("at most 24 hours"));
    }
    u32::try_from(seconds).map_err(|_| invalid("at most 24 hours"))
}

// ============================================================================
// Capability Defaults
// ============================================================================

/// Speech capability defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SpeechConfig {
    /// External command line used to speak announcements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

/// Store location defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct StoreConfig {
    /// Path of the backing JSON document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

// ============================================================================
// Tests
// ============================================================================
