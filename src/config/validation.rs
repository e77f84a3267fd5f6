//! Configuration validation
//!
//! Semantic validation of a deserialized `ExerciseFile`. Validation
//! collects ALL issues instead of stopping at the first, so one run gives
//! the full picture.

use std::collections::HashSet;

use crate::config::loader::ConfigLimits;
use crate::config::schema::{ExerciseConfig, ExerciseFile, parse_duration_seconds};
use crate::error::{Severity, ValidationIssue};

// ============================================================================
// Public API
// ============================================================================

/// Result of configuration validation.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Validation errors (prevent loading).
    pub errors: Vec<ValidationIssue>,

    /// Validation warnings (informational).
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Returns `true` if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns `true` if validation passed (no errors).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Exercise file validator.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<ValidationIssue>,
    warnings: Vec<ValidationIssue>,
}

impl Validator {
    /// Creates a new validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a file and returns every issue found.
    pub fn validate(&mut self, file: &ExerciseFile, limits: &ConfigLimits) -> ValidationResult {
        self.errors.clear();
        self.warnings.clear();

        self.validate_exercises(file, limits);
        self.validate_presets(file);

        ValidationResult {
            errors: std::mem::take(&mut self.errors),
            warnings: std::mem::take(&mut self.warnings),
        }
    }

    // ========================================================================
    // Exercises
    // ========================================================================

    fn validate_exercises(&mut self, file: &ExerciseFile, limits: &ConfigLimits) {
        if file.exercises.len() > limits.max_exercises {
            self.add_error(
                "exercises",
                &format!(
                    "too many exercises ({}, limit {})",
                    file.exercises.len(),
                    limits.max_exercises
                ),
            );
        }

        let mut seen = HashSet::new();
        for (i, exercise) in file.exercises.iter().enumerate() {
            let path = format!("exercises[{i}]");
            if exercise.name.trim().is_empty() {
                self.add_error(&format!("{path}.name"), "exercise name cannot be empty");
            } else if !seen.insert(exercise.name.as_str()) {
                self.add_error(
                    &format!("{path}.name"),
                    &format!("duplicate exercise name '{}'", exercise.name),
                );
            }
            self.validate_exercise(exercise, &path, limits);
        }
    }

    fn validate_exercise(&mut self, exercise: &ExerciseConfig, path: &str, limits: &ConfigLimits) {
        if exercise.phases.is_empty() {
            self.add_error(&format!("{path}.phases"), "phase list is empty");
        }
        if exercise.phases.len() > limits.max_phases {
            self.add_error(
                &format!("{path}.phases"),
                &format!(
                    "too many phases ({}, limit {})",
                    exercise.phases.len(),
                    limits.max_phases
                ),
            );
        }

        let mut longest_phase = 0u32;
        for (i, phase) in exercise.phases.iter().enumerate() {
            let phase_path = format!("{path}.phases[{i}]");
            if phase.name.trim().is_empty() {
                self.add_error(&format!("{phase_path}.name"), "phase name cannot be empty");
            }
            match parse_duration_seconds(&phase.duration, "duration") {
                Ok(seconds) => longest_phase = longest_phase.max(seconds),
                Err(e) => self.add_error(&format!("{phase_path}.duration"), &e.to_string()),
            }
        }

        if exercise.milestones.len() > limits.max_milestones {
            self.add_error(
                &format!("{path}.milestones"),
                &format!(
                    "too many milestones ({}, limit {})",
                    exercise.milestones.len(),
                    limits.max_milestones
                ),
            );
        }

        let mut milestone_values = HashSet::new();
        for (i, milestone) in exercise.milestones.iter().enumerate() {
            let milestone_path = format!("{path}.milestones[{i}]");
            if milestone.message.trim().is_empty() {
                self.add_error(
                    &format!("{milestone_path}.message"),
                    "milestone message cannot be empty",
                );
            }
            match parse_duration_seconds(&milestone.remaining, "remaining") {
                Ok(seconds) => {
                    if !milestone_values.insert(seconds) {
                        self.add_error(
                            &format!("{milestone_path}.remaining"),
                            &format!("duplicate milestone at {seconds} seconds remaining"),
                        );
                    }
                    // Milestones match remaining time exactly; one at or past
                    // the longest phase can never fire.
                    if longest_phase > 0 && seconds >= longest_phase {
                        self.add_warning(
                            &format!("{milestone_path}.remaining"),
                            "milestone is not below the longest phase duration and will never fire",
                        );
                    }
                }
                Err(e) => self.add_error(&format!("{milestone_path}.remaining"), &e.to_string()),
            }
        }

        if exercise.cyclic && !exercise.milestones.is_empty() {
            self.add_warning(
                &format!("{path}.milestones"),
                "milestones on a cyclic exercise fire once per cycle",
            );
        }
        if exercise.cyclic && exercise.complete_message.is_some() {
            self.add_warning(
                &format!("{path}.complete_message"),
                "a cyclic exercise never completes on its own; the message is unused",
            );
        }
    }

    // ========================================================================
    // Presets
    // ========================================================================

    fn validate_presets(&mut self, file: &ExerciseFile) {
        let Some(presets) = &file.presets_minutes else {
            return;
        };
        if presets.is_empty() {
            self.add_error("presets_minutes", "preset list cannot be empty");
        }
        for (i, minutes) in presets.iter().enumerate() {
            if *minutes == 0 {
                self.add_error(
                    &format!("presets_minutes[{i}]"),
                    "preset must be at least one minute",
                );
            } else if *minutes > 180 {
                self.add_warning(
                    &format!("presets_minutes[{i}]"),
                    "preset is unusually long (> 3 hours)",
                );
            }
        }
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn add_error(&mut self, path: &str, message: &str) {
        self.errors.push(ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
            severity: Severity::Error,
        });
    }

    fn add_warning(&mut self, path: &str, message: &str) {
        self.warnings.push(ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
            severity: Severity::Warning,
        });
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn validate_yaml(yaml: &str) -> ValidationResult {
        let file: ExerciseFile = serde_yaml::from_str(yaml).unwrap();
        Validator::new().validate(&file, &ConfigLimits::default())
    }

    #[test]
    fn test_valid_file() {
        let result = validate_yaml(
            r"
exercises:
  - name: transition
    phases:
      - name: countdown
        duration: 5m
    milestones:
      - remaining: 1m
        message: 1 minute left.
",
        );
        assert!(result.is_valid(), "unexpected errors: {:?}", result.errors);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_empty_phases_is_error() {
        let result = validate_yaml(
            r"
exercises:
  - name: broken
    phases: []
",
        );
        assert!(result.has_errors());
        assert!(result.errors[0].path.contains("phases"));
    }

    #[test]
    fn test_zero_duration_is_error() {
        let result = validate_yaml(
            r"
exercises:
  - name: broken
    phases:
      - name: countdown
        duration: 0s
",
        );
        assert!(result.has_errors());
    }

    #[test]
    fn test_unparseable_duration_is_error() {
        let result = validate_yaml(
            r"
exercises:
  - name: broken
    phases:
      - name: countdown
        duration: whenever
",
        );
        assert!(result.has_errors());
    }

    #[test]
    fn test_duplicate_names_is_error() {
        let result = validate_yaml(
            r"
exercises:
  - name: same
    phases:
      - {name: a, duration: 10s}
  - name: same
    phases:
      - {name: b, duration: 10s}
",
        );
        assert!(result.has_errors());
        assert!(result.errors[0].message.contains("duplicate"));
    }

    #[test]
    fn test_unreachable_milestone_is_warning() {
        let result = validate_yaml(
            r"
exercises:
  - name: short
    phases:
      - {name: countdown, duration: 30s}
    milestones:
      - {remaining: 1m, message: never}
",
        );
        assert!(result.is_valid());
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].message.contains("never fire"));
    }

    #[test]
    fn test_cyclic_milestones_is_warning() {
        let result = validate_yaml(
            r"
exercises:
  - name: loop
    cyclic: true
    phases:
      - {name: in, duration: 4s}
    milestones:
      - {remaining: 2s, message: halfway}
",
        );
        assert!(result.is_valid());
        assert!(
            result
                .warnings
                .iter()
                .any(|w| w.message.contains("per cycle"))
        );
    }

    #[test]
    fn test_duplicate_milestone_is_error() {
        let result = validate_yaml(
            r"
exercises:
  - name: t
    phases:
      - {name: countdown, duration: 5m}
    milestones:
      - {remaining: 1m, message: one}
      - {remaining: 60s, message: also one}
",
        );
        assert!(result.has_errors());
    }

    #[test]
    fn test_zero_preset_is_error() {
        let result = validate_yaml("presets_minutes: [0, 5]");
        assert!(result.has_errors());
    }

    #[test]
    fn test_empty_preset_list_is_error() {
        let result = validate_yaml("presets_minutes: []");
        assert!(result.has_errors());
    }

    #[test]
    fn test_too_many_exercises() {
        let limits = ConfigLimits {
            max_exercises: 1,
            ..ConfigLimits::default()
        };
        let file: ExerciseFile = serde_yaml::from_str(
            r"
exercises:
  - name: a
    phases: [{name: p, duration: 1s}]
  - name: b
    phases: [{name: p, duration: 1s}]
",
        )
        .unwrap();
        let result = Validator::new().validate(&file, &limits);
        assert!(result.has_errors());
    }

    #[test]
    fn test_collects_multiple_errors() {
        let result = validate_yaml(
            r"
exercises:
  - name: ''
    phases: []
",
        );
        assert!(result.errors.len() >= 2);
    }
}
