//! Timer engine
//!
//! The `TimerEngine` owns the mutable countdown state and advances it one
//! tick at a time. All operations are plain state transitions that cannot
//! fail: invalid input at the boundary (a preset while running, a tick while
//! paused) is a silent no-op.
//!
//! The engine is deliberately synchronous and single-owner. Scheduling —
//! the wait between ticks, cancellation on teardown — belongs to the
//! [`Ticker`](super::Ticker), which delivers exactly one fully-processed
//! tick at a time.

use super::announce::Announce;
use super::phases::PhaseTable;

// ============================================================================
// Snapshot
// ============================================================================

/// Read-only view of the engine state for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerSnapshot {
    /// Display name of the current phase.
    pub phase_name: String,
    /// Zero-based index of the current phase.
    pub phase_index: usize,
    /// Seconds left in the current phase.
    pub remaining_seconds: u32,
    /// Whether the countdown is currently running.
    pub running: bool,
    /// Most recent announcement text, if one is pending display.
    pub announcement: Option<String>,
}

impl TimerSnapshot {
    /// Remaining time formatted as `MM:SS`.
    #[must_use]
    pub fn clock(&self) -> String {
        format_mm_ss(self.remaining_seconds)
    }
}

/// Formats whole seconds as zero-padded `MM:SS`.
#[must_use]
pub fn format_mm_ss(total_seconds: u32) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

// ============================================================================
// Engine
// ============================================================================

/// Deterministic, tick-driven countdown with phase transitions,
/// pause/resume, and milestone announcements.
///
/// Lifecycle: constructed idle (`phase 0, remaining 0, not running`);
/// `start()` loads the current phase's duration; each `tick()` decrements
/// by one second and handles milestones and phase boundaries. A terminal
/// table stops the engine when its last phase runs out; a cyclic table
/// runs until an explicit `stop()` or `reset()`.
#[derive(Debug, Clone)]
pub struct TimerEngine {
    table: PhaseTable,
    current_phase_index: usize,
    remaining_seconds: u32,
    running: bool,
    announcement: Option<String>,
}

impl TimerEngine {
    /// Creates an idle engine over the given phase table.
    #[must_use]
    pub const fn new(table: PhaseTable) -> Self {
        Self {
            table,
            current_phase_index: 0,
            remaining_seconds: 0,
            running: false,
            announcement: None,
        }
    }

    /// Starts or resumes the countdown.
    ///
    /// With time remaining this resumes from the stored value; it never
    /// resets on resume. From idle (`remaining == 0`) it first loads the
    /// current phase's configured duration and clears any stale
    /// announcement. Idempotent if already running.
    pub fn start(&mut self) {
        if self.remaining_seconds == 0 {
            self.remaining_seconds = self.current_phase_duration();
            self.announcement = None;
        }
        if self.remaining_seconds > 0 {
            self.running = true;
        }
    }

    /// Pauses the countdown, keeping the remaining time. Idempotent.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Returns the engine to the idle state: phase 0, no time loaded, not
    /// running, pending announcement cleared.
    pub fn reset(&mut self) {
        self.running = false;
        self.current_phase_index = 0;
        self.remaining_seconds = 0;
        self.announcement = None;
    }

    /// Sets the duration loaded on the next `start()` from idle.
    ///
    /// Only meaningful before a run starts: silently ignored while running
    /// or while paused with time remaining, and a zero preset is ignored
    /// outright.
    pub fn set_preset(&mut self, duration_seconds: u32) {
        if self.running || self.remaining_seconds != 0 {
            return;
        }
        self.table
            .set_duration(self.current_phase_index, duration_seconds);
    }

    /// Advances the countdown by one second.
    ///
    /// No-op unless running. Returns the announcement crossed by this tick,
    /// if any: an exact-match milestone, a phase-start on cyclic
    /// advancement, or the single completion when a terminal table runs
    /// out (which also stops the engine).
    pub fn tick(&mut self) -> Option<Announce> {
        if !self.running || self.remaining_seconds == 0 {
            return None;
        }

        self.remaining_seconds -= 1;

        if self.remaining_seconds > 0 {
            return self.check_milestone();
        }

        // Phase boundary
        match self.table.next_index(self.current_phase_index) {
            None => {
                self.running = false;
                let message = self.table.complete_message().to_string();
                self.announcement = Some(message.clone());
                Some(Announce::Completed { message })
            }
            Some(next) => {
                self.current_phase_index = next;
                self.remaining_seconds = self.current_phase_duration();
                let name = self.current_phase_name().to_string();
                Some(Announce::PhaseStarted { name, index: next })
            }
        }
    }

    /// Checks the configured milestones against the post-decrement
    /// remaining time. Exact equality only.
    fn check_milestone(&mut self) -> Option<Announce> {
        let hit = self
            .table
            .milestones()
            .iter()
            .find(|m| m.remaining_seconds == self.remaining_seconds)?;
        let message = hit.message.clone();
        self.announcement = Some(message.clone());
        Some(Announce::Milestone {
            message,
            remaining_seconds: self.remaining_seconds,
        })
    }

    /// Read-only view of the current state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            phase_name: self.current_phase_name().to_string(),
            phase_index: self.current_phase_index,
            remaining_seconds: self.remaining_seconds,
            running: self.running,
            announcement: self.announcement.clone(),
        }
    }

    /// Whether the countdown is currently running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Seconds left in the current phase.
    #[must_use]
    pub const fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Zero-based index of the current phase.
    #[must_use]
    pub const fn current_phase_index(&self) -> usize {
        self.current_phase_index
    }

    /// Display name of the current phase, or `"<none>"` for an empty table.
    #[must_use]
    pub fn current_phase_name(&self) -> &str {
        self.table
            .phase(self.current_phase_index)
            .map_or("<none>", |p| p.name.as_str())
    }

    /// The phase table driving this engine.
    #[must_use]
    pub const fn table(&self) -> &PhaseTable {
        &self.table
    }

    fn current_phase_duration(&self) -> u32 {
        self.table
            .phase(self.current_phase_index)
            .map_or(0, |p| p.duration_seconds)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::super::phases::{Milestone, Phase, PhaseTable};
    use super::*;
    use proptest::prelude::*;

    fn countdown_engine(seconds: u32) -> TimerEngine {
        TimerEngine::new(PhaseTable::countdown(seconds))
    }

    /// Drives `n` ticks, returning every announcement produced.
    fn drain_ticks(engine: &mut TimerEngine, n: u32) -> Vec<Announce> {
        (0..n).filter_map(|_| engine.tick()).collect()
    }

    #[test]
    fn test_new_engine_is_idle() {
        let engine = countdown_engine(300);
        assert_eq!(engine.current_phase_index(), 0);
        assert_eq!(engine.remaining_seconds(), 0);
        assert!(!engine.is_running());
        assert!(engine.snapshot().announcement.is_none());
    }

    #[test]
    fn test_start_loads_duration() {
        let mut engine = countdown_engine(300);
        engine.start();
        assert!(engine.is_running());
        assert_eq!(engine.remaining_seconds(), 300);
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut engine = countdown_engine(300);
        engine.start();
        engine.tick();
        engine.start();
        assert!(engine.is_running());
        assert_eq!(engine.remaining_seconds(), 299);
    }

    #[test]
    fn test_tick_decrements() {
        let mut engine = countdown_engine(10);
        engine.start();
        assert!(engine.tick().is_none());
        assert_eq!(engine.remaining_seconds(), 9);
    }

    #[test]
    fn test_tick_while_paused_is_noop() {
        let mut engine = countdown_engine(10);
        engine.start();
        engine.tick();
        engine.stop();
        assert!(engine.tick().is_none());
        assert_eq!(engine.remaining_seconds(), 9);
    }

    #[test]
    fn test_tick_while_idle_is_noop() {
        let mut engine = countdown_engine(10);
        assert!(engine.tick().is_none());
        assert_eq!(engine.remaining_seconds(), 0);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut engine = countdown_engine(10);
        engine.start();
        engine.tick();
        engine.stop();
        let first = engine.snapshot();
        engine.stop();
        assert_eq!(engine.snapshot(), first);
    }

    #[test]
    fn test_resume_keeps_remaining() {
        let mut engine = countdown_engine(10);
        engine.start();
        drain_ticks(&mut engine, 4);
        engine.stop();
        assert_eq!(engine.remaining_seconds(), 6);
        engine.start();
        assert!(engine.is_running());
        // Resumed from the stored remaining, not from the full preset
        assert_eq!(engine.remaining_seconds(), 6);
    }

    #[test]
    fn test_reset_while_running() {
        let mut engine = countdown_engine(120);
        engine.start();
        drain_ticks(&mut engine, 30);
        engine.reset();
        let snap = engine.snapshot();
        assert_eq!(snap.phase_index, 0);
        assert_eq!(snap.remaining_seconds, 0);
        assert!(!snap.running);
        assert!(snap.announcement.is_none());
    }

    #[test]
    fn test_reset_clears_announcement() {
        let mut engine = countdown_engine(61);
        engine.start();
        drain_ticks(&mut engine, 1);
        assert!(engine.snapshot().announcement.is_some());
        engine.reset();
        assert!(engine.snapshot().announcement.is_none());
    }

    #[test]
    fn test_set_preset_while_idle() {
        let mut engine = countdown_engine(300);
        engine.set_preset(60);
        engine.start();
        assert_eq!(engine.remaining_seconds(), 60);
    }

    #[test]
    fn test_set_preset_while_running_is_ignored() {
        let mut engine = countdown_engine(300);
        engine.start();
        engine.set_preset(60);
        assert_eq!(engine.remaining_seconds(), 300);
    }

    #[test]
    fn test_set_preset_while_paused_is_ignored() {
        let mut engine = countdown_engine(300);
        engine.start();
        engine.tick();
        engine.stop();
        engine.set_preset(60);
        engine.start();
        assert_eq!(engine.remaining_seconds(), 299);
    }

    #[test]
    fn test_set_preset_zero_is_ignored() {
        let mut engine = countdown_engine(300);
        engine.set_preset(0);
        engine.start();
        assert_eq!(engine.remaining_seconds(), 300);
    }

    #[test]
    fn test_completion_stops_engine() {
        let mut engine = countdown_engine(3);
        engine.start();
        let announces = drain_ticks(&mut engine, 3);
        assert!(!engine.is_running());
        assert_eq!(engine.remaining_seconds(), 0);
        assert_eq!(announces.len(), 1);
        assert!(announces[0].is_completion());
    }

    #[test]
    fn test_completion_fires_exactly_once() {
        let mut engine = countdown_engine(3);
        engine.start();
        let announces = drain_ticks(&mut engine, 10);
        let completions = announces.iter().filter(|a| a.is_completion()).count();
        assert_eq!(completions, 1);
    }

    #[test]
    fn test_milestone_exact_match_only() {
        // 400 s countdown: both stock milestones (300 s and 60 s) are crossed.
        let mut engine = countdown_engine(400);
        engine.start();
        let announces = drain_ticks(&mut engine, 399);
        let milestones: Vec<_> = announces
            .iter()
            .filter_map(|a| match a {
                Announce::Milestone {
                    remaining_seconds, ..
                } => Some(*remaining_seconds),
                _ => None,
            })
            .collect();
        assert_eq!(milestones, vec![300, 60]);
    }

    #[test]
    fn test_milestone_not_fired_on_load() {
        // Loading 300 s does not count as transitioning to 300 s remaining.
        let mut engine = countdown_engine(300);
        engine.start();
        let announces = drain_ticks(&mut engine, 240);
        assert_eq!(engine.remaining_seconds(), 60);
        assert_eq!(announces.len(), 1);
        assert_eq!(
            announces[0],
            Announce::Milestone {
                message: "1 minute left.".to_string(),
                remaining_seconds: 60,
            }
        );
    }

    #[test]
    fn test_countdown_scenario_full_run() {
        // 300 s transition timer: 240 ticks, then 60 more to completion.
        let mut engine = countdown_engine(300);
        engine.start();
        let first = drain_ticks(&mut engine, 240);
        assert_eq!(engine.remaining_seconds(), 60);
        assert_eq!(first.len(), 1);

        let rest = drain_ticks(&mut engine, 60);
        assert!(!engine.is_running());
        assert_eq!(rest.len(), 1);
        assert!(rest[0].is_completion());
        assert_eq!(rest[0].message(), "Time's up!");
    }

    #[test]
    fn test_milestone_sets_pending_announcement() {
        let mut engine = countdown_engine(61);
        engine.start();
        engine.tick();
        assert_eq!(
            engine.snapshot().announcement.as_deref(),
            Some("1 minute left.")
        );
    }

    #[test]
    fn test_breathing_cycle_returns_to_start() {
        // One full cycle is 4 + 4 + 6 = 14 ticks.
        let mut engine = TimerEngine::new(PhaseTable::breathing());
        engine.start();
        drain_ticks(&mut engine, 14);
        assert_eq!(engine.current_phase_index(), 0);
        assert_eq!(engine.remaining_seconds(), 4);
        assert!(engine.is_running());
    }

    #[test]
    fn test_breathing_phase_sequence() {
        let mut engine = TimerEngine::new(PhaseTable::breathing());
        engine.start();
        let announces = drain_ticks(&mut engine, 14);
        let entered: Vec<_> = announces
            .iter()
            .filter_map(|a| match a {
                Announce::PhaseStarted { index, .. } => Some(*index),
                _ => None,
            })
            .collect();
        assert_eq!(entered, vec![1, 2, 0]);
    }

    #[test]
    fn test_cyclic_never_completes() {
        let mut engine = TimerEngine::new(PhaseTable::breathing());
        engine.start();
        let announces = drain_ticks(&mut engine, 1000);
        assert!(engine.is_running());
        assert!(announces.iter().all(|a| !a.is_completion()));
    }

    #[test]
    fn test_cyclic_stops_only_on_request() {
        let mut engine = TimerEngine::new(PhaseTable::breathing());
        engine.start();
        drain_ticks(&mut engine, 50);
        engine.stop();
        assert!(!engine.is_running());
    }

    #[test]
    fn test_multi_phase_terminal_completes_at_end() {
        let table = PhaseTable::new(
            vec![Phase::new("warm-up", 2), Phase::new("work", 3)],
            false,
            vec![],
            "Done.",
        );
        let mut engine = TimerEngine::new(table);
        engine.start();
        let announces = drain_ticks(&mut engine, 5);
        assert!(!engine.is_running());
        assert_eq!(
            announces.last(),
            Some(&Announce::Completed {
                message: "Done.".to_string()
            })
        );
    }

    #[test]
    fn test_restart_after_completion_reloads() {
        let mut engine = countdown_engine(3);
        engine.start();
        drain_ticks(&mut engine, 3);
        assert!(!engine.is_running());
        engine.start();
        assert!(engine.is_running());
        assert_eq!(engine.remaining_seconds(), 3);
    }

    #[test]
    fn test_snapshot_clock_format() {
        let mut engine = countdown_engine(300);
        engine.start();
        engine.tick();
        assert_eq!(engine.snapshot().clock(), "04:59");
    }

    #[test]
    fn test_format_mm_ss() {
        assert_eq!(format_mm_ss(0), "00:00");
        assert_eq!(format_mm_ss(59), "00:59");
        assert_eq!(format_mm_ss(60), "01:00");
        assert_eq!(format_mm_ss(600), "10:00");
        assert_eq!(format_mm_ss(3661), "61:01");
    }

    #[test]
    fn test_empty_table_never_runs() {
        let table = PhaseTable::new(vec![], false, vec![], "");
        let mut engine = TimerEngine::new(table);
        engine.start();
        assert!(!engine.is_running());
        assert!(engine.tick().is_none());
        assert_eq!(engine.current_phase_name(), "<none>");
    }

    #[test]
    fn test_custom_milestone() {
        let table = PhaseTable::new(
            vec![Phase::new("countdown", 10)],
            false,
            vec![Milestone::new(5, "Halfway.")],
            "Time's up!",
        );
        let mut engine = TimerEngine::new(table);
        engine.start();
        let announces = drain_ticks(&mut engine, 6);
        assert_eq!(announces.len(), 1);
        assert_eq!(announces[0].message(), "Halfway.");
    }

    proptest! {
        #[test]
        fn prop_terminal_countdown_completes_once(duration in 1u32..=600) {
            let mut engine = countdown_engine(duration);
            engine.start();
            let announces = drain_ticks(&mut engine, duration);
            prop_assert!(!engine.is_running());
            prop_assert_eq!(engine.remaining_seconds(), 0);
            let completions = announces.iter().filter(|a| a.is_completion()).count();
            prop_assert_eq!(completions, 1);
        }

        #[test]
        fn prop_remaining_never_exceeds_phase_duration(
            duration in 1u32..=120,
            ticks in 0u32..=300,
        ) {
            let mut engine = TimerEngine::new(PhaseTable::breathing());
            engine.set_preset(duration);
            engine.start();
            for _ in 0..ticks {
                engine.tick();
                let snap = engine.snapshot();
                let phase_duration = engine
                    .table()
                    .phase(snap.phase_index)
                    .map_or(0, |p| p.duration_seconds);
                prop_assert!(snap.remaining_seconds <= phase_duration);
            }
        }

        #[test]
        fn prop_stop_start_resumes_exactly(
            duration in 2u32..=600,
            pause_at in 1u32..=599,
        ) {
            let pause_at = pause_at.min(duration - 1);
            let mut engine = countdown_engine(duration);
            engine.start();
            drain_ticks(&mut engine, pause_at);
            engine.stop();
            let before = engine.remaining_seconds();
            engine.start();
            prop_assert_eq!(engine.remaining_seconds(), before);
        }
    }
}
