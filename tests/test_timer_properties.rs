//! The timer engine's observable contract, exercised through the public
//! library API.

use mirno::timer::{Announce, PhaseTable, TimerEngine};

fn ticks(engine: &mut TimerEngine, n: u32) -> Vec<Announce> {
    (0..n).filter_map(|_| engine.tick()).collect()
}

#[test]
fn terminal_countdown_completes_after_duration_ticks() {
    for duration in [1, 2, 59, 60, 61, 300] {
        let mut engine = TimerEngine::new(PhaseTable::countdown(duration));
        engine.start();
        let announces = ticks(&mut engine, duration);
        assert!(!engine.is_running(), "duration {duration}");
        let completions = announces.iter().filter(|a| a.is_completion()).count();
        assert_eq!(completions, 1, "duration {duration}");
    }
}

#[test]
fn cyclic_timer_never_stops_by_itself() {
    let mut engine = TimerEngine::new(PhaseTable::breathing());
    engine.start();
    ticks(&mut engine, 10_000);
    assert!(engine.is_running());
}

#[test]
fn stop_twice_equals_stop_once() {
    let mut engine = TimerEngine::new(PhaseTable::countdown(100));
    engine.start();
    ticks(&mut engine, 10);

    engine.stop();
    let once = engine.snapshot();
    engine.stop();
    assert_eq!(engine.snapshot(), once);
}

#[test]
fn stop_then_start_resumes_exactly() {
    let mut engine = TimerEngine::new(PhaseTable::countdown(100));
    engine.start();
    ticks(&mut engine, 37);
    engine.stop();
    engine.start();
    assert_eq!(engine.remaining_seconds(), 63);
}

#[test]
fn milestones_fire_on_exact_values_only() {
    let mut engine = TimerEngine::new(PhaseTable::countdown(301));
    engine.start();

    let mut fired = Vec::new();
    for _ in 0..301 {
        if let Some(Announce::Milestone {
            remaining_seconds, ..
        }) = engine.tick()
        {
            fired.push(remaining_seconds);
        }
    }
    assert_eq!(fired, vec![300, 60]);
}

#[test]
fn five_minute_scenario() {
    // 300 s countdown: 240 ticks leave one minute and exactly one
    // announcement; 60 more complete the timer.
    let mut engine = TimerEngine::new(PhaseTable::countdown(300));
    engine.start();

    let first = ticks(&mut engine, 240);
    assert_eq!(engine.remaining_seconds(), 60);
    assert_eq!(first.len(), 1);
    assert!(matches!(
        &first[0],
        Announce::Milestone { remaining_seconds: 60, .. }
    ));

    let rest = ticks(&mut engine, 60);
    assert!(!engine.is_running());
    assert_eq!(rest.iter().filter(|a| a.is_completion()).count(), 1);
}

#[test]
fn breathing_scenario_full_cycle() {
    // 4 + 4 + 6 = 14 ticks bring the state back to the first phase with a
    // full four seconds loaded.
    let mut engine = TimerEngine::new(PhaseTable::breathing());
    engine.start();
    ticks(&mut engine, 14);
    assert_eq!(engine.current_phase_index(), 0);
    assert_eq!(engine.remaining_seconds(), 4);
}

#[test]
fn reset_while_running_clears_everything() {
    let mut engine = TimerEngine::new(PhaseTable::breathing());
    engine.start();
    ticks(&mut engine, 9);
    assert_eq!(engine.current_phase_index(), 2);

    engine.reset();
    let snapshot = engine.snapshot();
    assert_eq!(snapshot.phase_index, 0);
    assert_eq!(snapshot.remaining_seconds, 0);
    assert!(!snapshot.running);
}
