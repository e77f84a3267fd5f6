#![no_main]

use libfuzzer_sys::fuzz_target;
use mirno::timer::{PhaseTable, TimerEngine};

// Drives an engine through an arbitrary operation sequence and checks the
// state invariants after every step.
fuzz_target!(|data: &[u8]| {
    let mut engine = TimerEngine::new(PhaseTable::breathing());
    let mut bytes = data.iter().copied();

    while let Some(op) = bytes.next() {
        match op % 5 {
            0 => engine.start(),
            1 => engine.stop(),
            2 => engine.reset(),
            3 => {
                let preset = u32::from(bytes.next().unwrap_or(0));
                engine.set_preset(preset);
            }
            _ => {
                engine.tick();
            }
        }

        let snapshot = engine.snapshot();
        assert!(snapshot.phase_index < engine.table().len());
        let duration = engine
            .table()
            .phase(snapshot.phase_index)
            .map_or(0, |p| p.duration_seconds);
        assert!(snapshot.remaining_seconds <= duration);
        if snapshot.running {
            assert!(snapshot.remaining_seconds > 0);
        }
    }
});
