//! Breathing exercise command
//!
//! Drives the cyclic breathing table for a fixed number of full cycles.
//! The engine never stops a cyclic table on its own; this command counts
//! completed cycles and issues the explicit `stop()`.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use tracing::info;

use crate::cli::args::BreatheArgs;
use crate::cli::commands::session::{Session, announce_line, load_config, render};
use crate::error::{MirnoError, TimerError};
use crate::observability::Event;
use crate::timer::{Announce, PhaseTable, Ticker, TimerEngine};

/// Runs the breathing exercise for the requested number of cycles.
///
/// # Errors
///
/// Returns an error for an unreadable or invalid exercise file, an unknown
/// exercise name, or a phase table that cannot start.
pub async fn run(args: &BreatheArgs) -> Result<(), MirnoError> {
    let config = load_config(args.config.as_deref())?;
    let session = Session::prepare(&args.session, config.as_deref())?;

    let (table, label) = match &args.exercise {
        Some(name) => {
            let file = config
                .as_deref()
                .ok_or_else(|| TimerError::UnknownExercise(name.clone()))?;
            let exercise = file
                .find(name)
                .ok_or_else(|| TimerError::UnknownExercise(name.clone()))?;
            (exercise.to_table()?, name.clone())
        }
        None => (PhaseTable::breathing(), "breathing".to_string()),
    };
    let farewell = table.complete_message().to_string();

    let mut engine = TimerEngine::new(table);
    engine.start();
    if !engine.is_running() {
        return Err(TimerError::UnusableTable(label).into());
    }

    info!(exercise = %label, cycles = args.cycles, "breathing exercise started");
    session.emitter.emit(Event::SessionStarted {
        timestamp: Utc::now(),
        exercise: label,
        cycle_seconds: engine.table().cycle_seconds(),
    });

    println!("  {} cycles — Ctrl+C to stop early", args.cycles);
    render(&engine.snapshot());
    let engine = Arc::new(Mutex::new(engine));
    let (handle, mut rx) = Ticker::spawn(Arc::clone(&engine));

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut completed_cycles = 0u32;
    let finished = loop {
        tokio::select! {
            update = rx.recv() => {
                let Some(update) = update else {
                    break true;
                };
                render(&update.snapshot);
                match &update.announce {
                    Some(Announce::PhaseStarted { name, index }) => {
                        announce_line(name);
                        session.emitter.emit(Event::PhaseEntered {
                            timestamp: Utc::now(),
                            phase_name: name.clone(),
                            phase_index: *index,
                        });
                        // Wrapping back to the first phase closes a cycle
                        if *index == 0 {
                            completed_cycles += 1;
                            if completed_cycles >= args.cycles {
                                engine
                                    .lock()
                                    .expect("timer engine lock poisoned")
                                    .stop();
                                handle.shutdown();
                                break true;
                            }
                        }
                    }
                    // A terminal table handed to `breathe` just completes
                    Some(Announce::Completed { message }) => {
                        announce_line(message);
                        break true;
                    }
                    Some(Announce::Milestone { message, .. }) => announce_line(message),
                    None => {}
                }
            }
            _ = &mut ctrl_c => {
                engine.lock().expect("timer engine lock poisoned").stop();
                handle.shutdown();
                break false;
            }
        }
    };

    handle.join().await;

    if finished {
        println!("\n  {farewell}");
        let speech = Arc::clone(&session.speech);
        let text = farewell;
        tokio::spawn(async move { speech.say(&text).await });
    }
    session.emitter.emit(Event::SessionEnded {
        timestamp: Utc::now(),
        reason: if finished { "completed" } else { "interrupted" }.to_string(),
    });

    Ok(())
}
