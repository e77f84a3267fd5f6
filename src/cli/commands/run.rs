//! Transition countdown command
//!
//! Runs a single countdown to zero, with milestone announcements and an
//! optional completion bell. Ctrl+C pauses the engine and ends the session
//! cleanly.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use tracing::info;

use crate::cli::args::RunArgs;
use crate::cli::commands::session::{Session, announce_line, load_config, render};
use crate::error::{MirnoError, TimerError};
use crate::observability::Event;
use crate::timer::{Announce, PhaseTable, TickUpdate, Ticker, TimerEngine};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Completed,
    Interrupted,
    Stopped,
}

impl Outcome {
    const fn reason(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Interrupted => "interrupted",
            Self::Stopped => "stopped",
        }
    }
}

/// Runs the transition countdown.
///
/// # Errors
///
/// Returns an error for an unreadable or invalid exercise file, an unknown
/// exercise name, or a phase table that cannot start.
pub async fn run(args: &RunArgs) -> Result<(), MirnoError> {
    let config = load_config(args.config.as_deref())?;
    let session = Session::prepare(&args.session, config.as_deref())?;

    let (mut engine, label) = match &args.exercise {
        Some(name) => {
            let file = config
                .as_deref()
                .ok_or_else(|| TimerError::UnknownExercise(name.clone()))?;
            let exercise = file
                .find(name)
                .ok_or_else(|| TimerError::UnknownExercise(name.clone()))?;
            (TimerEngine::new(exercise.to_table()?), name.clone())
        }
        None => {
            // The stock table carries the milestone announcements; the
            // requested length is applied as a preset while idle.
            let mut engine = TimerEngine::new(PhaseTable::countdown(300));
            engine.set_preset(args.minutes * 60);
            (engine, "transition".to_string())
        }
    };

    engine.start();
    if !engine.is_running() {
        return Err(TimerError::UnusableTable(label).into());
    }

    info!(exercise = %label, seconds = engine.remaining_seconds(), "countdown started");
    let now = Utc::now();
    session.emitter.emit(Event::SessionStarted {
        timestamp: now,
        exercise: label,
        cycle_seconds: engine.table().cycle_seconds(),
    });
    session.emitter.emit(Event::TimerStarted {
        timestamp: now,
        remaining_seconds: engine.remaining_seconds(),
    });

    render(&engine.snapshot());
    let engine = Arc::new(Mutex::new(engine));
    let (handle, mut rx) = Ticker::spawn(Arc::clone(&engine));

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let outcome = loop {
        tokio::select! {
            update = rx.recv() => {
                let Some(update) = update else {
                    break Outcome::Stopped;
                };
                if handle_update(&session, &update) {
                    break Outcome::Completed;
                }
            }
            _ = &mut ctrl_c => {
                engine.lock().expect("timer engine lock poisoned").stop();
                handle.shutdown();
                break Outcome::Interrupted;
            }
        }
    };

    handle.join().await;

    if outcome == Outcome::Interrupted {
        let remaining = engine
            .lock()
            .expect("timer engine lock poisoned")
            .remaining_seconds();
        println!("\n  paused with {remaining} s remaining");
        session.emitter.emit(Event::TimerStopped {
            timestamp: Utc::now(),
            remaining_seconds: remaining,
        });
    }
    session.emitter.emit(Event::SessionEnded {
        timestamp: Utc::now(),
        reason: outcome.reason().to_string(),
    });

    Ok(())
}

/// Renders one tick and handles its announcement. Returns `true` on
/// completion.
fn handle_update(session: &Session, update: &TickUpdate) -> bool {
    render(&update.snapshot);
    let Some(announce) = &update.announce else {
        return false;
    };

    match announce {
        Announce::Milestone {
            message,
            remaining_seconds,
        } => {
            announce_line(message);
            let speech = Arc::clone(&session.speech);
            let text = message.clone();
            tokio::spawn(async move { speech.say(&text).await });
            session.emitter.emit(Event::MilestoneReached {
                timestamp: Utc::now(),
                message: message.clone(),
                remaining_seconds: *remaining_seconds,
            });
            false
        }
        Announce::PhaseStarted { name, index } => {
            announce_line(name);
            session.emitter.emit(Event::PhaseEntered {
                timestamp: Utc::now(),
                phase_name: name.clone(),
                phase_index: *index,
            });
            false
        }
        Announce::Completed { message } => {
            announce_line(message);
            if session.beep {
                print!("\u{7}");
            }
            let speech = Arc::clone(&session.speech);
            let text = message.clone();
            tokio::spawn(async move { speech.say(&text).await });
            session.emitter.emit(Event::TimerCompleted {
                timestamp: Utc::now(),
                message: message.clone(),
            });
            true
        }
    }
}
