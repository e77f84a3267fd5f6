//! Clock source
//!
//! The engine never blocks and never owns the wait between ticks. The
//! `Ticker` is the one scheduling handle per engine instance: a spawned
//! task driven by a one-second interval, cancelled through a
//! `CancellationToken`. Dropping the handle cancels the task, so a
//! destroyed view can never receive a late tick.
//!
//! Each tick is fully processed (including any phase-boundary transition)
//! before the next one can fire, and updates are forwarded to the
//! presentation side over an unbounded channel.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::announce::Announce;
use super::engine::{TimerEngine, TimerSnapshot};

/// What the presentation side receives once per delivered tick.
#[derive(Debug, Clone)]
pub struct TickUpdate {
    /// Engine state after the tick was processed.
    pub snapshot: TimerSnapshot,
    /// Announcement crossed by this tick, if any.
    pub announce: Option<Announce>,
}

/// Spawns tick tasks for a shared engine.
#[derive(Debug)]
pub struct Ticker;

impl Ticker {
    /// Spawns the tick task for `engine`.
    ///
    /// Ticks are delivered once per second, only while the engine is
    /// running; a paused engine keeps its remaining time untouched. The
    /// task ends on cancellation, when the receiver is dropped, or after
    /// forwarding a completion announcement.
    #[must_use]
    pub fn spawn(
        engine: Arc<Mutex<TimerEngine>>,
    ) -> (TickerHandle, mpsc::UnboundedReceiver<TickUpdate>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        let task_cancel = cancel.clone();

        let task = tokio::spawn(async move {
            let period = Duration::from_secs(1);
            let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
            loop {
                // Biased so that cancellation always wins over an elapsed
                // interval: no tick is ever delivered after teardown.
                tokio::select! {
                    biased;
                    () = task_cancel.cancelled() => {
                        debug!("tick task cancelled");
                        break;
                    }
                    _ = interval.tick() => {
                        let step = {
                            let mut engine = engine.lock().expect("timer engine lock poisoned");
                            if engine.is_running() {
                                let announce = engine.tick();
                                Some((engine.snapshot(), announce))
                            } else {
                                None
                            }
                        };

                        let Some((snapshot, announce)) = step else {
                            continue;
                        };
                        let completed =
                            announce.as_ref().is_some_and(Announce::is_completion);
                        if tx.send(TickUpdate { snapshot, announce }).is_err() {
                            debug!("tick receiver dropped; stopping tick task");
                            break;
                        }
                        if completed {
                            break;
                        }
                    }
                }
            }
        });

        (TickerHandle { cancel, task: Some(task) }, rx)
    }
}

/// Owned handle to a running tick task.
///
/// Dropping the handle cancels the task; [`shutdown`](Self::shutdown) does
/// the same explicitly, and [`join`](Self::join) waits for the task to
/// finish.
#[derive(Debug)]
pub struct TickerHandle {
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl TickerHandle {
    /// Cancels the tick task. No further tick will be delivered.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }

    /// Waits for the tick task to finish.
    pub async fn join(mut self) {
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }

    /// Returns `true` once the tick task has ended.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().is_none_or(JoinHandle::is_finished)
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

// ============================================================================
// Tests
// ============================================================================
