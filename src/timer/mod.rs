//! Phased countdown timer
//!
//! Implements the timer mechanism shared by the transition countdown and
//! the calming breathing exercise: a deterministic, tick-driven engine over
//! a static table of named phases.
//!
//! # Architecture
//!
//! - [`PhaseTable`] — Immutable ordered phase sequence (cyclic or terminal)
//! - [`TimerEngine`] — Owns the countdown state, advances on tick, emits announcements
//! - [`Announce`] — Transient announcement values consumed by the presentation side
//! - [`Ticker`] — Owned scheduling handle delivering one tick per second

pub mod announce;
pub mod clock;
pub mod engine;
pub mod phases;

pub use announce::Announce;
pub use clock::{TickUpdate, Ticker, TickerHandle};
pub use engine::{TimerEngine, TimerSnapshot, format_mm_ss};
pub use phases::{Milestone, Phase, PhaseTable};
