//! Persistent tool state
//!
//! The small typed records behind the classroom tools: low-stim view
//! settings, the visual schedule, the communication phrase cards, and the
//! reflection answers. Each record is a plain value with explicit
//! immutable-update functions and a store-backed `load`/`save` pair —
//! no shared mutable state.

pub mod phrases;
pub mod reflections;
pub mod schedule;
pub mod settings;

pub use phrases::PhraseCard;
pub use reflections::Reflections;
pub use schedule::{Schedule, ScheduleItem};
pub use settings::ViewSettings;
