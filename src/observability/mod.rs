//! Observability module
//!
//! Logging and structured event infrastructure for following a timer
//! session from the outside.

pub mod events;
pub mod logging;

pub use events::{Event, EventEmitter};
pub use logging::{LogFormat, init_logging};
