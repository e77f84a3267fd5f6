//! Configuration module
//!
//! Handles loading and validation of `mirno` exercise files: named phase
//! tables with milestones, preset lists, and speech/store defaults.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{ConfigLimits, ConfigLoader, LoadResult, LoadWarning, LoaderOptions};
pub use schema::*;
pub use validation::{ValidationResult, Validator};
