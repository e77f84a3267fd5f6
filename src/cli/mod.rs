//! Command-line interface
//!
//! Argument definitions and command handlers. This layer is the
//! presentation adapter: it renders engine snapshots, forwards user
//! intents, and hands announcements to the speech capability.

pub mod args;
pub mod commands;
