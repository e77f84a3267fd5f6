//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod breathe;
pub mod completions;
pub mod list;
pub mod run;
pub mod schedule;
pub mod session;
pub mod validate;
pub mod version;

use crate::cli::args::{Cli, Commands};
use crate::error::MirnoError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub async fn dispatch(cli: Cli) -> Result<(), MirnoError> {
    match cli.command {
        Commands::Run(args) => run::run(&args).await,
        Commands::Breathe(args) => breathe::run(&args).await,
        Commands::Schedule(cmd) => schedule::run(&cmd),
        Commands::Validate(args) => validate::run(&args),
        Commands::List(args) => list::run(&args),
        Commands::Completions(args) => {
            completions::run(&args);
            Ok(())
        }
        Commands::Version(args) => {
            version::run(&args);
            Ok(())
        }
    }
}
