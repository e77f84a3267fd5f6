//! Shared session wiring
//!
//! Everything a timer session needs besides the engine itself: the local
//! store, the loaded settings, the speech capability, and the event
//! emitter. Built once per `run`/`breathe` invocation.

use std::io::Write as _;
use std::sync::Arc;

use tracing::warn;

use crate::cli::args::SessionArgs;
use crate::config::{ConfigLoader, ExerciseFile};
use crate::error::MirnoError;
use crate::observability::EventEmitter;
use crate::speech::{self, Speech};
use crate::store::{FileStore, KeyValue, MemoryStore};
use crate::timer::TimerSnapshot;
use crate::tools::ViewSettings;

/// Session-scoped collaborators.
pub struct Session {
    /// The local key-value store (in-memory with `--no-store`).
    pub store: Arc<dyn KeyValue>,
    /// Settings loaded from the store.
    pub settings: ViewSettings,
    /// Speech capability, already gated on the effective speech setting.
    pub speech: Arc<dyn Speech>,
    /// JSONL event emitter (`noop` unless `--events-file` is given).
    pub emitter: EventEmitter,
    /// Ring the bell on completion.
    pub beep: bool,
}

impl Session {
    /// Wires up a session from CLI options and optional config defaults.
    ///
    /// # Errors
    ///
    /// Returns an I/O error only if the requested events file cannot be
    /// created. Store and speech problems degrade silently.
    pub fn prepare(
        args: &SessionArgs,
        config: Option<&ExerciseFile>,
    ) -> Result<Self, MirnoError> {
        let store: Arc<dyn KeyValue> = if args.no_store {
            Arc::new(MemoryStore::new())
        } else {
            Arc::new(FileStore::open(&args.store))
        };

        let settings = ViewSettings::load(store.as_ref());

        let config_command = config
            .and_then(|c| c.speech.as_ref())
            .and_then(|s| s.command.as_deref());
        let command = args.speech_cmd.as_deref().or(config_command);
        let speech = speech::from_command(command, settings.enable_speech || args.speak);

        let emitter = match &args.events_file {
            Some(path) => EventEmitter::from_file(path)?,
            None => EventEmitter::noop(),
        };

        Ok(Self {
            store,
            settings,
            speech,
            emitter,
            beep: settings.enable_beep || args.beep,
        })
    }
}

/// Loads the exercise file if one was given, logging any warnings.
///
/// # Errors
///
/// Returns the loader's configuration error unchanged.
pub fn load_config(
    path: Option<&std::path::Path>,
) -> Result<Option<Arc<ExerciseFile>>, MirnoError> {
    let Some(path) = path else {
        return Ok(None);
    };
    let result = ConfigLoader::with_defaults().load(path)?;
    for warning in &result.warnings {
        warn!(
            location = warning.location.as_deref().unwrap_or("<unknown>"),
            "{}", warning.message
        );
    }
    Ok(Some(result.config))
}

/// Redraws the countdown line in place.
pub fn render(snapshot: &TimerSnapshot) {
    print!("\r  {:<12} {}   ", snapshot.phase_name, snapshot.clock());
    let _ = std::io::stdout().flush();
}

/// Prints an announcement on its own line.
pub fn announce_line(message: &str) {
    println!("\n  {message}");
}
