//! Speech capability
//!
//! Announcements can optionally be spoken aloud. Speech is an external
//! capability invoked with plain text, fire-and-forget: no return value, no
//! error surface. An environment without a usable speech command simply
//! gets the null speaker, and any spawn failure is logged at debug level
//! and forgotten.

use std::process::Stdio;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

/// Fire-and-forget text-to-speech seam.
#[async_trait]
pub trait Speech: Send + Sync {
    /// Speaks `text`. Must not block on playback and must not fail.
    async fn say(&self, text: &str);
}

/// Speaks by spawning an external command with the text appended as the
/// final argument (e.g. `espeak-ng -v en`).
#[derive(Debug)]
pub struct CommandSpeech {
    program: String,
    args: Vec<String>,
}

#[async_trait]
impl Speech for CommandSpeech {
    async fn say(&self, text: &str) {
        let spawned = tokio::process::Command::new(&self.program)
            .args(&self.args)
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(mut child) => {
                // Detach: reap in the background, never wait on playback
                tokio::spawn(async move {
                    let _ = child.wait().await;
                });
            }
            Err(e) => debug!(program = %self.program, error = %e, "speech command failed to spawn"),
        }
    }
}

/// Silently swallows everything. Used when speech is disabled or the
/// configured command is unusable.
#[derive(Debug, Default)]
pub struct NullSpeech;

#[async_trait]
impl Speech for NullSpeech {
    async fn say(&self, _text: &str) {}
}

/// Builds a speaker from an optional command line.
///
/// `enabled` reflects the `enable_speech` setting; a disabled, absent,
/// empty, or unparseable command all degrade to the null speaker.
#[must_use]
pub fn from_command(command: Option<&str>, enabled: bool) -> Arc<dyn Speech> {
    if !enabled {
        return Arc::new(NullSpeech);
    }
    let Some(command) = command.map(str::trim).filter(|c| !c.is_empty()) else {
        return Arc::new(NullSpeech);
    };
    match shlex::split(command) {
        Some(parts) if !parts.is_empty() => {
            let mut parts = parts.into_iter();
            let program = parts.next().unwrap_or_default();
            Arc::new(CommandSpeech {
                program,
                args: parts.collect(),
            })
        }
        _ => {
            warn!(command, "speech command could not be parsed; speech disabled");
            Arc::new(NullSpeech)
        }
    }
}
