//! Key-value store boundary
//!
//! The persistent tool state (settings, schedule, reflections) lives in a
//! small namespaced key-value store holding serialized JSON records. The
//! store is best-effort and non-authoritative: a corrupt or missing value
//! falls back to a hardcoded default, and write failures are logged and
//! swallowed. Nothing here can surface an error to the user.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Well-known store keys. The version suffix is bumped whenever the record
/// layout changes, so older persisted values simply fall back to defaults.
pub mod keys {
    /// Low-stim view settings.
    pub const SETTINGS: &str = "mirno:settings:v3";
    /// Visual schedule items.
    pub const SCHEDULE: &str = "mirno:schedule:v2";
    /// Reflection answers.
    pub const REFLECTIONS: &str = "mirno:reflections:v1";
}

/// Minimal key-value storage over serialized JSON string values.
///
/// Implementations must be infallible from the caller's point of view:
/// failures are handled (and at most logged) internally.
pub trait KeyValue: Send + Sync {
    /// Returns the stored value for `key`, if present.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: String);

    /// Removes the value stored under `key`, if any.
    fn remove(&self, key: &str);
}

/// Loads and deserializes the record under `key`, substituting the fallback
/// on absence or corruption. Never fails.
pub fn load_or<T, F>(store: &dyn KeyValue, key: &str, fallback: F) -> T
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    match store.get(key) {
        Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            debug!(key, error = %e, "stored value is corrupt; using default");
            fallback()
        }),
        None => fallback(),
    }
}

/// Serializes and stores a record under `key`. Serialization failure is
/// logged and swallowed.
pub fn save<T: Serialize>(store: &dyn KeyValue, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => store.set(key, raw),
        Err(e) => warn!(key, error = %e, "failed to serialize record; value not saved"),
    }
}
