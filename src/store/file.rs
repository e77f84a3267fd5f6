//! File-backed store
//!
//! A single JSON document on disk holding every key-value pair. The file is
//! read once at open and written through on every mutation. All I/O and
//! parse failures degrade to an empty or unchanged store with a log line;
//! opening a store can therefore never fail.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, warn};

use super::KeyValue;

/// Persistent key-value store backed by one JSON file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Opens the store at `path`, reading any existing document.
    ///
    /// A missing file starts an empty store; a corrupt one is discarded
    /// with a warning (it will be overwritten on the next write).
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "store file is corrupt; starting empty");
                BTreeMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot read store file; starting empty");
                BTreeMap::new()
            }
        };
        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the whole document back to disk. Failures are logged and
    /// swallowed — persistence is best-effort.
    fn flush(&self, entries: &BTreeMap<String, String>) {
        let Ok(raw) = serde_json::to_string_pretty(entries) else {
            return;
        };
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                let _ = std::fs::create_dir_all(parent);
            }
        }
        if let Err(e) = std::fs::write(&self.path, raw) {
            warn!(path = %self.path.display(), error = %e, "failed to write store file");
        } else {
            debug!(path = %self.path.display(), "store flushed");
        }
    }
}

impl KeyValue for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .expect("store lock poisoned")
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: String) {
        let mut entries = self.entries.lock().expect("store lock poisoned");
        entries.insert(key.to_string(), value);
        self.flush(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.entries.lock().expect("store lock poisoned");
        if entries.remove(key).is_some() {
            self.flush(&entries);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_starts_empty() {
        let dir = tempdir().unwrap();
        let store = FileStore::open(dir.path().join("store.json"));
        assert!(store.get("anything").is_none());
    }

    #[test]
    fn test_write_through_and_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");

        let store = FileStore::open(&path);
        store.set("greeting", "\"hello\"".to_string());
        drop(store);

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("greeting").as_deref(), Some("\"hello\""));
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "][ definitely not json").unwrap();

        let store = FileStore::open(&path);
        assert!(store.get("anything").is_none());

        // The next write replaces the corrupt document
        store.set("k", "\"v\"".to_string());
        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("k").as_deref(), Some("\"v\""));
    }

    #[test]
    fn test_remove_persists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");

        let store = FileStore::open(&path);
        store.set("k", "\"v\"".to_string());
        store.remove("k");

        let reopened = FileStore::open(&path);
        assert!(reopened.get("k").is_none());
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deep").join("store.json");

        let store = FileStore::open(&path);
        store.set("k", "\"v\"".to_string());
        assert!(path.exists());
    }

    #[test]
    fn test_unwritable_path_is_tolerated() {
        // Writes fail silently; reads keep working from memory.
        let store = FileStore::open("/proc/mirno-definitely-not-writable/store.json");
        store.set("k", "\"v\"".to_string());
        assert_eq!(store.get("k").as_deref(), Some("\"v\""));
    }
}
