//! In-memory store
//!
//! Backing for tests and for running without persistence (`--no-store`).

use dashmap::DashMap;

use super::KeyValue;

/// Volatile key-value store; contents are lost when dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: DashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValue for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|v| v.clone())
    }

    fn set(&self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) {
        self.entries.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert!(store.get("k").is_none());

        store.set("k", "v".to_string());
        assert_eq!(store.get("k").as_deref(), Some("v"));

        store.set("k", "w".to_string());
        assert_eq!(store.get("k").as_deref(), Some("w"));

        store.remove("k");
        assert!(store.get("k").is_none());
    }

    #[test]
    fn test_len() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        store.set("a", "1".to_string());
        store.set("b", "2".to_string());
        assert_eq!(store.len(), 2);
    }
}
