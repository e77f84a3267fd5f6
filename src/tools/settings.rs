//! Low-stim view settings
//!
//! Per-view presentation and sound preferences. Updates are immutable:
//! each `with_*` function returns a new value, and the caller decides when
//! to persist it.

use serde::{Deserialize, Serialize};

use crate::store::{self, KeyValue, keys};

/// Presentation and sound preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    /// Larger text throughout the view.
    pub large_text: bool,
    /// Fewer animations. On by default.
    pub reduced_motion: bool,
    /// High-contrast edges while keeping dark text on a light background.
    pub high_contrast: bool,
    /// Speak announcements through the speech capability.
    pub enable_speech: bool,
    /// Terminal bell when a countdown completes.
    pub enable_beep: bool,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            large_text: false,
            reduced_motion: true,
            high_contrast: false,
            enable_speech: false,
            enable_beep: false,
        }
    }
}

impl ViewSettings {
    /// Loads the persisted settings, falling back to defaults.
    #[must_use]
    pub fn load(store: &dyn KeyValue) -> Self {
        store::load_or(store, keys::SETTINGS, Self::default)
    }

    /// Persists this value.
    pub fn save(&self, store: &dyn KeyValue) {
        store::save(store, keys::SETTINGS, self);
    }

    /// Returns a copy with `large_text` replaced.
    #[must_use]
    pub const fn with_large_text(mut self, on: bool) -> Self {
        self.large_text = on;
        self
    }

    /// Returns a copy with `reduced_motion` replaced.
    #[must_use]
    pub const fn with_reduced_motion(mut self, on: bool) -> Self {
        self.reduced_motion = on;
        self
    }

    /// Returns a copy with `high_contrast` replaced.
    #[must_use]
    pub const fn with_high_contrast(mut self, on: bool) -> Self {
        self.high_contrast = on;
        self
    }

    /// Returns a copy with `enable_speech` replaced.
    #[must_use]
    pub const fn with_speech(mut self, on: bool) -> Self {
        self.enable_speech = on;
        self
    }

    /// Returns a copy with `enable_beep` replaced.
    #[must_use]
    pub const fn with_beep(mut self, on: bool) -> Self {
        self.enable_beep = on;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_defaults() {
        let s = ViewSettings::default();
        assert!(!s.large_text);
        assert!(s.reduced_motion);
        assert!(!s.high_contrast);
        assert!(!s.enable_speech);
        assert!(!s.enable_beep);
    }

    #[test]
    fn test_immutable_updates() {
        let base = ViewSettings::default();
        let updated = base.with_speech(true).with_beep(true);
        assert!(updated.enable_speech);
        assert!(updated.enable_beep);
        // The original value is untouched
        assert!(!base.enable_speech);
    }

    #[test]
    fn test_round_trip() {
        let store = MemoryStore::new();
        let settings = ViewSettings::default()
            .with_large_text(true)
            .with_high_contrast(true);
        settings.save(&store);
        assert_eq!(ViewSettings::load(&store), settings);
    }

    #[test]
    fn test_load_corrupt_falls_back() {
        let store = MemoryStore::new();
        store.set(keys::SETTINGS, "nonsense".to_string());
        assert_eq!(ViewSettings::load(&store), ViewSettings::default());
    }

    #[test]
    fn test_load_partial_record_fills_defaults() {
        // An older persisted shape with missing fields still loads.
        let store = MemoryStore::new();
        store.set(keys::SETTINGS, r#"{"large_text":true}"#.to_string());
        let settings = ViewSettings::load(&store);
        assert!(settings.large_text);
        assert!(settings.reduced_motion);
    }
}
