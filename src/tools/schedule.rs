//! Visual schedule
//!
//! An ordered day plan the child can check off. Items are stored as
//! entered; the sorted view orders them by minutes since midnight. A fresh
//! store is seeded with a sensible default day.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::{self, KeyValue, keys};

/// One schedule entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleItem {
    /// Opaque item id.
    pub id: String,
    /// Time of day as `HH:MM`.
    pub time: String,
    /// What happens.
    pub title: String,
    /// Checked off.
    pub done: bool,
}

impl ScheduleItem {
    fn new(time: &str, title: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            time: time.to_string(),
            title: title.to_string(),
            done: false,
        }
    }

    /// Minutes since midnight, for ordering. Unparseable times sort first.
    #[must_use]
    pub fn minutes(&self) -> u32 {
        NaiveTime::parse_from_str(&self.time, "%H:%M").map_or(0, |t| {
            use chrono::Timelike;
            t.hour() * 60 + t.minute()
        })
    }
}

/// The whole schedule. Mutating operations return a new value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    items: Vec<ScheduleItem>,
}

impl Schedule {
    /// The default day plan used when nothing is stored yet.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            items: vec![
                ScheduleItem::new("07:30", "Morning routine"),
                ScheduleItem::new("08:00", "Breakfast"),
                ScheduleItem::new("10:30", "Break (quiet spot)"),
                ScheduleItem::new("12:00", "Lunch"),
                ScheduleItem::new("16:00", "Free time"),
            ],
        }
    }

    /// Loads the persisted schedule; an absent, corrupt, or empty record
    /// yields the seeded default.
    #[must_use]
    pub fn load(store: &dyn KeyValue) -> Self {
        let schedule: Self = store::load_or(store, keys::SCHEDULE, Self::default);
        if schedule.items.is_empty() {
            Self::seeded()
        } else {
            schedule
        }
    }

    /// Persists this value.
    pub fn save(&self, store: &dyn KeyValue) {
        store::save(store, keys::SCHEDULE, self);
    }

    /// Drops the persisted schedule so the next load reseeds.
    pub fn clear_stored(store: &dyn KeyValue) {
        store.remove(keys::SCHEDULE);
    }

    /// Items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[ScheduleItem] {
        &self.items
    }

    /// Items ordered by time of day.
    #[must_use]
    pub fn sorted(&self) -> Vec<&ScheduleItem> {
        let mut view: Vec<&ScheduleItem> = self.items.iter().collect();
        view.sort_by_key(|item| item.minutes());
        view
    }

    /// Returns a copy with a new item appended. A whitespace-only title is
    /// a no-op.
    #[must_use]
    pub fn with_added(&self, time: &str, title: &str) -> Self {
        let title = title.trim();
        if title.is_empty() {
            return self.clone();
        }
        let mut items = self.items.clone();
        items.push(ScheduleItem::new(time, title));
        Self { items }
    }

    /// Returns a copy with the `done` flag of `id` flipped. Unknown ids are
    /// left unchanged.
    #[must_use]
    pub fn with_toggled(&self, id: &str) -> Self {
        let items = self
            .items
            .iter()
            .map(|item| {
                if item.id == id {
                    ScheduleItem {
                        done: !item.done,
                        ..item.clone()
                    }
                } else {
                    item.clone()
                }
            })
            .collect();
        Self { items }
    }

    /// Returns a copy without the item `id`.
    #[must_use]
    pub fn with_removed(&self, id: &str) -> Self {
        let items = self
            .items
            .iter()
            .filter(|item| item.id != id)
            .cloned()
            .collect();
        Self { items }
    }
}
