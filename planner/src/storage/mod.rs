//! Persistence adapter
//!
//! Maps day records onto the single persisted envelope. Reads never fail:
//! a missing or corrupt envelope degrades to empty-day semantics with a
//! warning. Writes rewrite the whole envelope and report success as a bool;
//! there is no partial update and no transactional isolation — with two
//! concurrent writers the later write wins, an accepted limitation for a
//! single-operator tool.

mod store;

use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use shared::DayData;

pub use store::{JsonFileStore, MemoryStore, Store};

/// The one persisted record: every stored day plus a last-write stamp
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    #[serde(default)]
    pub days: BTreeMap<String, DayData>,
    #[serde(default)]
    pub last_updated: String,
}

impl Default for Envelope {
    fn default() -> Self {
        Self {
            days: BTreeMap::new(),
            last_updated: Utc::now().to_rfc3339(),
        }
    }
}

/// Day-level operations over an injected [`Store`] handle
#[derive(Debug)]
pub struct DayStore<S: Store> {
    store: S,
}

impl<S: Store> DayStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    fn read_envelope(&self) -> Envelope {
        let raw = match self.store.get() {
            Ok(Some(raw)) => raw,
            Ok(None) => return Envelope::default(),
            Err(e) => {
                tracing::warn!(error = %e, "store read failed, treating as empty");
                return Envelope::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(envelope) => envelope,
            Err(e) => {
                tracing::warn!(error = %e, "stored envelope is corrupt, treating as empty");
                Envelope::default()
            }
        }
    }

    fn write_envelope(&mut self, mut envelope: Envelope) -> bool {
        envelope.last_updated = Utc::now().to_rfc3339();
        let raw = match serde_json::to_string_pretty(&envelope) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "envelope serialization failed, write dropped");
                return false;
            }
        };
        match self.store.set(&raw) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "store write failed, write dropped");
                false
            }
        }
    }

    /// The stored day, or a fresh empty day for unknown dates. Never fails.
    pub fn load_day(&self, date: &str) -> DayData {
        self.read_envelope()
            .days
            .get(date)
            .cloned()
            .unwrap_or_else(|| DayData::empty(date))
    }

    /// Upsert the day under its own date. Returns whether the write landed.
    pub fn save_day(&mut self, day: &DayData) -> bool {
        let mut envelope = self.read_envelope();
        envelope.days.insert(day.date.clone(), day.clone());
        let ok = self.write_envelope(envelope);
        if ok {
            tracing::debug!(date = %day.date, "day saved");
        }
        ok
    }

    /// Remove the day if present; an absent date is a successful no-op
    pub fn delete_day(&mut self, date: &str) -> bool {
        let mut envelope = self.read_envelope();
        if envelope.days.remove(date).is_none() {
            return true;
        }
        let ok = self.write_envelope(envelope);
        if ok {
            tracing::debug!(date = %date, "day deleted");
        }
        ok
    }

    /// Copy `from`'s orders under `to` as an independent value; an absent
    /// source is a successful no-op
    pub fn duplicate_day(&mut self, from: &str, to: &str) -> bool {
        let mut envelope = self.read_envelope();
        let Some(source) = envelope.days.get(from).cloned() else {
            return true;
        };
        envelope.days.insert(to.to_string(), source.with_date(to));
        let ok = self.write_envelope(envelope);
        if ok {
            tracing::debug!(from = %from, to = %to, "day duplicated");
        }
        ok
    }

    /// Drop every stored day
    pub fn clear_all(&mut self) -> bool {
        self.write_envelope(Envelope::default())
    }

    /// All stored dates, ascending. Lexicographic order is chronological
    /// because the date format is fixed-width.
    pub fn list_dates(&self) -> Vec<String> {
        self.read_envelope().days.into_keys().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Room;

    fn day_with_order(date: &str) -> DayData {
        let mut day = DayData::empty(date);
        let room = day.room_mut(Room::R101);
        room.set_guest_counts(3, 2);
        room.set_breakfast_time("08:00").unwrap();
        day
    }

    #[test]
    fn test_fresh_store_loads_empty_day() {
        let store = DayStore::new(MemoryStore::new());
        let day = store.load_day("2025-01-01");
        assert_eq!(day.date, "2025-01-01");
        assert_eq!(day.rooms().count(), 6);
        assert!(day.rooms().all(|r| r.guest_count == 0 && !r.is_complete));
    }

    #[test]
    fn test_save_load_round_trip() {
        let mut store = DayStore::new(MemoryStore::new());
        let day = day_with_order("2025-01-01");
        assert!(store.save_day(&day));
        assert_eq!(store.load_day("2025-01-01"), day);
    }

    #[test]
    fn test_corrupt_envelope_degrades_to_empty() {
        let mut backing = MemoryStore::new();
        backing.set("{not json").unwrap();
        let mut store = DayStore::new(backing);

        let day = store.load_day("2025-01-01");
        assert!(!day.has_orders());

        // The store stays usable: the next save replaces the corrupt record
        assert!(store.save_day(&day_with_order("2025-01-01")));
        assert!(store.load_day("2025-01-01").has_orders());
    }

    #[test]
    fn test_delete_absent_is_noop_success() {
        let mut store = DayStore::new(MemoryStore::new());
        assert!(store.delete_day("2025-01-01"));

        store.save_day(&day_with_order("2025-01-01"));
        assert!(store.delete_day("2025-01-01"));
        assert!(!store.load_day("2025-01-01").has_orders());
    }

    #[test]
    fn test_duplicate_day_is_independent_copy() {
        let mut store = DayStore::new(MemoryStore::new());
        store.save_day(&day_with_order("2025-01-01"));
        assert!(store.duplicate_day("2025-01-01", "2025-01-02"));

        let mut copy = store.load_day("2025-01-02");
        assert_eq!(copy.date, "2025-01-02");
        assert!(copy.room(Room::R101).qualifies());

        // Mutating and saving the copy leaves the source untouched
        copy.clear_room(Room::R101);
        store.save_day(&copy);
        assert!(store.load_day("2025-01-01").room(Room::R101).qualifies());
    }

    #[test]
    fn test_duplicate_missing_source_is_noop() {
        let mut store = DayStore::new(MemoryStore::new());
        assert!(store.duplicate_day("2025-01-01", "2025-01-02"));
        assert!(store.list_dates().is_empty());
    }

    #[test]
    fn test_list_dates_sorted() {
        let mut store = DayStore::new(MemoryStore::new());
        for date in ["2025-03-02", "2025-01-10", "2025-02-01"] {
            store.save_day(&DayData::empty(date));
        }
        assert_eq!(
            store.list_dates(),
            vec!["2025-01-10", "2025-02-01", "2025-03-02"]
        );
    }

    #[test]
    fn test_clear_all() {
        let mut store = DayStore::new(MemoryStore::new());
        store.save_day(&day_with_order("2025-01-01"));
        store.save_day(&day_with_order("2025-01-02"));
        assert!(store.clear_all());
        assert!(store.list_dates().is_empty());
    }

    #[test]
    fn test_envelope_wire_layout() {
        let mut store = DayStore::new(MemoryStore::new());
        store.save_day(&day_with_order("2025-01-01"));
        let raw = store.into_inner().get().unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value["days"]["2025-01-01"].is_object());
        assert!(value["lastUpdated"].is_string());
    }

    #[test]
    fn test_write_failure_reported_not_panicked() {
        struct BrokenStore;
        impl Store for BrokenStore {
            fn get(&self) -> Result<Option<String>, crate::StoreError> {
                Err(std::io::Error::other("store offline").into())
            }
            fn set(&mut self, _raw: &str) -> Result<(), crate::StoreError> {
                Err(std::io::Error::other("store offline").into())
            }
            fn delete(&mut self) -> Result<(), crate::StoreError> {
                Err(std::io::Error::other("store offline").into())
            }
        }

        let mut store = DayStore::new(BrokenStore);
        assert!(!store.load_day("2025-01-01").has_orders());
        assert!(!store.save_day(&day_with_order("2025-01-01")));
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("planner.json");

        let mut store = DayStore::new(JsonFileStore::new(&path));
        store.save_day(&day_with_order("2025-01-01"));
        drop(store);

        let reopened = DayStore::new(JsonFileStore::new(&path));
        assert!(reopened.load_day("2025-01-01").has_orders());
    }
}
