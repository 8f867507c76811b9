//! In-progress species tally for one checklist
//!
//! Insertion-ordered sequence of (species, count) entries with at most one
//! entry per species name. Owned by a single page view-model for the
//! lifetime of the page session; serialized (not retained) on submit.

use crate::models::{NewSighting, SightingUpdate, TallyEntry};

/// Tally of observed species and counts for one checklist
#[derive(Debug, Clone, Default)]
pub struct TallyLedger {
    entries: Vec<TallyEntry>,
}

impl TallyLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the ledger from stored entries (checklist edit flow)
    pub fn restore(entries: Vec<TallyEntry>) -> Self {
        Self { entries }
    }

    /// Add a species: increment its count when an entry already exists,
    /// otherwise append a new entry with count 1.
    pub fn add(&mut self, name: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.name == name) {
            entry.count += 1;
        } else {
            self.entries.push(TallyEntry::new(name));
        }
    }

    /// Increment a species count. No-op when the species is absent.
    pub fn increment(&mut self, name: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.name == name) {
            entry.count += 1;
        }
    }

    /// Decrement a species count, floored at zero. Never removes the
    /// entry; no-op when the count is already zero or the species absent.
    pub fn decrement(&mut self, name: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.name == name) {
            if entry.count > 0 {
                entry.count -= 1;
            }
        }
    }

    /// Remove a species entry by name. Idempotent: removing an absent
    /// species is a no-op.
    pub fn remove(&mut self, name: &str) {
        self.entries.retain(|e| e.name != name);
    }

    pub fn entries(&self) -> &[TallyEntry] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&TallyEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clear all entries (after a confirmed successful submit)
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Name-keyed serialization for the creation flow
    pub fn to_new_sightings(&self) -> Vec<NewSighting> {
        self.entries
            .iter()
            .map(|e| NewSighting {
                name: e.name.clone(),
                count: e.count,
            })
            .collect()
    }

    /// Id-keyed serialization for the edit flow; entries added during the
    /// session carry a `null` id
    pub fn to_sighting_updates(&self) -> Vec<SightingUpdate> {
        self.entries
            .iter()
            .map(|e| SightingUpdate {
                id: e.id,
                species_name: e.name.clone(),
                number: e.count,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_twice_yields_one_entry_with_count_two() {
        let mut ledger = TallyLedger::new();
        ledger.add("Blue Jay");
        ledger.add("Blue Jay");
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.get("Blue Jay").unwrap().count, 2);
    }

    #[test]
    fn entries_keep_insertion_order() {
        let mut ledger = TallyLedger::new();
        ledger.add("Blue Jay");
        ledger.add("American Robin");
        ledger.add("Blue Jay");
        let names: Vec<&str> = ledger.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Blue Jay", "American Robin"]);
    }

    #[test]
    fn decrement_floors_at_zero() {
        let mut ledger = TallyLedger::restore(vec![TallyEntry {
            id: None,
            name: "Blue Jay".to_string(),
            count: 0,
        }]);
        ledger.decrement("Blue Jay");
        assert_eq!(ledger.get("Blue Jay").unwrap().count, 0);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn decrement_then_increment_round_trips() {
        let mut ledger = TallyLedger::new();
        ledger.add("Blue Jay");
        ledger.increment("Blue Jay");
        ledger.decrement("Blue Jay");
        assert_eq!(ledger.get("Blue Jay").unwrap().count, 1);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut ledger = TallyLedger::new();
        ledger.add("Blue Jay");
        ledger.add("American Robin");
        ledger.remove("Blue Jay");
        assert_eq!(ledger.len(), 1);
        ledger.remove("Blue Jay");
        assert_eq!(ledger.len(), 1);
        assert!(ledger.get("American Robin").is_some());
    }

    #[test]
    fn increment_of_absent_species_is_noop() {
        let mut ledger = TallyLedger::new();
        ledger.increment("Blue Jay");
        assert!(ledger.is_empty());
    }

    #[test]
    fn serializes_name_keyed_for_creation() {
        let mut ledger = TallyLedger::new();
        ledger.add("Blue Jay");
        ledger.add("Blue Jay");
        let sightings = ledger.to_new_sightings();
        assert_eq!(sightings.len(), 1);
        assert_eq!(sightings[0].name, "Blue Jay");
        assert_eq!(sightings[0].count, 2);
    }

    #[test]
    fn serializes_id_keyed_for_edit_with_null_ids_for_new_entries() {
        let mut ledger = TallyLedger::restore(vec![TallyEntry {
            id: Some(7),
            name: "American Robin".to_string(),
            count: 3,
        }]);
        ledger.add("Blue Jay");
        let updates = ledger.to_sighting_updates();
        assert_eq!(updates.len(), 2);
        assert_eq!(updates[0].id, Some(7));
        assert_eq!(updates[0].number, 3);
        assert_eq!(updates[1].id, None);
        assert_eq!(updates[1].species_name, "Blue Jay");
    }
}
