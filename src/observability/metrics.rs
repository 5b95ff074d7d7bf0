//! Operation counters for a document store
//!
//! - Counters only increase, except the live document count
//! - Reset only when the store is created
//! - Atomic so read paths (`search`, `find_by_id`) can count through `&self`

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Counters for one `DocumentStore`
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Successful saves
    saves: AtomicU64,
    /// Saves that created a new entry
    inserts: AtomicU64,
    /// Saves that replaced an existing entry
    overwrites: AtomicU64,
    /// Supplied ids that were replaced because they were taken
    ids_regenerated: AtomicU64,
    /// Saves rejected with an error
    saves_rejected: AtomicU64,
    /// Search calls
    searches: AtomicU64,
    /// Lookup calls
    lookups: AtomicU64,
    /// Lookups that found nothing
    lookup_misses: AtomicU64,
    /// Documents currently stored
    documents: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new metrics registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful save
    pub fn record_save(&self, inserted: bool) {
        self.saves.fetch_add(1, Ordering::Relaxed);
        if inserted {
            self.inserts.fetch_add(1, Ordering::Relaxed);
        } else {
            self.overwrites.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn increment_ids_regenerated(&self) {
        self.ids_regenerated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_saves_rejected(&self) {
        self.saves_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_searches(&self) {
        self.searches.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup and whether it found a document
    pub fn record_lookup(&self, hit: bool) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        if !hit {
            self.lookup_misses.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Set document count
    pub fn set_documents(&self, count: u64) {
        self.documents.store(count, Ordering::Relaxed);
    }

    /// Get a point-in-time copy of every counter
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            saves: self.saves.load(Ordering::Relaxed),
            inserts: self.inserts.load(Ordering::Relaxed),
            overwrites: self.overwrites.load(Ordering::Relaxed),
            ids_regenerated: self.ids_regenerated.load(Ordering::Relaxed),
            saves_rejected: self.saves_rejected.load(Ordering::Relaxed),
            searches: self.searches.load(Ordering::Relaxed),
            lookups: self.lookups.load(Ordering::Relaxed),
            lookup_misses: self.lookup_misses.load(Ordering::Relaxed),
            documents: self.documents.load(Ordering::Relaxed),
        }
    }

    /// Current counters as a JSON object
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.snapshot()).unwrap_or_else(|_| "{}".to_string())
    }
}

/// A point-in-time snapshot of all metrics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub saves: u64,
    pub inserts: u64,
    pub overwrites: u64,
    pub ids_regenerated: u64,
    pub saves_rejected: u64,
    pub searches: u64,
    pub lookups: u64,
    pub lookup_misses: u64,
    pub documents: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_registry_has_zero_values() {
        let registry = MetricsRegistry::new();
        assert_eq!(registry.snapshot(), MetricsSnapshot::default());
    }

    #[test]
    fn test_save_counters() {
        let registry = MetricsRegistry::new();
        registry.record_save(true);
        registry.record_save(true);
        registry.record_save(false);
        registry.increment_ids_regenerated();
        registry.increment_saves_rejected();

        let snap = registry.snapshot();
        assert_eq!(snap.saves, 3);
        assert_eq!(snap.inserts, 2);
        assert_eq!(snap.overwrites, 1);
        assert_eq!(snap.ids_regenerated, 1);
        assert_eq!(snap.saves_rejected, 1);
    }

    #[test]
    fn test_lookup_counters() {
        let registry = MetricsRegistry::new();
        registry.record_lookup(true);
        registry.record_lookup(false);
        registry.increment_searches();

        let snap = registry.snapshot();
        assert_eq!(snap.lookups, 2);
        assert_eq!(snap.lookup_misses, 1);
        assert_eq!(snap.searches, 1);
    }

    #[test]
    fn test_to_json() {
        let registry = MetricsRegistry::new();
        registry.set_documents(7);

        let parsed: serde_json::Value = serde_json::from_str(&registry.to_json()).unwrap();
        assert_eq!(parsed["documents"], 7);
        assert_eq!(parsed["saves"], 0);
    }
}
