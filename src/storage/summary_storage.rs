use crate::models::ShipmentSummary;
use crate::storage::Storage;
use crate::types::GroupKey;
use dashmap::iter::Iter;
use dashmap::DashMap;

/// Concurrent in-memory store for finished summaries. Partition workers
/// write disjoint key sets, so writes never contend on the same entry.
pub struct SummaryStorage {
    cache: DashMap<GroupKey, ShipmentSummary>,
}

impl SummaryStorage {
    pub fn new() -> Self {
        Self {
            cache: DashMap::new(),
        }
    }

    pub fn iter(&self) -> Iter<'_, GroupKey, ShipmentSummary> {
        self.cache.iter()
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl Default for SummaryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for SummaryStorage {
    fn load(&self, key: &str) -> Option<ShipmentSummary> {
        self.cache.get(key).map(|entry| entry.value().clone())
    }

    fn save(&self, key: GroupKey, summary: ShipmentSummary) {
        self.cache.insert(key, summary);
    }
}
