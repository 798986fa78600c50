// Mon Oct 19 2026 - Alex

use crate::store::entity::EntityRecord;
use ahash::RandomState;
use indexmap::map::Entry;
use indexmap::IndexMap;
use parking_lot::RwLock;
use std::sync::Arc;

type RecordMap = IndexMap<String, Arc<EntityRecord>, RandomState>;

/// Keyed store written concurrently during generation and read afterwards.
///
/// Records are built completely by the caller and published behind an `Arc`
/// under the write lock, so a reader sees either nothing or the whole record.
/// The first insert for an id wins; later inserts are ignored. Iteration
/// order is publication order.
#[derive(Debug)]
pub struct EntityStore {
    records: RwLock<RecordMap>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(IndexMap::with_hasher(RandomState::new())),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: RwLock::new(IndexMap::with_capacity_and_hasher(capacity, RandomState::new())),
        }
    }

    /// Returns `true` if the record was published, `false` if the id was taken.
    pub fn insert(&self, record: EntityRecord) -> bool {
        let record = Arc::new(record);
        let mut records = self.records.write();
        match records.entry(record.id().to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(record);
                true
            }
            Entry::Occupied(_) => {
                log::warn!("Duplicate entity id {} ignored", record.id());
                false
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<Arc<EntityRecord>> {
        self.records.read().get(id).cloned()
    }

    pub fn get_first(&self) -> Option<Arc<EntityRecord>> {
        self.records.read().first().map(|(_, record)| record.clone())
    }

    pub fn count(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    pub fn ids(&self) -> Vec<String> {
        self.records.read().keys().cloned().collect()
    }

    /// Stable read-only view of everything published so far.
    pub fn snapshot(&self) -> StoreSnapshot {
        let records = self.records.read().values().cloned().collect();
        StoreSnapshot { records }
    }
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Default)]
pub struct StoreSnapshot {
    records: Vec<Arc<EntityRecord>>,
}

impl StoreSnapshot {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &EntityRecord> {
        self.records.iter().map(|record| record.as_ref())
    }

    /// Every sample of every entity, flattened.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().flat_map(|record| record.series().iter().copied())
    }

    pub fn value_count(&self) -> usize {
        self.records.iter().map(|record| record.len()).sum()
    }

    pub fn take(&self, count: usize) -> impl Iterator<Item = &EntityRecord> {
        self.records().take(count)
    }
}
