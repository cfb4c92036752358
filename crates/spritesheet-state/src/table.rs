//! Copy-on-write entity tables.
//!
//! A table is an insertion-ordered map from id to record. Both the map and
//! each record sit behind an [`Arc`], so a transition that touches one record
//! clones the map's pointer array and that record only. Everything else stays
//! shared with the previous state.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// Normalized collection of records keyed by id.
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityTable<K, V>
where
    K: Hash + Eq,
{
    records: Arc<IndexMap<K, Arc<V>>>,
}

impl<K, V> EntityTable<K, V>
where
    K: Hash + Eq,
{
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Arc::new(IndexMap::new()),
        }
    }

    /// Returns the record stored under `id`.
    #[must_use]
    pub fn get(&self, id: &K) -> Option<&V> {
        self.records.get(id).map(AsRef::as_ref)
    }

    /// Checks whether a record is stored under `id`.
    #[must_use]
    pub fn contains(&self, id: &K) -> bool {
        self.records.contains_key(id)
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Checks whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.records.iter().map(|(id, record)| (id, record.as_ref()))
    }

    /// Iterates ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &K> + '_ {
        self.records.keys()
    }

    /// Checks whether two tables point at the same storage.
    #[must_use]
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.records, &other.records)
    }

    /// Checks whether the record under `id` is the same allocation in both tables.
    #[must_use]
    pub fn shares_record_with(&self, other: &Self, id: &K) -> bool {
        match (self.records.get(id), other.records.get(id)) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<K, V> EntityTable<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Returns a table with `record` stored under `id`, appended at the end.
    pub(crate) fn with_inserted(&self, id: K, record: V) -> Self {
        let mut records = Arc::clone(&self.records);
        Arc::make_mut(&mut records).insert(id, Arc::new(record));
        Self { records }
    }

    /// Returns a table with the record under `id` removed.
    ///
    /// Remaining records keep their relative order.
    pub(crate) fn without(&self, id: &K) -> Self {
        if !self.contains(id) {
            return self.clone();
        }
        let mut records = Arc::clone(&self.records);
        Arc::make_mut(&mut records).shift_remove(id);
        Self { records }
    }
}

impl<K, V> EntityTable<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Returns a table where the record under `id` has been passed through `update`.
    ///
    /// An absent id returns a table sharing storage with `self`.
    pub(crate) fn with_updated(&self, id: &K, update: impl FnOnce(&mut V)) -> Self {
        if !self.contains(id) {
            return self.clone();
        }
        let mut records = Arc::clone(&self.records);
        if let Some(record) = Arc::make_mut(&mut records).get_mut(id) {
            update(Arc::make_mut(record));
        }
        Self { records }
    }
}

impl<K, V> Clone for EntityTable<K, V>
where
    K: Hash + Eq,
{
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

impl<K, V> Default for EntityTable<K, V>
where
    K: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> PartialEq for EntityTable<K, V>
where
    K: Hash + Eq,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.shares_storage_with(other) || self.records == other.records
    }
}

impl<K, V> fmt::Debug for EntityTable<K, V>
where
    K: Hash + Eq + fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
