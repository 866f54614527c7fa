//! Insertion-ordered favorites collection.
//!
//! This module defines [`FavoriteSet`], the authoritative in-memory collection
//! of favorited items. Membership is O(1) via an id index, while a parallel
//! insertion-order list drives the favorites view, which shows items in the
//! order the user favorited them.

use crate::domain::ItemSummary;
use crate::storage::FavoriteRecord;
use std::collections::HashMap;

/// The authoritative collection of favorited items, keyed by catalog id.
///
/// Keys are unique; inserting an id that is already present replaces its
/// record without changing its position. Iteration yields records in
/// insertion order. The set is owned exclusively by the favorites
/// synchronizer, which performs every mutation as a single replace-or-insert
/// on this one structure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FavoriteSet {
    /// Catalog ids in insertion order.
    order: Vec<u64>,

    /// Records indexed by catalog id for O(1) membership.
    by_id: HashMap<u64, FavoriteRecord>,
}

impl FavoriteSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a set from ordered storage records.
    ///
    /// Duplicate ids keep their first position, matching insert semantics.
    #[must_use]
    pub fn from_records(records: Vec<FavoriteRecord>) -> Self {
        let mut set = Self::new();
        for record in records {
            set.insert_record(record);
        }
        set
    }

    /// Returns the records in insertion order, as written to storage.
    #[must_use]
    pub fn records(&self) -> Vec<FavoriteRecord> {
        self.order
            .iter()
            .filter_map(|id| self.by_id.get(id))
            .cloned()
            .collect()
    }

    /// O(1) membership test.
    #[must_use]
    pub fn contains(&self, id: u64) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Number of favorited items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the set holds no favorites.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Inserts an item, stamped with the current time.
    ///
    /// Re-inserting an existing id refreshes its record in place without
    /// moving it in the ordering.
    pub fn insert(&mut self, item: &ItemSummary) {
        self.insert_record(FavoriteRecord::new(item));
    }

    /// Removes an item by id, returning whether it was present.
    pub fn remove(&mut self, id: u64) -> bool {
        if self.by_id.remove(&id).is_none() {
            return false;
        }
        self.order.retain(|&existing| existing != id);
        true
    }

    /// Iterates records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &FavoriteRecord> {
        self.order.iter().filter_map(|id| self.by_id.get(id))
    }

    /// Projects the set into summaries for the favorites view, in insertion order.
    #[must_use]
    pub fn summaries(&self) -> Vec<ItemSummary> {
        self.iter().map(FavoriteRecord::summary).collect()
    }

    fn insert_record(&mut self, record: FavoriteRecord) {
        if !self.by_id.contains_key(&record.id) {
            self.order.push(record.id);
        }
        self.by_id.insert(record.id, record);
    }
}
