//! Favorites synchronization between memory and durable storage.
//!
//! This module implements [`FavoritesSynchronizer`], the single authoritative
//! owner of the [`FavoriteSet`]. Every read and write of favorite status goes
//! through it: hydration from storage at startup, O(1) membership queries, and
//! the toggle operation that mutates the set and re-persists it.
//!
//! # Consistency Model
//!
//! The in-memory set is always the most recent truth within a session. Every
//! mutation re-serializes the full set and saves it; a failed save keeps the
//! in-memory change and logs a warning, so the durable copy lags until the
//! next successful mutation or the next hydration. A corrupt or unreadable
//! slot hydrates as an empty set instead of failing.

use crate::favorites::set::FavoriteSet;
use crate::storage::backend::FavoritesStore;
use crate::storage::payload::PersistencePayload;
use crate::domain::ItemSummary;

/// Result of a toggle: what happened to membership, and whether the durable
/// copy caught up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleResult {
    /// `true` if the item is a favorite after the toggle.
    pub is_favorite: bool,

    /// `false` if the save failed and the durable copy lags the in-memory set.
    pub persisted: bool,
}

/// Single authoritative owner of the favorites set.
///
/// Constructed exactly once at startup via [`hydrate`](Self::hydrate), before
/// any toggle is accepted; the constructor-as-hydration shape makes it
/// impossible to toggle against an unhydrated set.
pub struct FavoritesSynchronizer {
    /// Durable slot backing the set.
    store: Box<dyn FavoritesStore>,

    /// The canonical in-memory set.
    set: FavoriteSet,
}

impl FavoritesSynchronizer {
    /// Hydrates the favorites set from the store.
    ///
    /// An absent slot yields an empty set. A slot that fails to load or decode
    /// also yields an empty set, with the failure logged: storage corruption
    /// is non-fatal and never propagates to the caller.
    #[must_use]
    pub fn hydrate(store: Box<dyn FavoritesStore>) -> Self {
        let _span = tracing::debug_span!("hydrate_favorites").entered();

        let set = match store.load() {
            Ok(None) => {
                tracing::debug!("no stored favorites, starting empty");
                FavoriteSet::new()
            }
            Ok(Some(bytes)) => match PersistencePayload::decode(&bytes) {
                Ok(records) => {
                    tracing::debug!(count = records.len(), "favorites hydrated");
                    FavoriteSet::from_records(records)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "stored favorites corrupt, starting empty");
                    FavoriteSet::new()
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "failed to read stored favorites, starting empty");
                FavoriteSet::new()
            }
        };

        Self { store, set }
    }

    /// O(1) membership test against the in-memory set. No side effects.
    #[must_use]
    pub fn is_favorite(&self, id: u64) -> bool {
        self.set.contains(id)
    }

    /// Read access to the canonical set.
    #[must_use]
    pub fn set(&self) -> &FavoriteSet {
        &self.set
    }

    /// Toggles an item's membership and persists the new set.
    ///
    /// If the item's id is present it is removed; otherwise the item is
    /// inserted with its supplied attributes, so toggling an item never seen
    /// in any display list is legal. Toggling twice with the same id is the
    /// identity operation on membership.
    ///
    /// The in-memory mutation happens synchronously as one replace-or-insert
    /// against the owned set, then the full set is re-serialized and saved.
    /// A save failure does not roll the mutation back; it is reported through
    /// [`ToggleResult::persisted`] and logged as a warning.
    pub fn toggle(&mut self, item: &ItemSummary) -> ToggleResult {
        let _span =
            tracing::debug_span!("toggle_favorite", id = item.id, title = %item.title).entered();

        let is_favorite = if self.set.contains(item.id) {
            self.set.remove(item.id);
            tracing::debug!("favorite removed");
            false
        } else {
            self.set.insert(item);
            tracing::debug!("favorite added");
            true
        };

        let persisted = self.persist();

        ToggleResult {
            is_favorite,
            persisted,
        }
    }

    /// Re-serializes the full set and writes it to the slot.
    ///
    /// Returns whether the save succeeded. The durable copy self-corrects on
    /// the next successful mutation, so failure here is a warning, not an error.
    fn persist(&mut self) -> bool {
        let result = PersistencePayload::encode(&self.set.records())
            .and_then(|bytes| self.store.save(&bytes));

        match result {
            Ok(()) => {
                tracing::debug!(count = self.set.len(), "favorites persisted");
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to persist favorites, in-memory set kept");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::{AnimarkError, Result};
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// In-memory store that records every call and can be told to fail saves.
    struct RecordingStore {
        slot: Arc<Mutex<Option<Vec<u8>>>>,
        saves: Arc<AtomicUsize>,
        fail_saves: Arc<AtomicBool>,
    }

    impl FavoritesStore for RecordingStore {
        fn load(&self) -> Result<Option<Vec<u8>>> {
            Ok(self.slot.lock().unwrap().clone())
        }

        fn save(&mut self, bytes: &[u8]) -> Result<()> {
            self.saves.fetch_add(1, Ordering::SeqCst);
            if self.fail_saves.load(Ordering::SeqCst) {
                return Err(AnimarkError::Storage("disk full".to_string()));
            }
            *self.slot.lock().unwrap() = Some(bytes.to_vec());
            Ok(())
        }
    }

    struct Harness {
        slot: Arc<Mutex<Option<Vec<u8>>>>,
        saves: Arc<AtomicUsize>,
        fail_saves: Arc<AtomicBool>,
    }

    impl Harness {
        fn new(initial: Option<Vec<u8>>) -> Self {
            Self {
                slot: Arc::new(Mutex::new(initial)),
                saves: Arc::new(AtomicUsize::new(0)),
                fail_saves: Arc::new(AtomicBool::new(false)),
            }
        }

        fn store(&self) -> Box<dyn FavoritesStore> {
            Box::new(RecordingStore {
                slot: Arc::clone(&self.slot),
                saves: Arc::clone(&self.saves),
                fail_saves: Arc::clone(&self.fail_saves),
            })
        }

        fn save_count(&self) -> usize {
            self.saves.load(Ordering::SeqCst)
        }
    }

    fn item(id: u64, title: &str) -> ItemSummary {
        ItemSummary::new(id, title, format!("https://cdn.example/{id}.jpg"))
    }

    #[test]
    fn hydrates_empty_from_absent_slot() {
        let harness = Harness::new(None);
        let sync = FavoritesSynchronizer::hydrate(harness.store());
        assert!(sync.set().is_empty());
    }

    #[test]
    fn hydrates_empty_from_corrupt_slot() {
        let harness = Harness::new(Some(b"\x00garbage".to_vec()));
        let sync = FavoritesSynchronizer::hydrate(harness.store());
        assert!(sync.set().is_empty());
    }

    #[test]
    fn hydrate_and_reads_never_write() {
        let harness = Harness::new(None);
        let sync = FavoritesSynchronizer::hydrate(harness.store());

        for id in 0..100 {
            let _ = sync.is_favorite(id);
        }
        assert_eq!(harness.save_count(), 0);
    }

    #[test]
    fn toggle_adds_then_removes() {
        let harness = Harness::new(None);
        let mut sync = FavoritesSynchronizer::hydrate(harness.store());

        let result = sync.toggle(&item(1, "A"));
        assert!(result.is_favorite);
        assert!(result.persisted);
        assert!(sync.is_favorite(1));
        assert_eq!(sync.set().len(), 1);

        let result = sync.toggle(&item(1, "A"));
        assert!(!result.is_favorite);
        assert!(!sync.is_favorite(1));
        assert!(sync.set().is_empty());
    }

    #[test]
    fn even_length_toggle_sequences_are_identity() {
        let harness = Harness::new(None);
        let mut sync = FavoritesSynchronizer::hydrate(harness.store());
        let subject = item(42, "subject");

        for toggles in [2usize, 4, 8] {
            let before = sync.is_favorite(subject.id);
            for _ in 0..toggles {
                sync.toggle(&subject);
            }
            assert_eq!(sync.is_favorite(subject.id), before);
        }
    }

    #[test]
    fn every_mutation_saves_full_set() {
        let harness = Harness::new(None);
        let mut sync = FavoritesSynchronizer::hydrate(harness.store());

        sync.toggle(&item(1, "A"));
        sync.toggle(&item(2, "B"));
        sync.toggle(&item(1, "A"));
        assert_eq!(harness.save_count(), 3);
    }

    #[test]
    fn save_failure_keeps_in_memory_change() {
        let harness = Harness::new(None);
        let mut sync = FavoritesSynchronizer::hydrate(harness.store());

        harness.fail_saves.store(true, Ordering::SeqCst);
        let result = sync.toggle(&item(1, "A"));
        assert!(result.is_favorite);
        assert!(!result.persisted);
        assert!(sync.is_favorite(1));

        // Next successful mutation writes the whole set, catching storage up.
        harness.fail_saves.store(false, Ordering::SeqCst);
        let result = sync.toggle(&item(2, "B"));
        assert!(result.persisted);

        let saved = harness.slot.lock().unwrap().clone().unwrap();
        let records = PersistencePayload::decode(&saved).unwrap();
        let ids: Vec<u64> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn survives_restart_via_round_trip() {
        let harness = Harness::new(None);
        let mut sync = FavoritesSynchronizer::hydrate(harness.store());
        sync.toggle(&item(5, "kept"));
        sync.toggle(&item(6, "dropped"));
        sync.toggle(&item(6, "dropped"));
        let before = sync.set().clone();
        drop(sync);

        let rehydrated = FavoritesSynchronizer::hydrate(harness.store());
        assert_eq!(rehydrated.set(), &before);
        assert!(rehydrated.is_favorite(5));
        assert!(!rehydrated.is_favorite(6));
    }
}
