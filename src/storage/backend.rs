//! Favorites store abstraction.
//!
//! This module defines the [`FavoritesStore`] trait that abstracts over the
//! durable persistence slot for the favorites set. This allows seamless
//! switching between storage implementations without changing the
//! synchronizer logic, and lets tests substitute an in-memory store.
//!
//! # Design Philosophy
//!
//! The trait is deliberately a byte-level key-value surface with exactly one
//! slot: `load` and `save`. Encoding and decoding of the favorites payload is
//! the synchronizer's concern, not the store's. A store that cannot decode
//! anything also cannot corrupt anything.

use crate::domain::error::Result;

/// Abstraction over the durable favorites slot.
///
/// Implementations expose a single logical slot scoped to this app instance.
/// The store has exactly one writer (the favorites synchronizer); no external
/// concurrent mutation is assumed, and if multiple instances share the slot,
/// last-writer-wins applies.
///
/// # Implementations
///
/// - [`JsonFileStore`](crate::storage::JsonFileStore): file on disk with atomic writes (default)
pub trait FavoritesStore: Send {
    /// Reads the raw payload from the slot.
    ///
    /// Returns `Ok(None)` if nothing has ever been saved. The returned bytes
    /// are not validated; the caller decides what corruption means.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot exists but cannot be read.
    fn load(&self) -> Result<Option<Vec<u8>>>;

    /// Replaces the slot contents with the given payload.
    ///
    /// The write must be all-or-nothing: a crash mid-save must leave either
    /// the previous payload or the new one, never a torn mix.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn save(&mut self, bytes: &[u8]) -> Result<()>;
}
