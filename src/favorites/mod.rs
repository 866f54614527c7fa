//! Favorites ownership and synchronization.
//!
//! This module holds the core of the client: the insertion-ordered
//! [`FavoriteSet`] and the [`FavoritesSynchronizer`] that owns it, mediating
//! every read and write against the durable store.
//!
//! # Modules
//!
//! - [`set`]: The in-memory favorites collection
//! - [`synchronizer`]: Hydration, membership queries, and toggle-with-persist

pub mod set;
pub mod synchronizer;

pub use set::FavoriteSet;
pub use synchronizer::{FavoritesSynchronizer, ToggleResult};
