//! Storage layer for the durable favorites slot.
//!
//! This module provides the persistence abstraction for the favorites set: a
//! byte-level single-slot store, its default file-backed implementation with
//! atomic writes, and the versioned payload format written into the slot.
//!
//! # Modules
//!
//! - `backend`: Store trait abstraction for backend implementations
//! - `json_file`: File-backed store implementation
//! - `models`: Storage record types separate from domain models
//! - `payload`: Versioned JSON envelope format

pub mod backend;
pub mod json_file;
pub mod models;
pub mod payload;

pub use backend::FavoritesStore;
pub use json_file::JsonFileStore;
pub use models::FavoriteRecord;
pub use payload::{PersistencePayload, PAYLOAD_VERSION};
