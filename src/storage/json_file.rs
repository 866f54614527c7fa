//! File-backed favorites store.
//!
//! This module provides the default [`FavoritesStore`] implementation: a single
//! file on disk holding the serialized favorites payload. It uses atomic file
//! writes (write-to-temp + rename) to prevent corruption on crashes, the same
//! scheme used for every durable write in this crate.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(1) - loads the entire slot into memory once
//! - **Write**: O(n) - rewrites the entire payload
//! - **Best for**: a few hundred favorites, write-on-mutation persistence

use crate::domain::error::Result;
use crate::storage::backend::FavoritesStore;
use std::path::PathBuf;

/// File-backed store for the favorites slot.
///
/// The slot is one file; `load` reads it whole and `save` replaces it
/// atomically. Parent directories are created on construction so that a fresh
/// profile works without any manual setup.
pub struct JsonFileStore {
    /// Path to the slot file on disk.
    file_path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store addressing the given slot file.
    ///
    /// Parent directories are created automatically. The file itself is not
    /// created until the first `save`; a missing file reads as an absent slot.
    ///
    /// # Errors
    ///
    /// Returns an error if parent directory creation fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use animark::storage::JsonFileStore;
    /// use std::path::PathBuf;
    ///
    /// let store = JsonFileStore::new(PathBuf::from("/tmp/animark/favorites.json"))?;
    /// # Ok::<(), animark::domain::AnimarkError>(())
    /// ```
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing favorites store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        Ok(Self { file_path })
    }
}

impl FavoritesStore for JsonFileStore {
    fn load(&self) -> Result<Option<Vec<u8>>> {
        let _span = tracing::debug_span!("store_load", path = ?self.file_path).entered();

        if !self.file_path.exists() {
            tracing::debug!("slot file absent");
            return Ok(None);
        }

        let bytes = std::fs::read(&self.file_path)?;
        tracing::debug!(len = bytes.len(), "slot loaded");
        Ok(Some(bytes))
    }

    fn save(&mut self, bytes: &[u8]) -> Result<()> {
        let _span = tracing::debug_span!("store_save", path = ?self.file_path, len = bytes.len())
            .entered();

        let tmp_path = self.file_path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, bytes)?;

        tracing::trace!("renaming temporary file to final location");
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::debug!("slot saved");
        Ok(())
    }
}
