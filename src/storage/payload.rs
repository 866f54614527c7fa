//! Serialized form of the favorites set.
//!
//! This module defines the versioned JSON envelope written to the favorites
//! store. Entries are kept as an ordered array so that insertion order
//! survives the round trip; the envelope carries a format version for future
//! migrations.
//!
//! Decoding is strict: unparseable bytes or an unknown version produce a
//! `Storage` error. It is the hydration path's job to decide that corruption
//! degrades to an empty set; this module never makes that call.

use crate::domain::error::{AnimarkError, Result};
use crate::storage::models::FavoriteRecord;
use serde::{Deserialize, Serialize};

/// Current payload format version.
pub const PAYLOAD_VERSION: u32 = 1;

/// Versioned envelope around the ordered favorite entries.
///
/// This is the exact structure serialized into the favorites slot:
///
/// ```json
/// {
///   "version": 1,
///   "entries": [
///     {
///       "id": 1,
///       "title": "Cowboy Bebop",
///       "thumbnail_url": "https://cdn.example/1.jpg",
///       "score": 8.75,
///       "favorited_at": 1234567890
///     }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistencePayload {
    /// Format version for future migrations.
    version: u32,

    /// Favorited items in insertion order.
    #[serde(default)]
    entries: Vec<FavoriteRecord>,
}

impl PersistencePayload {
    /// Encodes the ordered entries into payload bytes.
    ///
    /// # Errors
    ///
    /// Returns a `Storage` error if serialization fails, which should never
    /// happen with valid records.
    pub fn encode(entries: &[FavoriteRecord]) -> Result<Vec<u8>> {
        let payload = Self {
            version: PAYLOAD_VERSION,
            entries: entries.to_vec(),
        };

        serde_json::to_vec_pretty(&payload)
            .map_err(|e| AnimarkError::Storage(format!("failed to serialize payload: {e}")))
    }

    /// Decodes payload bytes into the ordered entries.
    ///
    /// # Errors
    ///
    /// Returns a `Storage` error if the bytes are not valid JSON, do not match
    /// the payload shape, or carry an unsupported version.
    pub fn decode(bytes: &[u8]) -> Result<Vec<FavoriteRecord>> {
        let payload: Self = serde_json::from_slice(bytes)
            .map_err(|e| AnimarkError::Storage(format!("failed to parse payload: {e}")))?;

        if payload.version != PAYLOAD_VERSION {
            return Err(AnimarkError::Storage(format!(
                "unsupported payload version: {}",
                payload.version
            )));
        }

        tracing::debug!(entry_count = payload.entries.len(), "payload decoded");
        Ok(payload.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemSummary;

    fn record(id: u64, title: &str) -> FavoriteRecord {
        FavoriteRecord::new(&ItemSummary::new(id, title, format!("https://cdn.example/{id}.jpg")))
    }

    #[test]
    fn round_trips_empty_entries() {
        let bytes = PersistencePayload::encode(&[]).unwrap();
        assert_eq!(PersistencePayload::decode(&bytes).unwrap(), vec![]);
    }

    #[test]
    fn round_trips_large_entry_set_in_order() {
        let entries: Vec<FavoriteRecord> =
            (0..512).map(|i| record(i, &format!("title-{i}"))).collect();

        let bytes = PersistencePayload::encode(&entries).unwrap();
        let decoded = PersistencePayload::decode(&bytes).unwrap();

        assert_eq!(decoded, entries);
    }

    #[test]
    fn rejects_corrupt_bytes() {
        assert!(PersistencePayload::decode(b"not json at all").is_err());
        assert!(PersistencePayload::decode(b"{\"version\":").is_err());
    }

    #[test]
    fn rejects_unknown_version() {
        let bytes = br#"{"version": 99, "entries": []}"#;
        assert!(PersistencePayload::decode(bytes).is_err());
    }

    #[test]
    fn missing_entries_field_defaults_to_empty() {
        let bytes = br#"{"version": 1}"#;
        assert_eq!(PersistencePayload::decode(bytes).unwrap(), vec![]);
    }
}
