//! Storage record models for the persistence layer.
//!
//! This module defines the raw record type written into the favorites payload.
//! It is separate from the domain [`ItemSummary`] to keep the on-disk
//! representation decoupled from business logic; the record additionally
//! stamps when the item was favorited, which drives insertion ordering of the
//! favorites view.

use crate::domain::ItemSummary;
use serde::{Deserialize, Serialize};

/// A favorited catalog item as stored on disk.
///
/// Carries every `ItemSummary` field so the favorites view renders without a
/// re-fetch, plus the favoriting timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteRecord {
    /// Stable catalog identifier.
    pub id: u64,

    /// Display title, captured at favoriting time.
    pub title: String,

    /// Thumbnail image URI, captured at favoriting time.
    pub thumbnail_url: String,

    /// Community score at favoriting time, if any.
    pub score: Option<f64>,

    /// Unix timestamp of when the item was favorited.
    pub favorited_at: i64,
}

impl FavoriteRecord {
    /// Creates a record from a catalog summary, stamped with the current time.
    ///
    /// # Examples
    ///
    /// ```
    /// use animark::domain::ItemSummary;
    /// use animark::storage::FavoriteRecord;
    ///
    /// let record = FavoriteRecord::new(&ItemSummary::new(1, "Cowboy Bebop", ""));
    /// assert_eq!(record.id, 1);
    /// ```
    #[must_use]
    pub fn new(item: &ItemSummary) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            thumbnail_url: item.thumbnail_url.clone(),
            score: item.score,
            favorited_at: chrono::Utc::now().timestamp(),
        }
    }

    /// Reconstructs the domain summary for rendering the favorites view.
    #[must_use]
    pub fn summary(&self) -> ItemSummary {
        ItemSummary {
            id: self.id,
            title: self.title.clone(),
            thumbnail_url: self.thumbnail_url.clone(),
            score: self.score,
        }
    }
}
