//! Catalog item domain models.
//!
//! This module defines [`ItemSummary`], the minimal catalog record needed for
//! list display and favoriting, and [`ItemDetail`], the richer record returned
//! by the per-item detail endpoint. Summaries are immutable once decoded from a
//! catalog response; the identifier is assigned by the remote catalog and is
//! never reused.

use serde::{Deserialize, Serialize};

/// Minimal catalog record for list display and favoriting.
///
/// A summary carries everything needed to render an item in a result list and
/// to re-render it later from the favorites set without a re-fetch: the stable
/// catalog identifier, the display title, and a thumbnail reference. The
/// optional score is display-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSummary {
    /// Stable catalog identifier (the API's `mal_id`). Source-assigned, never reused.
    pub id: u64,

    /// Display title.
    pub title: String,

    /// Thumbnail image URI. May be empty if the catalog supplied no image.
    pub thumbnail_url: String,

    /// Community score, when the catalog provides one.
    pub score: Option<f64>,
}

impl ItemSummary {
    /// Creates a summary with no score.
    ///
    /// # Examples
    ///
    /// ```
    /// use animark::domain::ItemSummary;
    ///
    /// let item = ItemSummary::new(1, "Cowboy Bebop", "https://cdn.example/1.jpg");
    /// assert_eq!(item.id, 1);
    /// assert!(item.score.is_none());
    /// ```
    #[must_use]
    pub fn new(id: u64, title: impl Into<String>, thumbnail_url: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            thumbnail_url: thumbnail_url.into(),
            score: None,
        }
    }
}

/// Full catalog record returned by the detail endpoint.
///
/// Owned by the detail view; never persisted and never part of the favorites
/// set, which only stores [`ItemSummary`] fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDetail {
    pub id: u64,
    pub title: String,
    pub synopsis: Option<String>,
    pub score: Option<f64>,
    pub episodes: Option<u32>,
    pub thumbnail_url: String,
}
