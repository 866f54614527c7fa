//! View mode and list status types for the application.
//!
//! This module defines the enums that control which list is displayed and how
//! the current search-result state should be presented. The status type keeps
//! "the catalog found nothing" and "the fetch failed" as distinct outcomes so
//! the UI can message them differently.

/// Which list the application is currently displaying.
///
/// Doubles as the provenance tag on a computed [`DisplayList`](crate::app::DisplayList):
/// either the latest search results or a live projection of the favorites set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// The most recently fetched search result list.
    SearchResults,

    /// The favorites set, in the order items were favorited.
    Favorites,
}

impl ViewMode {
    /// Returns the other view mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::SearchResults => Self::Favorites,
            Self::Favorites => Self::SearchResults,
        }
    }
}

/// Presentation state of the current list.
///
/// `NoResults` and `FetchFailed` are deliberately separate variants: an empty
/// result set is a legitimate answer from the catalog, while a failed fetch
/// produced no answer at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStatus {
    /// A query has been issued and its result has not yet been applied.
    Pending,

    /// The list holds at least one item.
    Loaded,

    /// The fetch succeeded but matched nothing (or the favorites set is empty).
    NoResults,

    /// The fetch failed; the list is empty because there was no answer.
    FetchFailed,
}
