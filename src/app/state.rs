//! Application state and display list reconciliation.
//!
//! This module defines [`AppState`], the central state container, which acts
//! as the list reconciliation controller: it owns the currently displayed
//! list, sequences search requests against user input, and overlays live
//! favorite membership onto every displayed item.
//!
//! # State Components
//!
//! - **Favorites synchronizer**: authoritative owner of the favorites set
//! - **Search results**: the last applied result list and its status
//! - **View mode**: search results vs. favorites projection
//! - **Request sequence**: monotonically increasing counter for stale-response
//!   suppression
//!
//! # Stale-Response Suppression
//!
//! Every issued query gets a fresh sequence number from [`AppState::begin_query`];
//! a completed fetch is applied through [`AppState::apply_search`] only if its
//! number still matches the latest issued one. A result that arrives after a
//! newer query was issued is discarded, so only the most recent query (or a
//! later one) can ever update the displayed list.

use crate::app::modes::{ListStatus, ViewMode};
use crate::domain::error::Result;
use crate::domain::ItemSummary;
use crate::favorites::FavoritesSynchronizer;

/// Handle for one issued query, compared at resolution time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTicket {
    /// Sequence number; only the highest issued number may apply its result.
    pub seq: u64,

    /// The effective query text (the default query if the input was blank).
    pub query: String,
}

/// A single renderable row: the catalog item plus its live membership flag.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayItem {
    pub summary: ItemSummary,
    pub is_favorite: bool,
}

/// The transient, derived list currently rendered.
///
/// Rebuilt on every query completion, view toggle, or favorites mutation;
/// never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayList {
    /// Where the items came from.
    pub provenance: ViewMode,

    /// Presentation state, distinguishing empty results from failed fetches.
    pub status: ListStatus,

    /// Ordered items with membership annotations.
    pub items: Vec<DisplayItem>,
}

/// Central application state container.
///
/// Owns the favorites synchronizer and the last search results, and computes
/// the annotated [`DisplayList`] on demand. All mutation happens through the
/// event handler on a single flow of control; each field is replaced
/// atomically, never left half-updated.
pub struct AppState {
    /// Authoritative owner of the favorites set.
    pub favorites: FavoritesSynchronizer,

    /// Current view: search results or favorites projection.
    pub view_mode: ViewMode,

    /// The last applied search results, in catalog order.
    results: Vec<ItemSummary>,

    /// Status of the search-results list.
    status: ListStatus,

    /// The effective text of the most recently issued query.
    last_query: String,

    /// Highest issued request sequence number.
    latest_seq: u64,

    /// Query substituted when the user submits blank input.
    default_query: String,
}

impl AppState {
    /// Creates state around a hydrated synchronizer.
    ///
    /// The result list starts empty with `Pending` status; the runtime is
    /// expected to issue the initial (default) query immediately.
    #[must_use]
    pub fn new(favorites: FavoritesSynchronizer, default_query: impl Into<String>) -> Self {
        Self {
            favorites,
            view_mode: ViewMode::SearchResults,
            results: Vec::new(),
            status: ListStatus::Pending,
            last_query: String::new(),
            latest_seq: 0,
            default_query: default_query.into(),
        }
    }

    /// Registers a new query, superseding any in-flight one.
    ///
    /// Trims the input; blank input falls back to the configured default
    /// query rather than producing an empty list. Returns the ticket the
    /// runtime must hand back together with the fetch outcome.
    pub fn begin_query(&mut self, text: &str) -> QueryTicket {
        let trimmed = text.trim();
        let query = if trimmed.is_empty() {
            self.default_query.clone()
        } else {
            trimmed.to_string()
        };

        self.latest_seq += 1;
        self.status = ListStatus::Pending;
        self.last_query.clone_from(&query);

        tracing::debug!(seq = self.latest_seq, query = %query, "query issued");

        QueryTicket {
            seq: self.latest_seq,
            query,
        }
    }

    /// Applies a completed fetch, unless it has been superseded.
    ///
    /// Returns `false` if the ticket is stale (a newer query was issued after
    /// this one); stale outcomes are discarded without touching the list. On
    /// a fresh ticket the result list and status are replaced in one step:
    /// a failure becomes `FetchFailed`, an empty result `NoResults`.
    pub fn apply_search(&mut self, seq: u64, outcome: Result<Vec<ItemSummary>>) -> bool {
        if seq != self.latest_seq {
            tracing::debug!(
                seq = seq,
                latest_seq = self.latest_seq,
                "discarding stale search result"
            );
            return false;
        }

        match outcome {
            Ok(items) => {
                self.status = if items.is_empty() {
                    ListStatus::NoResults
                } else {
                    ListStatus::Loaded
                };
                tracing::debug!(seq = seq, count = items.len(), "search result applied");
                self.results = items;
            }
            Err(e) => {
                tracing::debug!(seq = seq, error = %e, "search failed");
                self.results = Vec::new();
                self.status = ListStatus::FetchFailed;
            }
        }

        true
    }

    /// Switches between search results and the favorites projection.
    ///
    /// Does not issue any remote query; the previous search results stay
    /// cached for when the view switches back.
    pub fn toggle_view(&mut self) {
        self.view_mode = self.view_mode.toggled();
        tracing::debug!(view_mode = ?self.view_mode, "view toggled");
    }

    /// The effective text of the most recently issued query.
    #[must_use]
    pub fn last_query(&self) -> &str {
        &self.last_query
    }

    /// Computes the annotated display list for the current view.
    ///
    /// Membership flags are read live from the synchronizer, so recomputing
    /// after any toggle reflects the change even though the underlying item
    /// list did not move. The favorites view projects the set in insertion
    /// order and derives its own status from emptiness.
    #[must_use]
    pub fn display_list(&self) -> DisplayList {
        match self.view_mode {
            ViewMode::SearchResults => DisplayList {
                provenance: ViewMode::SearchResults,
                status: self.status,
                items: self.annotate(self.results.iter().cloned()),
            },
            ViewMode::Favorites => {
                let summaries = self.favorites.set().summaries();
                let status = if summaries.is_empty() {
                    ListStatus::NoResults
                } else {
                    ListStatus::Loaded
                };
                DisplayList {
                    provenance: ViewMode::Favorites,
                    status,
                    items: self.annotate(summaries.into_iter()),
                }
            }
        }
    }

    fn annotate(&self, items: impl Iterator<Item = ItemSummary>) -> Vec<DisplayItem> {
        items
            .map(|summary| {
                let is_favorite = self.favorites.is_favorite(summary.id);
                DisplayItem {
                    summary,
                    is_favorite,
                }
            })
            .collect()
    }
}
