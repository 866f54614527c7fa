//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user input and
//! fetch completions, translating them into state changes and action
//! sequences. It is the only place application state is mutated, which keeps
//! every transition all-or-nothing: an event either fully applies or leaves
//! the state untouched.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow:
//! 1. Events arrive from the runtime (user commands or completed fetches)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! Because fetches complete as events rather than inline, a query that was
//! superseded mid-flight simply finds its sequence number outdated when its
//! `SearchCompleted` event arrives, and is dropped without a render.

use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::ItemSummary;

/// Events triggered by user input or completed fetches.
#[derive(Debug)]
pub enum Event {
    /// The user submitted query text. Blank text issues the default query.
    SubmitQuery(String),

    /// A catalog search finished, successfully or not.
    SearchCompleted {
        /// Sequence number from the ticket that issued the query.
        seq: u64,
        /// The fetch outcome; an error becomes the failed list status.
        outcome: Result<Vec<ItemSummary>>,
    },

    /// The user toggled an item's favorite membership.
    ///
    /// Carries the full summary so that items outside the current display
    /// list can be favorited too.
    ToggleFavorite(ItemSummary),

    /// The user switched between search results and the favorites view.
    ToggleView,

    /// The user asked for an item's detail record.
    ShowDetail(u64),

    /// The user asked to exit.
    Quit,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Errors
///
/// Reserved for state mutation failures; the current transitions are
/// infallible, but the signature matches the rest of the crate so new
/// transitions can fail without churning every caller.
pub fn handle_event(state: &mut AppState, event: Event) -> Result<Vec<Action>> {
    let _span = tracing::debug_span!("handle_event").entered();

    match event {
        Event::SubmitQuery(text) => {
            let ticket = state.begin_query(&text);
            Ok(vec![Action::FetchCatalog {
                seq: ticket.seq,
                query: ticket.query,
            }])
        }
        Event::SearchCompleted { seq, outcome } => {
            if state.apply_search(seq, outcome) {
                Ok(vec![Action::Render])
            } else {
                // Superseded by a newer query; nothing on screen changes.
                Ok(vec![])
            }
        }
        Event::ToggleFavorite(item) => {
            let result = state.favorites.toggle(&item);
            if !result.persisted {
                tracing::warn!(id = item.id, "favorite change not yet saved to disk");
            }
            Ok(vec![Action::Render])
        }
        Event::ToggleView => {
            state.toggle_view();
            Ok(vec![Action::Render])
        }
        Event::ShowDetail(id) => Ok(vec![Action::FetchDetail { id }]),
        Event::Quit => Ok(vec![Action::Quit]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::{ListStatus, ViewMode};
    use crate::domain::error::AnimarkError;
    use crate::domain::ItemSummary;
    use crate::favorites::FavoritesSynchronizer;
    use crate::storage::backend::FavoritesStore;
    use crate::storage::JsonFileStore;

    fn fresh_state(dir: &tempfile::TempDir) -> AppState {
        let store: Box<dyn FavoritesStore> =
            Box::new(JsonFileStore::new(dir.path().join("favorites.json")).unwrap());
        AppState::new(FavoritesSynchronizer::hydrate(store), "kids")
    }

    fn item(id: u64, title: &str) -> ItemSummary {
        ItemSummary::new(id, title, format!("https://cdn.example/{id}.jpg"))
    }

    fn titles(state: &AppState) -> Vec<String> {
        state
            .display_list()
            .items
            .iter()
            .map(|d| d.summary.title.clone())
            .collect()
    }

    #[test]
    fn blank_query_issues_the_default() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = fresh_state(&dir);

        let actions = handle_event(&mut state, Event::SubmitQuery("   ".to_string())).unwrap();
        assert_eq!(
            actions,
            vec![Action::FetchCatalog {
                seq: 1,
                query: "kids".to_string()
            }]
        );
        assert_eq!(state.last_query(), "kids");
    }

    #[test]
    fn stale_response_is_suppressed() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = fresh_state(&dir);

        let cat = handle_event(&mut state, Event::SubmitQuery("cat".to_string())).unwrap();
        let dog = handle_event(&mut state, Event::SubmitQuery("dog".to_string())).unwrap();
        let Action::FetchCatalog { seq: cat_seq, .. } = &cat[0] else {
            panic!("expected fetch action");
        };
        let Action::FetchCatalog { seq: dog_seq, .. } = &dog[0] else {
            panic!("expected fetch action");
        };

        // Dog's result lands first.
        let actions = handle_event(
            &mut state,
            Event::SearchCompleted {
                seq: *dog_seq,
                outcome: Ok(vec![item(2, "dog result")]),
            },
        )
        .unwrap();
        assert_eq!(actions, vec![Action::Render]);

        // Cat's late result must be discarded, with no render.
        let actions = handle_event(
            &mut state,
            Event::SearchCompleted {
                seq: *cat_seq,
                outcome: Ok(vec![item(1, "cat result")]),
            },
        )
        .unwrap();
        assert!(actions.is_empty());
        assert_eq!(titles(&state), vec!["dog result"]);
    }

    #[test]
    fn failed_fetch_is_distinct_from_empty_result() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = fresh_state(&dir);

        let ticket = state.begin_query("nothing");
        state.apply_search(ticket.seq, Ok(vec![]));
        assert_eq!(state.display_list().status, ListStatus::NoResults);

        let ticket = state.begin_query("unreachable");
        state.apply_search(
            ticket.seq,
            Err(AnimarkError::Fetch("connection refused".to_string())),
        );
        let list = state.display_list();
        assert_eq!(list.status, ListStatus::FetchFailed);
        assert!(list.items.is_empty());
    }

    #[test]
    fn toggle_view_projects_favorites_without_refetch() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = fresh_state(&dir);

        let ticket = state.begin_query("space");
        state.apply_search(ticket.seq, Ok(vec![item(1, "bebop"), item(2, "trigun")]));

        handle_event(&mut state, Event::ToggleFavorite(item(2, "trigun"))).unwrap();
        handle_event(&mut state, Event::ToggleFavorite(item(1, "bebop"))).unwrap();
        handle_event(&mut state, Event::ToggleView).unwrap();

        let list = state.display_list();
        assert_eq!(list.provenance, ViewMode::Favorites);
        // Insertion order, not catalog order.
        assert_eq!(titles(&state), vec!["trigun", "bebop"]);
        assert!(list.items.iter().all(|d| d.is_favorite));

        // Search results are still cached on the way back.
        handle_event(&mut state, Event::ToggleView).unwrap();
        assert_eq!(titles(&state), vec!["bebop", "trigun"]);
    }

    #[test]
    fn annotations_recompute_when_set_changes_but_list_does_not() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = fresh_state(&dir);

        let ticket = state.begin_query("space");
        state.apply_search(ticket.seq, Ok(vec![item(1, "bebop"), item(2, "trigun")]));
        assert!(!state.display_list().items[0].is_favorite);

        handle_event(&mut state, Event::ToggleFavorite(item(1, "bebop"))).unwrap();
        let list = state.display_list();
        assert!(list.items[0].is_favorite);
        assert!(!list.items[1].is_favorite);

        handle_event(&mut state, Event::ToggleFavorite(item(1, "bebop"))).unwrap();
        assert!(!state.display_list().items[0].is_favorite);
    }

    #[test]
    fn favoriting_an_item_outside_the_list_is_legal() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = fresh_state(&dir);

        handle_event(&mut state, Event::ToggleFavorite(item(99, "never displayed"))).unwrap();
        assert!(state.favorites.is_favorite(99));

        state.toggle_view();
        assert_eq!(titles(&state), vec!["never displayed"]);
    }

    #[test]
    fn empty_favorites_view_reports_no_results_not_failure() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = fresh_state(&dir);

        state.toggle_view();
        assert_eq!(state.display_list().status, ListStatus::NoResults);
    }
}
