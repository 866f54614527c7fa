//! Actions representing side effects to be executed by the runtime.
//!
//! This module defines the [`Action`] type, the imperative commands produced
//! by the event handler after processing input or fetch completions. Actions
//! bridge pure state transformations and effectful operations: catalog I/O
//! and rendering happen in the binary, never inside the handler.

/// Commands representing side effects to be executed by the runtime.
///
/// Produced by [`handle_event`](crate::app::handle_event) and executed in
/// sequence by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Performs a catalog search and feeds the outcome back as
    /// [`Event::SearchCompleted`](crate::app::Event::SearchCompleted).
    FetchCatalog {
        /// Request sequence number to hand back with the outcome.
        seq: u64,
        /// Effective query text.
        query: String,
    },

    /// Fetches and presents the detail record for one item.
    FetchDetail {
        /// Catalog id of the item.
        id: u64,
    },

    /// Re-renders the current display list.
    Render,

    /// Exits the interactive session.
    Quit,
}
