//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the interactive runtime (main.rs) and the
//! domain/storage/catalog layers. It implements the event-driven architecture
//! that reconciles the displayed list with search results and the favorites
//! set.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──────── Fetch Completions ───────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: View mode and list status types
//! - [`state`]: Central state container and display list computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{ListStatus, ViewMode};
pub use state::{AppState, DisplayItem, DisplayList, QueryTicket};
