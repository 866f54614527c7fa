//! Domain layer for the animark client.
//!
//! This module contains the core domain types for the client, independent of
//! HTTP, persistence, or terminal concerns. It keeps the catalog item model and
//! error taxonomy isolated from external dependencies.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`item`]: Catalog item models (summary and detail)
//!
//! # Examples
//!
//! ```
//! use animark::domain::{ItemSummary, Result};
//!
//! fn first_item() -> Result<ItemSummary> {
//!     Ok(ItemSummary::new(1, "Cowboy Bebop", "https://cdn.example/1.jpg"))
//! }
//! ```

pub mod error;
pub mod item;

pub use error::{AnimarkError, Result};
pub use item::{ItemDetail, ItemSummary};
